//! Report content filters and the current selection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::WizardError;

/// One entry of the fixed filter catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReportFilter {
    #[serde(rename = "Graduation Rates")]
    GraduationRates,
    #[serde(rename = "Budget Allocation")]
    BudgetAllocation,
    #[serde(rename = "Research Output")]
    ResearchOutput,
    #[serde(rename = "Faculty Achievements")]
    FacultyAchievements,
}

impl ReportFilter {
    /// Catalog in display order.
    pub const ALL: [ReportFilter; 4] = [
        ReportFilter::GraduationRates,
        ReportFilter::BudgetAllocation,
        ReportFilter::ResearchOutput,
        ReportFilter::FacultyAchievements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportFilter::GraduationRates => "Graduation Rates",
            ReportFilter::BudgetAllocation => "Budget Allocation",
            ReportFilter::ResearchOutput => "Research Output",
            ReportFilter::FacultyAchievements => "Faculty Achievements",
        }
    }
}

impl FromStr for ReportFilter {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportFilter::ALL
            .into_iter()
            .find(|filter| filter.label() == s)
            .ok_or_else(|| WizardError::InvalidFilterLabel(s.to_string()))
    }
}

impl fmt::Display for ReportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of selected filters. Iterates in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSelection(BTreeSet<ReportFilter>);

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, filter: ReportFilter) -> bool {
        self.0.contains(&filter)
    }

    /// Flip membership of `filter`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, filter: ReportFilter) -> bool {
        if self.0.remove(&filter) {
            false
        } else {
            self.0.insert(filter);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ReportFilter> + '_ {
        self.0.iter().copied()
    }

    /// Labels of the selected filters, in catalog order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|f| f.label()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ReportFilter> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = ReportFilter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_labels() {
        for filter in ReportFilter::ALL {
            assert_eq!(filter.label().parse::<ReportFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        assert_eq!(
            "graduation rates".parse::<ReportFilter>(),
            Err(WizardError::InvalidFilterLabel("graduation rates".to_string()))
        );
        assert!("Enrollment".parse::<ReportFilter>().is_err());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = FilterSelection::new();
        assert!(selection.toggle(ReportFilter::ResearchOutput));
        assert!(selection.contains(ReportFilter::ResearchOutput));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle(ReportFilter::ResearchOutput));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_labels_follow_catalog_order() {
        let selection: FilterSelection = [ReportFilter::FacultyAchievements, ReportFilter::GraduationRates]
            .into_iter()
            .collect();
        assert_eq!(selection.labels(), vec!["Graduation Rates", "Faculty Achievements"]);
    }

    #[test]
    fn test_serializes_as_label_list() {
        let selection: FilterSelection = [ReportFilter::BudgetAllocation].into_iter().collect();
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"["Budget Allocation"]"#);
    }
}
