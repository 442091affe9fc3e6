//! Wizard steps in their fixed order.

use std::fmt;

use egui_phosphor::regular::{
    CHART_BAR, CHECK_CIRCLE, DATABASE, DOWNLOAD_SIMPLE, FILE_TEXT, FUNNEL, LOCK, PENCIL, UPLOAD,
};
use serde::{Deserialize, Serialize};

/// One stage of the report wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Collect,
    Integrate,
    Process,
    Filter,
    Access,
    Analyze,
    Report,
    Collaborate,
    Compliance,
    Distribute,
}

impl Step {
    /// All steps in wizard order.
    pub const ALL: [Step; 10] = [
        Step::Collect,
        Step::Integrate,
        Step::Process,
        Step::Filter,
        Step::Access,
        Step::Analyze,
        Step::Report,
        Step::Collaborate,
        Step::Compliance,
        Step::Distribute,
    ];

    pub const FIRST: Step = Step::Collect;
    pub const LAST: Step = Step::Distribute;

    /// Stable identifier tag.
    pub fn id(&self) -> &'static str {
        match self {
            Step::Collect => "collect",
            Step::Integrate => "integrate",
            Step::Process => "process",
            Step::Filter => "filter",
            Step::Access => "access",
            Step::Analyze => "analyze",
            Step::Report => "report",
            Step::Collaborate => "collaborate",
            Step::Compliance => "compliance",
            Step::Distribute => "distribute",
        }
    }

    /// Get the display label for the step.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Collect => "Data Collection",
            Step::Integrate => "Data Integration",
            Step::Process => "Data Processing",
            Step::Filter => "Filter Data",
            Step::Access => "Access Control",
            Step::Analyze => "Data Analysis",
            Step::Report => "Generate Report",
            Step::Collaborate => "Collaborative Editing",
            Step::Compliance => "Compliance Check",
            Step::Distribute => "Distribution",
        }
    }

    /// Phosphor glyph shown in the progress row.
    pub fn icon(&self) -> &'static str {
        match self {
            Step::Collect => UPLOAD,
            Step::Integrate => DATABASE,
            Step::Process => CHART_BAR,
            Step::Filter => FUNNEL,
            Step::Access => LOCK,
            Step::Analyze => CHART_BAR,
            Step::Report => FILE_TEXT,
            Step::Collaborate => PENCIL,
            Step::Compliance => CHECK_CIRCLE,
            Step::Distribute => DOWNLOAD_SIMPLE,
        }
    }

    /// Position in the sequence (0-based).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The following step, or `None` at the end of the sequence.
    pub fn next(&self) -> Option<Step> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The preceding step, or `None` at the start of the sequence.
    pub fn previous(&self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Whether the step has a working panel rather than a placeholder.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Step::Collect | Step::Filter)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_order_matches_index() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert_eq!(Step::ALL[0], Step::FIRST);
        assert_eq!(Step::ALL[9], Step::LAST);
    }

    #[test]
    fn test_next_and_previous_at_bounds() {
        assert_eq!(Step::Collect.previous(), None);
        assert_eq!(Step::Distribute.next(), None);
        assert_eq!(Step::Collect.next(), Some(Step::Integrate));
        assert_eq!(Step::Distribute.previous(), Some(Step::Compliance));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = Step::ALL.iter().map(Step::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Step::ALL.len());
    }

    #[test]
    fn test_only_collect_and_filter_are_implemented() {
        let implemented: Vec<_> = Step::ALL.into_iter().filter(Step::is_implemented).collect();
        assert_eq!(implemented, vec![Step::Collect, Step::Filter]);
    }
}
