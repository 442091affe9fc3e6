//! Departments, their submission records, and per-department payload schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::wizard::WizardError;

/// Organizational unit that submits report data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Admissions,
    Finance,
    Academic,
    Research,
}

/// How a payload field is entered and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number (`u64`).
    Count,
    /// Decimal number (`f64`).
    Amount,
}

/// Describes one optional field of a department payload.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const ADMISSIONS_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "applications", label: "Applications", kind: FieldKind::Count },
    FieldSpec { key: "admitted", label: "Admitted", kind: FieldKind::Count },
    FieldSpec { key: "enrolled", label: "Enrolled", kind: FieldKind::Count },
];

const FINANCE_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "budget", label: "Budget", kind: FieldKind::Amount },
    FieldSpec { key: "expenditure", label: "Expenditure", kind: FieldKind::Amount },
];

const ACADEMIC_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "programs", label: "Programs", kind: FieldKind::Count },
    FieldSpec { key: "graduation_rate", label: "Graduation rate (%)", kind: FieldKind::Amount },
];

const RESEARCH_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "publications", label: "Publications", kind: FieldKind::Count },
    FieldSpec { key: "grants", label: "Grants", kind: FieldKind::Count },
    FieldSpec { key: "funding", label: "Funding", kind: FieldKind::Amount },
];

impl Department {
    /// All departments in display order.
    pub const ALL: [Department; 4] = [
        Department::Admissions,
        Department::Finance,
        Department::Academic,
        Department::Research,
    ];

    /// Key used to address the department.
    pub fn key(&self) -> &'static str {
        match self {
            Department::Admissions => "admissions",
            Department::Finance => "finance",
            Department::Academic => "academic",
            Department::Research => "research",
        }
    }

    /// Capitalized name for card headings.
    pub fn name(&self) -> &'static str {
        match self {
            Department::Admissions => "Admissions",
            Department::Finance => "Finance",
            Department::Academic => "Academic",
            Department::Research => "Research",
        }
    }

    /// Payload schema for this department.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Department::Admissions => ADMISSIONS_FIELDS,
            Department::Finance => FINANCE_FIELDS,
            Department::Academic => ACADEMIC_FIELDS,
            Department::Research => RESEARCH_FIELDS,
        }
    }
}

impl FromStr for Department {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|dept| dept.key() == s)
            .ok_or_else(|| WizardError::InvalidDepartment(s.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Admissions payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdmissionsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admitted: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled: Option<u64>,
}

/// Finance payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinanceData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expenditure: Option<f64>,
}

/// Academic affairs payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcademicData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programs: Option<u64>,
    /// Percentage of students graduating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_rate: Option<f64>,
}

/// Research office payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResearchData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publications: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grants: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<f64>,
}

/// Data submitted by a department, shaped by that department's schema.
///
/// Serializes to the bare field object (e.g. `{"budget":100.0}`). Parsing
/// needs the target department, see [`DepartmentData::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DepartmentData {
    Admissions(AdmissionsData),
    Finance(FinanceData),
    Academic(AcademicData),
    Research(ResearchData),
}

impl DepartmentData {
    /// Empty payload for `department`.
    pub fn empty(department: Department) -> Self {
        match department {
            Department::Admissions => Self::Admissions(AdmissionsData::default()),
            Department::Finance => Self::Finance(FinanceData::default()),
            Department::Academic => Self::Academic(AcademicData::default()),
            Department::Research => Self::Research(ResearchData::default()),
        }
    }

    /// Validate a JSON object against `department`'s schema.
    pub fn from_json(department: Department, value: Value) -> Result<Self, WizardError> {
        let parsed = match department {
            Department::Admissions => serde_json::from_value(value).map(Self::Admissions),
            Department::Finance => serde_json::from_value(value).map(Self::Finance),
            Department::Academic => serde_json::from_value(value).map(Self::Academic),
            Department::Research => serde_json::from_value(value).map(Self::Research),
        };
        parsed.map_err(|e| WizardError::InvalidPayload {
            department,
            reason: e.to_string(),
        })
    }

    /// Department whose schema this payload follows.
    pub fn department(&self) -> Department {
        match self {
            Self::Admissions(_) => Department::Admissions,
            Self::Finance(_) => Department::Finance,
            Self::Academic(_) => Department::Academic,
            Self::Research(_) => Department::Research,
        }
    }

    /// Payload as a JSON object.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Fields that carry a value, as `(label, formatted value)` pairs in schema order.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let json = self.to_json();
        self.department()
            .fields()
            .iter()
            .filter_map(|spec| {
                json.get(spec.key)
                    .filter(|v| !v.is_null())
                    .map(|v| (spec.label, v.to_string()))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.summary().is_empty()
    }
}

/// Submission status of one department.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DepartmentRecord {
    pub submitted: bool,
    pub data: Option<DepartmentData>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_department_keys() {
        for dept in Department::ALL {
            assert_eq!(dept.key().parse::<Department>(), Ok(dept));
        }
        assert_eq!(
            "Finance".parse::<Department>(),
            Err(WizardError::InvalidDepartment("Finance".to_string()))
        );
    }

    #[test]
    fn test_empty_object_is_valid_for_every_department() {
        for dept in Department::ALL {
            let data = DepartmentData::from_json(dept, json!({})).unwrap();
            assert_eq!(data, DepartmentData::empty(dept));
            assert!(data.is_empty());
        }
    }

    #[test]
    fn test_finance_budget_payload() {
        let data = DepartmentData::from_json(Department::Finance, json!({ "budget": 100 })).unwrap();
        assert_eq!(
            data,
            DepartmentData::Finance(FinanceData {
                budget: Some(100.0),
                expenditure: None,
            })
        );
        assert_eq!(data.to_json(), json!({ "budget": 100.0 }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = DepartmentData::from_json(Department::Research, json!({ "budget": 5 })).unwrap_err();
        assert!(matches!(
            err,
            WizardError::InvalidPayload {
                department: Department::Research,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = DepartmentData::from_json(Department::Admissions, json!({ "applications": "many" }));
        assert!(result.is_err());

        let result = DepartmentData::from_json(Department::Academic, json!({ "programs": -3 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(DepartmentData::from_json(Department::Finance, json!([1, 2])).is_err());
        assert!(DepartmentData::from_json(Department::Finance, json!("budget")).is_err());
    }

    #[test]
    fn test_summary_uses_schema_labels_and_order() {
        let data = DepartmentData::Research(ResearchData {
            publications: Some(42),
            grants: None,
            funding: Some(1500.5),
        });
        assert_eq!(
            data.summary(),
            vec![("Publications", "42".to_string()), ("Funding", "1500.5".to_string())]
        );
        assert_eq!(data.department(), Department::Research);
    }

    #[test]
    fn test_default_record_is_unsubmitted() {
        let record = DepartmentRecord::default();
        assert!(!record.submitted);
        assert!(record.data.is_none());
    }
}
