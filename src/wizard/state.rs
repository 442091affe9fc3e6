//! Session state for the report wizard.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::error::{Result, WizardError};
use crate::models::{Department, DepartmentData, DepartmentRecord, FilterSelection, ReportFilter, Role, Step};

/// All mutable state of one wizard session.
///
/// Every record in the department map exists from construction onward and
/// a submitted record never returns to unsubmitted. Failed operations leave
/// the state untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardState {
    current_step: Step,
    departments: BTreeMap<Department, DepartmentRecord>,
    filters: FilterSelection,
    role: Role,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh session at the first step with the default role.
    pub fn new() -> Self {
        Self::with_role(Role::default())
    }

    /// Fresh session at the first step with `role` selected.
    pub fn with_role(role: Role) -> Self {
        Self {
            current_step: Step::FIRST,
            departments: Department::ALL
                .into_iter()
                .map(|dept| (dept, DepartmentRecord::default()))
                .collect(),
            filters: FilterSelection::new(),
            role,
        }
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// Zero-based position of the current step.
    pub fn step_index(&self) -> usize {
        self.current_step.index()
    }

    pub fn can_advance(&self) -> bool {
        self.current_step.next().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        self.current_step.previous().is_some()
    }

    /// Move to the next step. Returns `false` (and does nothing) on the last step.
    pub fn advance(&mut self) -> bool {
        match self.current_step.next() {
            Some(next) => {
                tracing::debug!("Step {} -> {}", self.current_step.id(), next.id());
                self.current_step = next;
                true
            }
            None => false,
        }
    }

    /// Move to the previous step. Returns `false` (and does nothing) on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.current_step.previous() {
            Some(previous) => {
                tracing::debug!("Step {} -> {}", self.current_step.id(), previous.id());
                self.current_step = previous;
                true
            }
            None => false,
        }
    }

    /// Record a submission for `department`, replacing any earlier payload.
    pub fn submit_department(&mut self, department: Department, data: DepartmentData) -> Result<()> {
        if data.department() != department {
            return Err(WizardError::PayloadMismatch {
                expected: department,
                actual: data.department(),
            });
        }

        let record = self.departments.entry(department).or_default();
        let resubmitted = record.submitted;
        record.submitted = true;
        record.data = Some(data);

        tracing::debug!(department = department.key(), resubmitted, "Department data submitted");
        Ok(())
    }

    /// Submit by department key with a JSON payload, validating both first.
    pub fn submit_department_json(&mut self, name: &str, payload: Value) -> Result<()> {
        let department: Department = name.parse()?;
        let data = DepartmentData::from_json(department, payload)?;
        self.submit_department(department, data)
    }

    pub fn department(&self, department: Department) -> &DepartmentRecord {
        // Every department is inserted in `with_role` and never removed.
        &self.departments[&department]
    }

    /// All records in department order.
    pub fn departments(&self) -> impl Iterator<Item = (Department, &DepartmentRecord)> + '_ {
        self.departments.iter().map(|(dept, record)| (*dept, record))
    }

    pub fn submitted_count(&self) -> usize {
        self.departments.values().filter(|r| r.submitted).count()
    }

    pub fn all_submitted(&self) -> bool {
        self.submitted_count() == Department::ALL.len()
    }

    /// Flip selection of `filter` and return the updated selection.
    pub fn toggle_filter(&mut self, filter: ReportFilter) -> &FilterSelection {
        let selected = self.filters.toggle(filter);
        tracing::debug!(filter = filter.label(), selected, "Filter toggled");
        &self.filters
    }

    /// Toggle by catalog label.
    pub fn toggle_filter_label(&mut self, label: &str) -> Result<&FilterSelection> {
        let filter: ReportFilter = label.parse()?;
        Ok(self.toggle_filter(filter))
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        if self.role != role {
            tracing::debug!("Role {} -> {}", self.role.id(), role.id());
        }
        self.role = role;
    }

    /// Select a role by identifier.
    pub fn set_role_str(&mut self, role: &str) -> Result<()> {
        let role: Role = role.parse()?;
        self.set_role(role);
        Ok(())
    }
}
