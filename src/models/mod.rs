//! Domain types for the report wizard: steps, departments, filters, and roles.

pub mod department;
pub mod filter;
pub mod role;
pub mod step;

pub use department::{
    AcademicData, AdmissionsData, Department, DepartmentData, DepartmentRecord, FieldKind, FieldSpec, FinanceData,
    ResearchData,
};
pub use filter::{FilterSelection, ReportFilter};
pub use role::Role;
pub use step::Step;
