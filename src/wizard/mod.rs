//! Report wizard state machine.
//!
//! Holds the current step, department submissions, selected filters, and
//! role for one session. Rendering code reads it and calls its operations
//! in response to user input.
//!
//! # Example
//!
//! ```
//! use annual_report::models::Step;
//! use annual_report::wizard::WizardState;
//! use serde_json::json;
//!
//! let mut state = WizardState::new();
//! state.submit_department_json("finance", json!({ "budget": 100 }))?;
//! state.toggle_filter_label("Budget Allocation")?;
//! state.advance();
//! assert_eq!(state.current_step(), Step::Integrate);
//! # Ok::<(), annual_report::wizard::WizardError>(())
//! ```

mod error;
mod state;


pub use error::{Result, WizardError};
pub use state::WizardState;
