use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize,

    // Selector changes, an empty name selects the blank default
    SelectDepartment { name: String },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    DepartmentsResponse(Result<Vec<Department>, String>),
    #[serde(skip)]
    StudentsResponse(Result<Vec<Student>, String>),
}
