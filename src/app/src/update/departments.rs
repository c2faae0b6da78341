use crux_core::Command;

use crate::api_get;
use crate::events::Event;
use crate::handle_response;
use crate::http_helpers::{build_url, DEPARTMENTS_ENDPOINT};
use crate::model::Model;
use crate::types::{Department, LoadError};
use crate::Effect;

/// Request the department list for the selector
pub fn fetch_departments() -> Command<Effect, Event> {
    api_get!(build_url(DEPARTMENTS_ENDPOINT), DepartmentsResponse, "Load departments",
        expect_json: Vec<Department>
    )
}

/// Store the department list, in backend order.
///
/// A failure only sets the error message: the list stays as it was and the
/// students loading flag is left alone.
pub fn handle_response(
    result: Result<Vec<Department>, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    handle_response!(model, result, LoadError::Departments, {
        on_success: |model, departments| {
            model.departments = departments;
        },
        on_error: |model, message| {
            model.error_message = Some(message);
        },
    })
}
