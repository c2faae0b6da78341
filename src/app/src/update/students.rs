use crux_core::Command;

use crate::api_get;
use crate::events::Event;
use crate::handle_response;
use crate::http_helpers::students_url;
use crate::model::Model;
use crate::types::{LoadError, Student};
use crate::update_field;
use crate::Effect;

const ACTION: &str = "Load students";

/// Apply a selector change.
///
/// The blank default clears the table without touching the network. Any other
/// name starts exactly one fetch; earlier fetches still in flight are not
/// cancelled and the last one to complete wins. A name that cannot form a URL
/// fails like a fetch would, without a request.
pub fn select_department(name: String, model: &mut Model) -> Command<Effect, Event> {
    if name.is_empty() {
        return update_field!(
            model.selected_department, name;
            model.students, Vec::<Student>::new()
        );
    }

    let url = students_url(&name);
    model.selected_department = name;

    let url = match url {
        Ok(url) => url,
        Err(e) => {
            log::error!("{}: {ACTION}: {e}", LoadError::Students);
            model.set_error(LoadError::Students.to_string());
            return crux_core::render::render();
        }
    };

    model.start_loading();

    api_get!(url, StudentsResponse, ACTION, expect_json: Vec<Student>)
}

/// Store the students of the selected department.
///
/// On failure the previous list stays in place next to the error message.
pub fn handle_response(
    result: Result<Vec<Student>, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    handle_response!(model, result, LoadError::Students, {
        on_success: |model, students| {
            model.students = students;
            model.is_loading = false;
        },
        on_error: |model, message| {
            model.set_error(message);
        },
    })
}
