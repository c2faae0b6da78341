mod departments;
mod students;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization
        Event::Initialize => departments::fetch_departments(),

        // Departments domain
        Event::DepartmentsResponse(result) => departments::handle_response(result, model),

        // Students domain
        Event::SelectDepartment { name } => students::select_department(name, model),
        Event::StudentsResponse(result) => students::handle_response(result, model),
    }
}
