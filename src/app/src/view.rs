//! Render decision
//!
//! A pure function of the model; shells call it after every render effect.

use crate::model::Model;
use crate::types::*;

pub fn view(model: &Model) -> ViewModel {
    ViewModel {
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        selector: selector(model),
        content: content(model),
    }
}

fn selector(model: &Model) -> DepartmentSelector {
    let blank = SelectOption {
        value: String::new(),
        label: BLANK_OPTION_LABEL.to_string(),
    };
    let options = std::iter::once(blank)
        .chain(model.departments.iter().map(|department| SelectOption {
            value: department.name.clone(),
            label: department.name.clone(),
        }))
        .collect();

    DepartmentSelector {
        label: SELECTOR_LABEL.to_string(),
        selected: model.selected_department.clone(),
        options,
    }
}

fn content(model: &Model) -> Content {
    if let Some(error) = &model.error_message {
        Content::Error(error.clone())
    } else if model.is_loading {
        Content::Loading(LOADING_TEXT.to_string())
    } else if !model.students.is_empty() {
        Content::Table(student_table(&model.selected_department, &model.students))
    } else if model.has_selection() {
        Content::Empty(EMPTY_RESULT_TEXT.to_string())
    } else {
        Content::Nothing
    }
}

fn student_table(department: &str, students: &[Student]) -> StudentTable {
    let rows = students
        .iter()
        .map(|student| StudentRow {
            id: student.id,
            firstname: student.firstname.clone(),
            lastname: student.lastname.clone(),
            department: student
                .department_name()
                .filter(|name| !name.is_empty())
                .unwrap_or(MISSING_DEPARTMENT)
                .to_string(),
        })
        .collect();

    StudentTable {
        heading: format!("Étudiants du département {department}"),
        columns: TABLE_COLUMNS.iter().map(ToString::to_string).collect(),
        rows,
        count: students.len(),
        footer: format!("Total : {} étudiant(s)", students.len()),
    }
}
