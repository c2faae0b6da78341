use students_ui_core::{DepartmentSelector, SelectOption};

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Select the option with this value (empty = blank default)
    Select(String),
    Quit,
    Unknown(String),
}

/// Interpret a line against the options currently offered.
///
/// An exact department name wins over the quit keywords and over option
/// numbers, so departments called `q` or `2` stay selectable by name. Names
/// are compared before trimming so surrounding spaces in a name still match.
pub fn parse_input(line: &str, selector: &DepartmentSelector) -> Input {
    let raw = line.trim_end_matches(['\r', '\n']);
    if let Some(option) = find_option(selector, raw) {
        return Input::Select(option.value.clone());
    }

    let line = raw.trim();

    if line.is_empty() {
        return Input::Select(String::new());
    }

    if let Some(option) = find_option(selector, line) {
        return Input::Select(option.value.clone());
    }

    if matches!(line, "q" | "quit") {
        return Input::Quit;
    }

    line.parse::<usize>()
        .ok()
        .and_then(|index| selector.options.get(index))
        .map_or_else(
            || Input::Unknown(line.to_string()),
            |option| Input::Select(option.value.clone()),
        )
}

fn find_option<'a>(selector: &'a DepartmentSelector, value: &str) -> Option<&'a SelectOption> {
    selector.options.iter().find(|option| option.value == value)
}
