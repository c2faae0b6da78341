use crate::types::*;

/// Application Model - the complete client-side state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    // Fetched data, replaced wholesale on each response
    pub departments: Vec<Department>,
    pub students: Vec<Student>,

    /// Department name picked in the selector, empty when none is selected
    pub selected_department: String,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Model {
    /// Start a students fetch (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_department.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_loading_clears_previous_error() {
        let mut model = Model {
            error_message: Some("boom".to_string()),
            ..Default::default()
        };

        model.start_loading();

        assert!(model.is_loading);
        assert_eq!(model.error_message, None);
    }

    #[test]
    fn set_error_keeps_fetched_data() {
        let mut model = Model {
            departments: vec![Department {
                id: 1,
                name: "CS".to_string(),
            }],
            students: vec![Student::default()],
            is_loading: true,
            ..Default::default()
        };

        model.set_error("boom".to_string());

        assert!(!model.is_loading);
        assert_eq!(model.error_message.as_deref(), Some("boom"));
        assert_eq!(model.departments.len(), 1);
        assert_eq!(model.students.len(), 1);
    }
}
