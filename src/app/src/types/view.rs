use serde::{Deserialize, Serialize};

pub const TITLE: &str = "Liste des Étudiants";
pub const SUBTITLE: &str = "Gestion des étudiants par département";
pub const SELECTOR_LABEL: &str = "Sélectionner un département :";
pub const BLANK_OPTION_LABEL: &str = "-- Choisir un département --";
pub const LOADING_TEXT: &str = "Chargement...";
pub const EMPTY_RESULT_TEXT: &str = "Aucun étudiant trouvé dans ce département";
pub const MISSING_DEPARTMENT: &str = "N/A";
pub const TABLE_COLUMNS: [&str; 4] = ["ID", "Prénom", "Nom", "Département"];

/// What the shells display
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub title: String,
    pub subtitle: String,
    pub selector: DepartmentSelector,
    pub content: Content,
}

/// Department dropdown. The first option is always the blank default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentSelector {
    pub label: String,
    pub selected: String,
    pub options: Vec<SelectOption>,
}

impl DepartmentSelector {
    /// Position of the selected option, if it is still offered
    pub fn selected_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.value == self.selected)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Area below the selector
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Content {
    #[default]
    Nothing,
    Error(String),
    Loading(String),
    Table(StudentTable),
    Empty(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentTable {
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<StudentRow>,
    pub count: usize,
    pub footer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentRow {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub department: String,
}

impl StudentRow {
    /// Cells in column order
    pub fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.firstname.clone(),
            self.lastname.clone(),
            self.department.clone(),
        ]
    }
}
