use std::fmt;

/// Failures surfaced to the user
///
/// Both kinds are shown as a fixed sentence. The technical cause is logged
/// where the failure is handled and never reaches the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    Departments,
    Students,
}

impl LoadError {
    pub fn message(self) -> &'static str {
        match self {
            LoadError::Departments => "Erreur lors du chargement des départements",
            LoadError::Students => "Erreur lors du chargement des étudiants",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
