use serde::{Deserialize, Serialize};

/// Academic department
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Student record, optionally linked to its department
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub department: Option<Department>,
}

impl Student {
    /// Name of the linked department, if any
    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|department| department.name.as_str())
    }
}
