//! Project data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Display name, the store key
    pub name: String,
    /// Editable source text
    pub source: String,
    /// When the project was first saved
    pub created_at: DateTime<Utc>,
    /// Last save time
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, source: String) -> Self {
        let now = Utc::now();

        Self {
            name,
            source,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the source text
    pub fn set_source(&mut self, source: String) {
        self.source = source;
        self.updated_at = Utc::now();
    }

    /// Rename the project
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project() {
        let project = Project::new("Untitled".to_string(), "<code/>".to_string());
        assert_eq!(project.name, "Untitled");
        assert_eq!(project.source, "<code/>");
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn test_mutators() {
        let mut project = Project::new("Untitled".to_string(), String::new());

        project.set_source("const x = 1".to_string());
        assert_eq!(project.source, "const x = 1");

        project.rename("Scratch".to_string());
        assert_eq!(project.name, "Scratch");
        assert!(project.updated_at >= project.created_at);
    }
}
