//! Project record and its sparse patch.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A grouping that tasks may reference by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

impl Project {
    pub fn new(name: String) -> Self {
        Self { id: 0, name }
    }
}

/// Sparse update for a project. Unknown field names are a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectPatch {
    pub name: Option<String>,
}

impl Record for Project {
    type Patch = ProjectPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn apply(&mut self, patch: ProjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}
