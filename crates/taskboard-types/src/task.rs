//! Task record and its sparse patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::record::Record;

/// A unit of work, optionally tied to a project and an assignee.
///
/// `project_id` and `user_id` are unchecked references: nothing verifies
/// that a matching project or user exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub project_id: Option<u64>,
    pub user_id: Option<u64>,
    /// Set once when the repository stores the task, immutable thereafter.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// A task awaiting identity assignment by the repository.
    pub fn new(
        title: String,
        description: String,
        completed: bool,
        project_id: Option<u64>,
        user_id: Option<u64>,
    ) -> Self {
        Self {
            id: 0,
            title,
            description,
            completed,
            project_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// Sparse update for a task. Absent fields keep their current values;
/// unknown field names are a deserialization error.
///
/// The nullable references use a double option so that `"project_id": null`
/// (clear the reference) is distinguishable from leaving the field out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub project_id: Option<Option<u64>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub user_id: Option<Option<u64>>,
}

/// Deserializer for fields where "present but null" and "absent" differ.
/// Only runs when the field is present, so the outer option is always Some.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

impl Record for Task {
    type Patch = TaskPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(project_id) = patch.project_id {
            self.project_id = project_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        // created_at has no patch field and never changes.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task::new(
            "Write report".to_string(),
            "Quarterly numbers".to_string(),
            false,
            Some(3),
            Some(7),
        )
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut task = sample_task();
        let created = task.created_at;

        let patch: TaskPatch = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        task.apply(patch);

        assert!(task.completed);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "Quarterly numbers");
        assert_eq!(task.project_id, Some(3));
        assert_eq!(task.user_id, Some(7));
        assert_eq!(task.created_at, created);
    }

    #[test]
    fn absent_reference_field_keeps_value() {
        let mut task = sample_task();
        let patch: TaskPatch = serde_json::from_str(r#"{"title": "Renamed"}"#).unwrap();
        task.apply(patch);

        assert_eq!(task.title, "Renamed");
        assert_eq!(task.project_id, Some(3));
    }

    #[test]
    fn null_reference_field_clears_value() {
        let mut task = sample_task();
        let patch: TaskPatch = serde_json::from_str(r#"{"project_id": null}"#).unwrap();
        task.apply(patch);

        assert_eq!(task.project_id, None);
        assert_eq!(task.user_id, Some(7));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut task = sample_task();
        let before = task.clone();

        let patch: TaskPatch = serde_json::from_str("{}").unwrap();
        task.apply(patch);

        assert_eq!(task, before);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result: Result<TaskPatch, _> = serde_json::from_str(r#"{"priority": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn server_assigned_fields_are_not_patchable() {
        let result: Result<TaskPatch, _> = serde_json::from_str(r#"{"id": 99}"#);
        assert!(result.is_err());

        let result: Result<TaskPatch, _> =
            serde_json::from_str(r#"{"created_at": "2024-01-01T00:00:00Z"}"#);
        assert!(result.is_err());
    }
}
