//! Generic in-memory repository with identity assignment.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use taskboard_types::Record;
use tracing::debug;

/// Identity-assigning CRUD store for one record kind.
///
/// Identities start at 1, increase strictly in assignment order, and are
/// never reused after deletion. Each operation runs as a single critical
/// section, so concurrent handlers never observe a half-applied mutation.
/// Absence is signaled through `Option`/`bool` returns; nothing here errors.
pub struct Repository<T: Record> {
    inner: RwLock<Inner<T>>,
}

struct Inner<T> {
    // Keyed by monotonic identity, so iteration follows creation order.
    records: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Record> Repository<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Store `record` under a fresh identity and return it with the
    /// identity populated. Any caller-supplied identity is overwritten.
    pub fn add(&self, mut record: T) -> T {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        record.assign_id(id);
        inner.records.insert(id, record.clone());
        debug!(id, "record added");
        record
    }

    /// The record stored under `id`, if any.
    pub fn get(&self, id: u64) -> Option<T> {
        self.inner.read().records.get(&id).cloned()
    }

    /// Every stored record, in creation order. Empty when the store is.
    pub fn list(&self) -> Vec<T> {
        self.inner.read().records.values().cloned().collect()
    }

    /// Apply `patch` to the record under `id` and return the result, or
    /// `None` (with no mutation) if the identity is absent. All fields
    /// present in the patch are applied under one write lock.
    pub fn update(&self, id: u64, patch: T::Patch) -> Option<T> {
        let mut inner = self.inner.write();
        let record = inner.records.get_mut(&id)?;
        record.apply(patch);
        let updated = record.clone();
        debug!(id, "record updated");
        Some(updated)
    }

    /// Remove the record under `id`. Returns `false` if it was never
    /// present or already deleted. The identity is not reclaimed either way.
    pub fn delete(&self, id: u64) -> bool {
        let removed = self.inner.write().records.remove(&id).is_some();
        if removed {
            debug!(id, "record deleted");
        }
        removed
    }
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_types::{Project, ProjectPatch, Task, TaskPatch, User, UserPatch};

    fn task(title: &str) -> Task {
        Task::new(title.to_string(), "desc".to_string(), false, None, None)
    }

    #[test]
    fn identities_are_assigned_in_order_from_one() {
        let repo = Repository::new();
        for expected in 1..=5u64 {
            let stored = repo.add(task("t"));
            assert_eq!(stored.id, expected);
        }
    }

    #[test]
    fn caller_supplied_identity_is_overwritten() {
        let repo = Repository::new();
        let mut input = task("t");
        input.id = 42;
        let stored = repo.add(input);
        assert_eq!(stored.id, 1);
        assert!(repo.get(42).is_none());
    }

    #[test]
    fn get_after_add_returns_equal_record() {
        let repo = Repository::new();
        let stored = repo.add(task("report"));
        assert_eq!(repo.get(stored.id), Some(stored));
    }

    #[test]
    fn get_on_absent_id_is_none() {
        let repo: Repository<Task> = Repository::new();
        assert!(repo.get(1).is_none());
    }

    #[test]
    fn list_on_empty_store_is_empty_vec() {
        let repo: Repository<User> = Repository::new();
        assert!(repo.list().is_empty());
    }

    #[test]
    fn list_preserves_creation_order() {
        let repo = Repository::new();
        repo.add(Project::new("alpha".to_string()));
        repo.add(Project::new("beta".to_string()));
        repo.add(Project::new("gamma".to_string()));

        let names: Vec<String> = repo.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn delete_then_get_is_absent_and_second_delete_fails() {
        let repo = Repository::new();
        let stored = repo.add(task("t"));

        assert!(repo.delete(stored.id));
        assert!(repo.get(stored.id).is_none());
        assert!(!repo.delete(stored.id));
    }

    #[test]
    fn deleted_identities_are_never_reused() {
        let repo = Repository::new();
        let first = repo.add(task("first"));
        assert!(repo.delete(first.id));

        let second = repo.add(task("second"));
        assert!(second.id > first.id);
        assert!(repo.get(first.id).is_none());
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let repo = Repository::new();
        let stored = repo.add(task("t"));

        let updated = repo.update(stored.id, TaskPatch::default()).unwrap();
        assert_eq!(updated, stored);
        assert_eq!(repo.get(stored.id), Some(stored));
    }

    #[test]
    fn update_changes_only_named_fields() {
        let repo = Repository::new();
        let stored = repo.add(Task::new(
            "title".to_string(),
            "desc".to_string(),
            false,
            Some(9),
            None,
        ));

        let patch = TaskPatch {
            completed: Some(true),
            ..TaskPatch::default()
        };
        let updated = repo.update(stored.id, patch).unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, stored.title);
        assert_eq!(updated.description, stored.description);
        assert_eq!(updated.project_id, stored.project_id);
        assert_eq!(updated.created_at, stored.created_at);

        // list reflects the change
        assert_eq!(repo.list(), vec![updated]);
    }

    #[test]
    fn update_on_absent_id_is_none_and_store_untouched() {
        let repo = Repository::new();
        let stored = repo.add(task("t"));

        let patch = TaskPatch {
            title: Some("changed".to_string()),
            ..TaskPatch::default()
        };
        assert!(repo.update(stored.id + 1, patch).is_none());
        assert_eq!(repo.list(), vec![stored]);
    }

    #[test]
    fn repositories_are_independent_per_kind() {
        let users = Repository::new();
        let projects = Repository::new();

        let user = users.add(User::new("ada".to_string(), "ada@example.com".to_string()));
        let project = projects.add(Project::new("engine".to_string()));

        // Each store runs its own counter.
        assert_eq!(user.id, 1);
        assert_eq!(project.id, 1);

        users.update(
            user.id,
            UserPatch {
                email: Some("ada@acme.com".to_string()),
                ..UserPatch::default()
            },
        );
        projects.update(
            project.id,
            ProjectPatch {
                name: Some("engine-v2".to_string()),
            },
        );

        assert_eq!(users.get(1).unwrap().email, "ada@acme.com");
        assert_eq!(projects.get(1).unwrap().name, "engine-v2");
    }
}
