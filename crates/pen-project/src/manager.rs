//! Project manager
//!
//! Single authority for which project, if any, the editing session is
//! bound to, and for performing saves and loads against the store.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::ProjectError;
use crate::project::Project;
use crate::store::ProjectStore;
use crate::Result;

pub struct ProjectManager {
    store: Arc<dyn ProjectStore>,
    /// Name of the currently open project, if any
    current: Arc<RwLock<Option<String>>>,
}

impl ProjectManager {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Name of the project the session is bound to, if any. No side effects.
    pub fn current_project(&self) -> Option<String> {
        self.current.read().clone()
    }

    /// Write `source` under `name` (create or overwrite), then bind the
    /// session to `name`. A failed write leaves the binding untouched.
    pub async fn save_project(&self, name: &str, source: &str) -> Result<Project> {
        if name.trim().is_empty() {
            return Err(ProjectError::EmptyName);
        }

        let project = self.store.put(name, source).await?;
        *self.current.write() = Some(project.name.clone());

        tracing::info!(project_name = %project.name, "Saved project");

        Ok(project)
    }

    /// Read the project stored under `name` and bind the session to it.
    /// Not-found and read failures leave the binding untouched.
    pub async fn load_project(&self, name: &str) -> Result<Project> {
        let project = self
            .store
            .get(name)
            .await?
            .ok_or_else(|| ProjectError::NotFound(name.to_string()))?;

        *self.current.write() = Some(project.name.clone());

        tracing::info!(project_name = %project.name, "Loaded project");

        Ok(project)
    }

    /// Read a project without binding the session to it.
    pub async fn get_project(&self, name: &str) -> Result<Project> {
        self.store
            .get(name)
            .await?
            .ok_or_else(|| ProjectError::NotFound(name.to_string()))
    }

    /// Forget the current binding unconditionally. The store is untouched;
    /// used when starting a new, unsaved pen.
    pub fn clear_current_project(&self) {
        *self.current.write() = None;
        tracing::info!("Cleared current project");
    }

    /// All stored projects, most recently updated first.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.store.list().await
    }

    /// Delete a stored project, clearing the binding when it references
    /// the deleted name.
    pub async fn delete_project(&self, name: &str) -> Result<()> {
        self.store.delete(name).await?;

        {
            let mut current = self.current.write();
            if current.as_deref() == Some(name) {
                *current = None;
            }
        }

        tracing::info!(project_name = %name, "Deleted project");

        Ok(())
    }
}

impl Clone for ProjectManager {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            current: Arc::clone(&self.current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteProjectStore;
    use async_trait::async_trait;
    use pen_storage::{Database, StorageError};
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Store that can be switched into a failing mode, standing in for
    /// quota-exhausted or disabled storage.
    struct FlakyStore {
        inner: SqliteProjectStore,
        fail_writes: AtomicBool,
    }

    impl FlakyStore {
        fn new() -> Self {
            Self {
                inner: SqliteProjectStore::new(Database::open_in_memory().unwrap()),
                fail_writes: AtomicBool::new(false),
            }
        }

        fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl ProjectStore for FlakyStore {
        async fn put(&self, name: &str, source: &str) -> Result<Project> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Unavailable("quota exceeded".to_string()).into());
            }
            self.inner.put(name, source).await
        }

        async fn get(&self, name: &str) -> Result<Option<Project>> {
            self.inner.get(name).await
        }

        async fn list(&self) -> Result<Vec<Project>> {
            self.inner.list().await
        }

        async fn delete(&self, name: &str) -> Result<()> {
            self.inner.delete(name).await
        }
    }

    fn test_manager() -> ProjectManager {
        let db = Database::open_in_memory().unwrap();
        ProjectManager::new(Arc::new(SqliteProjectStore::new(db)))
    }

    #[tokio::test]
    async fn test_save_binds_session() {
        let manager = test_manager();
        assert_eq!(manager.current_project(), None);

        manager.save_project("Untitled", "<code/>").await.unwrap();
        assert_eq!(manager.current_project().as_deref(), Some("Untitled"));
    }

    #[tokio::test]
    async fn test_save_distinct_names_keeps_prior() {
        let manager = test_manager();

        manager.save_project("First", "one").await.unwrap();
        manager.save_project("Second", "two").await.unwrap();

        let first = manager.get_project("First").await.unwrap();
        assert_eq!(first.source, "one");
        assert_eq!(manager.current_project().as_deref(), Some("Second"));
    }

    #[tokio::test]
    async fn test_empty_name_rejected_before_write() {
        let manager = test_manager();

        let err = manager.save_project("   ", "<code/>").await.unwrap_err();
        assert!(matches!(err, ProjectError::EmptyName));

        assert!(manager.list_projects().await.unwrap().is_empty());
        assert_eq!(manager.current_project(), None);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_binding() {
        let store = Arc::new(FlakyStore::new());
        let manager = ProjectManager::new(store.clone());

        manager.save_project("Foo", "v1").await.unwrap();
        assert_eq!(manager.current_project().as_deref(), Some("Foo"));

        store.fail_writes(true);
        let err = manager.save_project("Bar", "v2").await.unwrap_err();
        assert!(matches!(err, ProjectError::Storage(_)));

        // Binding is exactly as before the attempt
        assert_eq!(manager.current_project().as_deref(), Some("Foo"));
    }

    #[tokio::test]
    async fn test_load_binds_session() {
        let manager = test_manager();

        manager.save_project("Foo", "v1").await.unwrap();
        manager.clear_current_project();

        let project = manager.load_project("Foo").await.unwrap();
        assert_eq!(project.source, "v1");
        assert_eq!(manager.current_project().as_deref(), Some("Foo"));
    }

    #[tokio::test]
    async fn test_load_missing_leaves_binding() {
        let manager = test_manager();

        let err = manager.load_project("Missing").await.unwrap_err();
        assert!(matches!(err, ProjectError::NotFound(_)));
        assert_eq!(manager.current_project(), None);
    }

    #[tokio::test]
    async fn test_get_does_not_bind() {
        let manager = test_manager();

        manager.save_project("Foo", "v1").await.unwrap();
        manager.clear_current_project();

        manager.get_project("Foo").await.unwrap();
        assert_eq!(manager.current_project(), None);
    }

    #[tokio::test]
    async fn test_clear_is_unconditional() {
        let manager = test_manager();

        manager.clear_current_project();
        assert_eq!(manager.current_project(), None);

        manager.save_project("Foo", "v1").await.unwrap();
        manager.clear_current_project();
        assert_eq!(manager.current_project(), None);
    }

    #[tokio::test]
    async fn test_delete_current_clears_binding() {
        let manager = test_manager();

        manager.save_project("Foo", "v1").await.unwrap();
        manager.save_project("Bar", "v2").await.unwrap();

        // Deleting a non-current project keeps the binding
        manager.delete_project("Foo").await.unwrap();
        assert_eq!(manager.current_project().as_deref(), Some("Bar"));

        manager.delete_project("Bar").await.unwrap();
        assert_eq!(manager.current_project(), None);
    }
}
