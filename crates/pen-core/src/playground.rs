//! Main playground state container

use std::sync::Arc;

use pen_project::{Project, ProjectManager, ProjectStore, SqliteProjectStore};
use pen_shell::{ProjectPicker, SavePrompt, SessionOrchestrator};
use pen_storage::Database;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Central state container for the playground shell.
///
/// Owns the database, the project store and the project manager.
/// The rendering layer is a stateless consumer of this aggregate.
pub struct Playground {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    /// Project store backing the manager, also used for export/import
    store: Arc<SqliteProjectStore>,
    /// Current-project authority
    project_manager: ProjectManager,
}

impl Playground {
    /// Initialize a new playground instance
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open database
        let db = Database::open(&config.database_path)?;

        let store = Arc::new(SqliteProjectStore::new(db.clone()));
        let project_manager = ProjectManager::new(store.clone());

        Ok(Self {
            config,
            db,
            store,
            project_manager,
        })
    }

    /// Log the store inventory. The session always starts unbound; a
    /// stored project becomes current only through an explicit load.
    pub async fn initialize(&self) -> Result<()> {
        let projects = self.project_manager.list_projects().await?;

        tracing::info!(project_count = projects.len(), "Playground initialized");

        Ok(())
    }

    // === Project operations ===

    pub fn project_manager(&self) -> &ProjectManager {
        &self.project_manager
    }

    pub fn current_project(&self) -> Option<String> {
        self.project_manager.current_project()
    }

    pub async fn save_project(&self, name: &str, source: &str) -> Result<Project> {
        Ok(self.project_manager.save_project(name, source).await?)
    }

    pub async fn load_project(&self, name: &str) -> Result<Project> {
        Ok(self.project_manager.load_project(name).await?)
    }

    pub async fn get_project(&self, name: &str) -> Result<Project> {
        Ok(self.project_manager.get_project(name).await?)
    }

    pub fn clear_current_project(&self) {
        self.project_manager.clear_current_project()
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.project_manager.list_projects().await?)
    }

    pub async fn delete_project(&self, name: &str) -> Result<()> {
        Ok(self.project_manager.delete_project(name).await?)
    }

    // === Shell wiring ===

    /// Build a session orchestrator sharing this playground's manager.
    pub fn orchestrator(
        &self,
        prompt: Arc<dyn SavePrompt>,
        picker: Arc<dyn ProjectPicker>,
    ) -> SessionOrchestrator {
        SessionOrchestrator::new(self.project_manager.clone(), prompt, picker)
    }

    // === Settings operations ===

    pub fn get_theme(&self) -> Result<Option<String>> {
        Ok(self.db.get_setting("theme")?)
    }

    pub fn set_theme(&self, theme: String) -> Result<()> {
        self.db.set_setting("theme", &theme)?;
        Ok(())
    }

    pub fn get_console_visible(&self) -> Result<bool> {
        Ok(self
            .db
            .get_setting("console_visible")?
            .map(|v| v == "true")
            .unwrap_or(false))
    }

    pub fn set_console_visible(&self, visible: bool) -> Result<()> {
        self.db
            .set_setting("console_visible", if visible { "true" } else { "false" })?;
        Ok(())
    }

    // === Export / import ===

    /// Serialize a stored project for the export dialog. Does not touch
    /// the current-project binding.
    pub async fn export_project(&self, name: &str) -> Result<String> {
        let project = self.project_manager.get_project(name).await?;
        Ok(serde_json::to_string_pretty(&project)?)
    }

    /// Store a project parsed from an export string. Does not bind the
    /// session to the imported project.
    pub async fn import_project(&self, json: &str) -> Result<Project> {
        let project: Project = serde_json::from_str(json)?;

        if project.name.trim().is_empty() {
            return Err(pen_project::ProjectError::EmptyName.into());
        }

        Ok(self.store.put(&project.name, &project.source).await?)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Playground {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            store: Arc::clone(&self.store),
            project_manager: self.project_manager.clone(),
        }
    }
}

// Implement std::io::Error conversion for fs operations
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pen_shell::ShellEvent;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_playground() -> Playground {
        // Use an in-memory database for testing
        let db = Database::open_in_memory().unwrap();
        let store = Arc::new(SqliteProjectStore::new(db.clone()));
        let project_manager = ProjectManager::new(store.clone());

        Playground {
            config: Config {
                database_path: PathBuf::from(":memory:"),
            },
            db,
            store,
            project_manager,
        }
    }

    #[tokio::test]
    async fn test_playground_initialization() {
        let playground = test_playground();
        playground.initialize().await.unwrap();

        assert_eq!(playground.current_project(), None);

        playground.save_project("Untitled", "<code/>").await.unwrap();
        assert_eq!(playground.current_project().as_deref(), Some("Untitled"));
        assert_eq!(playground.list_projects().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_settings_operations() {
        let playground = test_playground();

        assert_eq!(playground.get_theme().unwrap(), None);
        playground.set_theme("dark".to_string()).unwrap();
        assert_eq!(playground.get_theme().unwrap().as_deref(), Some("dark"));

        assert!(!playground.get_console_visible().unwrap());
        playground.set_console_visible(true).unwrap();
        assert!(playground.get_console_visible().unwrap());
    }

    #[tokio::test]
    async fn test_export_import_roundtrip() {
        let playground = test_playground();

        playground.save_project("Foo", "const x = 1").await.unwrap();
        let exported = playground.export_project("Foo").await.unwrap();

        playground.delete_project("Foo").await.unwrap();
        assert_eq!(playground.current_project(), None);

        let imported = playground.import_project(&exported).await.unwrap();
        assert_eq!(imported.name, "Foo");
        assert_eq!(imported.source, "const x = 1");

        // Importing is not opening
        assert_eq!(playground.current_project(), None);
    }

    #[tokio::test]
    async fn test_import_rejects_empty_name() {
        let playground = test_playground();

        let json =
            serde_json::to_string(&Project::new(String::new(), "<code/>".to_string())).unwrap();

        let err = playground.import_project(&json).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Project(pen_project::ProjectError::EmptyName)
        ));
        assert!(playground.list_projects().await.unwrap().is_empty());
    }

    #[derive(Default)]
    struct NoopPrompt {
        opened: AtomicUsize,
    }

    impl SavePrompt for NoopPrompt {
        fn open(&self, _suggested_name: &str) {
            self.opened.fetch_add(1, Ordering::SeqCst);
        }

        fn close(&self) {}
    }

    struct NoopPicker;

    impl ProjectPicker for NoopPicker {
        fn open(&self) {}
    }

    #[tokio::test]
    async fn test_orchestrator_shares_manager() {
        let playground = test_playground();
        let prompt = Arc::new(NoopPrompt::default());
        let orchestrator = playground.orchestrator(prompt.clone(), Arc::new(NoopPicker));
        let mut events = orchestrator.subscribe();

        orchestrator.request_save("Untitled", "<code/>").await;
        assert_eq!(prompt.opened.load(Ordering::SeqCst), 1);

        orchestrator.confirm_save("My Pen", "<code/>").await.unwrap();

        // The playground observes the save made through the shell
        assert_eq!(playground.current_project().as_deref(), Some("My Pen"));
        assert_eq!(
            events.try_recv().unwrap(),
            ShellEvent::NameEdited("My Pen".to_string())
        );
        assert_eq!(
            orchestrator.notifications().current().as_deref(),
            Some("Project saved")
        );
    }
}
