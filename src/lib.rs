pub mod modules;
mod schema;
pub mod shared;

use modules::course::{CourseRepository, CourseService, InMemoryCourseRepository, PgCourseRepository};
use shared::{AppConfig, AppResult, Database, DatabaseHandle};
use std::sync::Arc;

/// Composition root: owns the database handle and the services built on it.
pub struct AppContext {
    database: Option<Arc<DatabaseHandle>>,
    course_service: Arc<CourseService>,
}

impl AppContext {
    /// Open the Postgres pool and wire the course service to it.
    ///
    /// Blocks while the pool establishes its first connections.
    pub fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        let handle = Arc::new(DatabaseHandle::new(config.database.clone()));
        let database = handle.get()?;
        crate::log_info!(
            "Connected to database at {}",
            config.database.redacted_host()
        );

        let course_repo: Arc<dyn CourseRepository> = Arc::new(PgCourseRepository::new(database));
        let course_service =
            CourseService::new(course_repo).with_default_page_size(config.default_page_size);

        Ok(Self {
            database: Some(handle),
            course_service: Arc::new(course_service),
        })
    }

    /// Wire the course service to a process-local store (previews, tests)
    pub fn in_memory(repo: InMemoryCourseRepository, default_page_size: u32) -> Self {
        let course_repo: Arc<dyn CourseRepository> = Arc::new(repo);
        Self {
            database: None,
            course_service: Arc::new(
                CourseService::new(course_repo).with_default_page_size(default_page_size),
            ),
        }
    }

    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }

    /// Live database, when this context is backed by one
    pub fn database(&self) -> Option<AppResult<Arc<Database>>> {
        self.database.as_ref().map(|handle| handle.get())
    }

    pub fn database_status(&self) -> String {
        match &self.database {
            Some(handle) if handle.is_initialized() => match handle.get() {
                Ok(database) => {
                    let pool = database.pool_status();
                    format!(
                        "{} ({}/{} connections, {} idle)",
                        handle.status_message(),
                        pool.connections,
                        pool.max_size,
                        pool.idle_connections
                    )
                }
                Err(_) => handle.status_message(),
            },
            Some(handle) => handle.status_message(),
            None => "In-memory store".to_string(),
        }
    }

    pub fn shutdown(&self) {
        if let Some(handle) = &self.database {
            handle.shutdown();
        }
    }
}
