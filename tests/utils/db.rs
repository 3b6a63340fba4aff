/// Database test utilities
///
/// Postgres-backed tests only run when TEST_DATABASE_URL is set; every helper
/// returns `None` otherwise so the caller can skip.
use academy_lib::shared::Database;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use std::sync::{Arc, Mutex, OnceLock};

type PgPool = Pool<ConnectionManager<PgConnection>>;

static DB: OnceLock<Option<Arc<Database>>> = OnceLock::new();

/// Get or create the shared test database, with migrations applied
pub fn test_database() -> Option<Arc<Database>> {
    DB.get_or_init(|| {
        dotenvy::dotenv().ok();
        let url = std::env::var("TEST_DATABASE_URL").ok()?;

        let manager = ConnectionManager::<PgConnection>::new(url);
        let pool: PgPool = r2d2::Pool::builder()
            .max_size(5)
            .build(manager)
            .expect("Failed to create test database pool");

        let database = Database::from_pool(pool);
        database
            .run_migrations()
            .expect("Failed to run migrations on test database");
        Some(Arc::new(database))
    })
    .clone()
}

/// Remove every course - use at the start of each test
pub fn clean_test_db(database: &Database) {
    let mut conn = database
        .get_connection()
        .expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE courses")
        .execute(&mut conn)
        .expect("Failed to clean courses");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> std::sync::MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
