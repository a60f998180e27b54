//! Throwaway SQLite databases for integration tests.

use pushkind_customers::db::{DbPool, establish_connection_pool, run_migrations};
use pushkind_customers::repository::DieselRepository;
use pushkind_customers::services::seed::seed_sample_customers;
use tempfile::TempDir;

/// A migrated database file that disappears together with the struct.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = establish_connection_pool(&url).expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { pool, _dir: dir }
    }

    #[allow(dead_code)]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    /// Same as [`TestDb::new`] but filled with the bundled sample customers.
    #[allow(dead_code)]
    pub fn seeded(name: &str) -> Self {
        let db = Self::new(name);
        seed_sample_customers(&db.repository()).expect("seed customers");
        db
    }
}
