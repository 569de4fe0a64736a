//! Test utilities and fixtures for relay tests.
//!
//! Provides:
//! - Temporary database fixture
//! - In-process router/state construction

use axum::Router;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use relay::allocator::IdAllocator;
use relay::server::AppState;
use relay::service;
use relay::storage::MessageStore;

/// Page size used by test routers, matching the production default.
pub const TEST_PAGE_SIZE: u32 = 10;

/// Test fixture that manages a temporary database and index asset.
///
/// Everything lives under a TempDir that is cleaned up on drop.
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub db_path: PathBuf,
    pub index_path: PathBuf,
}

impl TestFixture {
    /// Create a new fixture with an empty database path and a stub
    /// index page.
    pub fn new() -> Self {
        relay::observability::tracing::init_test_tracing();

        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let index_path = temp_dir.path().join("index.html");
        fs::write(&index_path, "<!doctype html><title>relay</title>")
            .expect("failed to write index asset");

        Self {
            temp_dir,
            db_path,
            index_path,
        }
    }

    /// Open the store at this fixture's path and build a router plus the
    /// state behind it. The state is returned so tests can seed the store
    /// or allocate ids directly.
    pub fn open(&self) -> (Router, AppState) {
        let (store, seed) =
            MessageStore::open(&self.db_path, 5).expect("failed to open test store");

        let state = AppState {
            store,
            allocator: Arc::new(IdAllocator::new(seed)),
            page_size: TEST_PAGE_SIZE,
        };

        let router = service::router(state.clone(), &self.index_path);
        (router, state)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.temp_dir.path().exists());
        assert!(fixture.index_path.exists());
    }
}
