#![allow(dead_code)]

use axum_test::TestServer;
use shurs::application::services::LinkService;
use shurs::domain::IdGenerator;
use shurs::domain::entities::ShortId;
use shurs::error::GenerateError;
use shurs::infrastructure::persistence::InMemoryLinkRepository;
use shurs::routes::app_router;
use shurs::state::AppState;
use shurs::utils::code_generator::Base62Generator;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;

pub const TEST_BASE_URL: &str = "http://test.co";

/// Everything a test needs to drive the service and inspect its store.
pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<InMemoryLinkRepository>,
    pub shutdown: watch::Sender<bool>,
}

pub fn create_test_state<G: IdGenerator + 'static>(
    generator: G,
    id_length: usize,
    max_attempts: usize,
) -> (AppState, Arc<InMemoryLinkRepository>, watch::Sender<bool>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let (tx, rx) = watch::channel(false);

    let link_service = LinkService::new(repository.clone(), Arc::new(generator), max_attempts)
        .with_shutdown(rx);

    let state = AppState::new(
        Arc::new(link_service),
        repository.clone(),
        TEST_BASE_URL,
        id_length,
    );

    (state, repository, tx)
}

pub fn spawn_app_with<G: IdGenerator + 'static>(
    generator: G,
    id_length: usize,
    max_attempts: usize,
) -> TestApp {
    let (state, repository, shutdown) = create_test_state(generator, id_length, max_attempts);
    let server = TestServer::new(app_router(state)).unwrap();

    TestApp {
        server,
        repository,
        shutdown,
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(Base62Generator::new(8), 8, 10)
}

/// Extracts the id from a `{base_url}/{id}` response body.
pub fn id_from_short_url(short_url: &str) -> String {
    short_url
        .strip_prefix(&format!("{TEST_BASE_URL}/"))
        .unwrap()
        .to_string()
}

/// Generator that always returns the same id and counts its calls.
#[derive(Clone)]
pub struct FixedGenerator {
    id: String,
    pub calls: Arc<AtomicUsize>,
}

impl FixedGenerator {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdGenerator for FixedGenerator {
    fn generate(&self) -> Result<ShortId, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ShortId::parse(&self.id, self.id.len()).unwrap())
    }
}
