pub mod mock;
pub mod telemetry;

use actix_web::web;
use fetcher::{
    ErrorKind, FetchClient, FetchConfig, FetchError, RequestKey, StatusPolicy,
};
use mock::{Config, MockState};
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    pub port: u16,
    /// Client with the default (strict) configuration.
    pub client: FetchClient,
    pub state: web::Data<MockState>,
}

impl TestApp {
    /// Absolute URL for a path on the mock API, e.g. `"/api/user"`.
    pub fn address(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }

    pub fn key(&self, path: &str) -> RequestKey {
        RequestKey::new(self.address(path))
    }

    /// A client that ignores non-success statuses.
    pub fn lenient_client(&self) -> FetchClient {
        self.client_with(FetchConfig {
            status_policy: StatusPolicy::Lenient,
            ..FetchConfig::default()
        })
    }

    pub fn client_with(&self, config: FetchConfig) -> FetchClient {
        FetchClient {
            inner_client: self.client.inner_client.clone(),
            config,
        }
    }
}

pub async fn spawn_app_with(mut config: Config) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = tracing_log::LogTracer::init();
    let _ = subscriber.try_init();

    let (server, state) =
        mock::build(&mut config).expect("Failed to bind mock server");
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: FetchClient::new(FetchConfig::default()),
        state,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Config::default()).await
}

/// Assert that a fetch failed with a specific class of error.
pub fn assert_error_kind<T: std::fmt::Debug>(
    result: Result<T, FetchError>,
    expected: ErrorKind,
) {
    match result {
        Err(e) => assert_eq!(e.kind(), expected, "unexpected error: {e}"),
        Ok(value) => panic!("Expected {expected:?} error, got {value:?}"),
    }
}
