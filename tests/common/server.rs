//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server wired to whichever providers it asks for.

use super::constants::*;
use super::fake_providers::FakeProviders;
use ambience_server::config::{AppConfig, CliConfig};
use ambience_server::keywords::ExtractorKind;
use ambience_server::media::create_ambience_generator;
use ambience_server::server::{make_app, RequestsLoggingLevel};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Which providers the test server talks to.
///
/// A `None` base URL leaves the matching API key unset, so the server runs
/// that resolver offline.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub pexels_base_url: Option<String>,
    pub freesound_base_url: Option<String>,
    pub provider_timeout_sec: u64,
    pub extractor: ExtractorKind,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            pexels_base_url: None,
            freesound_base_url: None,
            provider_timeout_sec: 5,
            extractor: ExtractorKind::KeyPhrase,
        }
    }
}

impl ServerOptions {
    /// No API keys configured.
    pub fn offline() -> Self {
        Self::default()
    }

    /// Both providers pointed at `fakes`.
    pub fn with_providers(fakes: &FakeProviders) -> Self {
        Self {
            pexels_base_url: Some(fakes.base_url.clone()),
            freesound_base_url: Some(fakes.base_url.clone()),
            ..Default::default()
        }
    }

    fn cli_config(&self) -> CliConfig {
        let mut cli = CliConfig {
            port: 0,
            metrics_port: 1,
            logging_level: RequestsLoggingLevel::None,
            provider_timeout_sec: self.provider_timeout_sec,
            extractor: self.extractor,
            ..Default::default()
        };
        if let Some(url) = &self.pexels_base_url {
            cli.pexels_api_key = Some(TEST_PEXELS_KEY.to_string());
            cli.pexels_base_url = url.clone();
        }
        if let Some(url) = &self.freesound_base_url {
            cli.freesound_api_key = Some(TEST_FREESOUND_KEY.to_string());
            cli.freesound_base_url = url.clone();
        }
        cli
    }
}

/// Test server instance
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the configuration is rejected, port binding fails, or the
    /// server doesn't become ready within timeout.
    pub async fn spawn(options: ServerOptions) -> Self {
        let app_config = AppConfig::resolve(&options.cli_config(), None)
            .expect("Failed to resolve test configuration");
        let generator = Arc::new(
            create_ambience_generator(&app_config).expect("Failed to create generator"),
        );

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let app = make_app(app_config.server_config(), generator);

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home route
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
