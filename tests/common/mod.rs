//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{FakeProviders, ServerOptions, TestClient, TestServer};
//!
//! #[tokio::test]
//! async fn test_generate() {
//!     let fakes = FakeProviders::spawn().await;
//!     let server = TestServer::spawn(ServerOptions::with_providers(&fakes)).await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.generate_ok("rain on the roof").await;
//!     assert_eq!(response.status, "success");
//! }
//! ```

mod client;
mod constants;
mod fake_providers;
mod server;

// Public API - this is what tests import
pub use client::{GenerateResponse, TestClient};
pub use constants::*;
pub use fake_providers::{fake_audio_preview, fake_video_link, FakeMode, FakeProviders};
pub use server::{ServerOptions, TestServer};
