//! Ambience Server Library
//!
//! Turns a free-text mood prompt into a matching background video and
//! ambient audio clip. Exposed as a library for the binary and the e2e tests.

pub mod config;
pub mod keywords;
pub mod media;
pub mod providers;
pub mod server;

// Re-export commonly used types for convenience
pub use media::{create_ambience_generator, AmbienceGenerator, ResolvedMedia};
pub use server::{make_app, run_server, RequestsLoggingLevel};
