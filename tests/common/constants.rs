//! Shared constants for end-to-end tests

// ============================================================================
// Provider credentials
// ============================================================================

/// API key the test server sends to the fake Pexels endpoint
pub const TEST_PEXELS_KEY: &str = "test-pexels-key";

/// Token the test server sends to the fake Freesound endpoint
pub const TEST_FREESOUND_KEY: &str = "test-freesound-token";

// ============================================================================
// Fake provider media
// ============================================================================

/// Host used in links returned by the fake Pexels endpoint
pub const FAKE_VIDEO_HOST: &str = "https://videos.fake-pexels.test";

/// Host used in previews returned by the fake Freesound endpoint
pub const FAKE_AUDIO_HOST: &str = "https://cdn.fake-freesound.test";

// ============================================================================
// Timing
// ============================================================================

/// Maximum time to wait for the server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Default timeout for test HTTP requests
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Interval between readiness checks
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// How long the fake providers stall in `FakeMode::Hang`
pub const FAKE_HANG_SECS: u64 = 5;
