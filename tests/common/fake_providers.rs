//! Fake media providers
//!
//! A single axum server standing in for both the Pexels and the Freesound
//! API. It records every request so tests can assert on the queries the
//! server under test sent, and its responses can be switched per test.

use super::constants::*;
use axum::{
    extract::{Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// How the fake endpoints answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeMode {
    /// One result per query, derived from the query text
    Normal,
    /// Well-formed responses with no results
    Empty,
    /// HTTP 500
    ServerError,
    /// HTTP 200 with a body that is not JSON
    Malformed,
    /// Stalls for `FAKE_HANG_SECS` before answering
    Hang,
    /// An HD video with no files ahead of a playable SD one
    FilelessVideo,
}

#[derive(Default)]
struct Recorded {
    video_params: Vec<HashMap<String, String>>,
    sound_params: Vec<HashMap<String, String>>,
    video_queries: Vec<String>,
    video_auth: Vec<Option<String>>,
    sound_queries: Vec<String>,
    sound_tokens: Vec<Option<String>>,
}

struct FakeState {
    mode: Mutex<FakeMode>,
    /// Queries answered with no results even in `Normal` mode
    empty_queries: Mutex<HashSet<String>>,
    recorded: Mutex<Recorded>,
}

/// Running fake provider server.
///
/// When dropped, the server shuts down.
pub struct FakeProviders {
    pub base_url: String,
    state: Arc<FakeState>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

/// Turns a query into something usable in a URL path.
pub fn slug(query: &str) -> String {
    query.trim().replace(' ', "-")
}

/// Link the fake Pexels endpoint returns for `query`.
pub fn fake_video_link(query: &str) -> String {
    format!("{}/{}-hd.mp4", FAKE_VIDEO_HOST, slug(query))
}

/// Preview the fake Freesound endpoint returns for `term`.
pub fn fake_audio_preview(term: &str) -> String {
    format!("{}/{}-hq.mp3", FAKE_AUDIO_HOST, slug(term))
}

async fn stall_or_fail(mode: FakeMode) -> Option<Response> {
    match mode {
        FakeMode::ServerError => {
            Some((StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response())
        }
        FakeMode::Malformed => Some((StatusCode::OK, "<html>definitely not json").into_response()),
        FakeMode::Hang => {
            tokio::time::sleep(Duration::from_secs(FAKE_HANG_SECS)).await;
            None
        }
        FakeMode::Normal | FakeMode::Empty | FakeMode::FilelessVideo => None,
    }
}

async fn search_videos(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params.get("query").cloned().unwrap_or_default();
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.video_queries.push(query.clone());
        recorded.video_params.push(params.clone());
        recorded.video_auth.push(
            headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        );
    }

    let mode = *state.mode.lock().unwrap();
    if let Some(response) = stall_or_fail(mode).await {
        return response;
    }

    let empty = mode == FakeMode::Empty || state.empty_queries.lock().unwrap().contains(&query);
    if empty {
        return Json(json!({ "page": 1, "per_page": 15, "videos": [] })).into_response();
    }

    let sd_link = format!("{}/{}-sd.mp4", FAKE_VIDEO_HOST, slug(&query));
    if mode == FakeMode::FilelessVideo {
        return Json(json!({
            "page": 1,
            "per_page": 15,
            "videos": [
                { "id": 1, "width": 1920, "height": 1080, "video_files": [] },
                {
                    "id": 2,
                    "width": 640,
                    "height": 360,
                    "video_files": [{ "quality": "sd", "width": 640, "link": sd_link }]
                }
            ]
        }))
        .into_response();
    }

    Json(json!({
        "page": 1,
        "per_page": 15,
        "videos": [
            {
                "id": 1,
                "width": 1920,
                "height": 1080,
                "video_files": [
                    { "quality": "sd", "width": 640, "link": sd_link },
                    { "quality": "hd", "width": 1920, "link": fake_video_link(&query) },
                ]
            }
        ]
    }))
    .into_response()
}

async fn search_sounds(
    State(state): State<Arc<FakeState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params.get("query").cloned().unwrap_or_default();
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.sound_queries.push(query.clone());
        recorded.sound_params.push(params.clone());
        recorded.sound_tokens.push(params.get("token").cloned());
    }

    let mode = *state.mode.lock().unwrap();
    if let Some(response) = stall_or_fail(mode).await {
        return response;
    }

    if mode == FakeMode::Empty {
        return Json(json!({ "count": 0, "results": [] })).into_response();
    }

    Json(json!({
        "count": 1,
        "results": [
            {
                "id": 532299,
                "name": format!("{} clip", query.trim()),
                "previews": {
                    "preview-hq-mp3": fake_audio_preview(&query),
                    "preview-lq-mp3": format!("{}/{}-lq.mp3", FAKE_AUDIO_HOST, slug(&query)),
                }
            }
        ]
    }))
    .into_response()
}

impl FakeProviders {
    /// Spawns the fake providers on a random port in `Normal` mode.
    pub async fn spawn() -> Self {
        let state = Arc::new(FakeState {
            mode: Mutex::new(FakeMode::Normal),
            empty_queries: Mutex::new(HashSet::new()),
            recorded: Mutex::new(Recorded::default()),
        });

        let app = Router::new()
            .route("/videos/search", get(search_videos))
            .route("/search/text/", get(search_sounds))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake providers");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Fake providers failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn set_mode(&self, mode: FakeMode) {
        *self.state.mode.lock().unwrap() = mode;
    }

    /// Makes the video endpoint return no results for `query`.
    pub fn empty_for(&self, query: &str) {
        self.state
            .empty_queries
            .lock()
            .unwrap()
            .insert(query.to_string());
    }

    pub fn video_queries(&self) -> Vec<String> {
        self.state.recorded.lock().unwrap().video_queries.clone()
    }

    /// Every query parameter of each video search, in request order.
    pub fn video_params(&self) -> Vec<HashMap<String, String>> {
        self.state.recorded.lock().unwrap().video_params.clone()
    }

    /// Every query parameter of each sound search, in request order.
    pub fn sound_params(&self) -> Vec<HashMap<String, String>> {
        self.state.recorded.lock().unwrap().sound_params.clone()
    }

    pub fn video_auth_headers(&self) -> Vec<Option<String>> {
        self.state.recorded.lock().unwrap().video_auth.clone()
    }

    pub fn sound_queries(&self) -> Vec<String> {
        self.state.recorded.lock().unwrap().sound_queries.clone()
    }

    pub fn sound_tokens(&self) -> Vec<Option<String>> {
        self.state.recorded.lock().unwrap().sound_tokens.clone()
    }
}

impl Drop for FakeProviders {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
