use crate::configuration::MissingContentPolicy;
use crate::error::AssistantError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SONG_POPULARITY_TOPIC: &str = "song popularity";

/// A single conversation turn. Kept as a raw JSON object so unknown keys pass through.
pub type Message = Map<String, Value>;

#[derive(Debug, Deserialize)]
struct AssistantRequest {
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AssistantResponse {
    ok: bool,
    message: ReplyMessage,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReplyMessage {
    role: String,
    content: String,
}

/// The canned replies the mock assistant can give
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    SongPopularity,
    Greeting,
}

impl Reply {
    /// Pick a reply for the given message text.
    pub fn select(content: &str) -> Self {
        if content.to_lowercase().contains(SONG_POPULARITY_TOPIC) {
            Reply::SongPopularity
        } else {
            Reply::Greeting
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Reply::SongPopularity => {
                "The Song Popularity pipeline uses features + gradient models + the HTTP framework."
            }
            Reply::Greeting => "Hello from the mock assistant service.",
        }
    }
}

/// Text of the last message, or "" for an empty conversation.
fn last_content(
    messages: &[Message],
    policy: MissingContentPolicy,
) -> Result<&str, AssistantError> {
    let Some(last) = messages.last() else {
        return Ok("");
    };

    match (last.get("content").and_then(Value::as_str), policy) {
        (Some(content), _) => Ok(content),
        (None, MissingContentPolicy::Empty) => Ok(""),
        (None, MissingContentPolicy::Reject) => Err(AssistantError::MissingContent),
    }
}

/// Decode the request body as JSON. A missing `Content-Type` is read as JSON too.
fn parse_request(headers: &HeaderMap, body: &[u8]) -> Result<AssistantRequest, AssistantError> {
    if let Some(value) = headers.get(header::CONTENT_TYPE) {
        let content_type = value.to_str().unwrap_or_default();
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        let is_json = mime == "application/json"
            || (mime.starts_with("application/") && mime.ends_with("+json"));
        if !is_json {
            return Err(AssistantError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }
    }

    Ok(serde_json::from_slice(body)?)
}

async fn handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AssistantResponse>, AssistantError> {
    let request = parse_request(&headers, &body)?;

    let content = last_content(&request.messages, state.missing_content)?;
    let reply = Reply::select(content);
    tracing::debug!(
        messages = request.messages.len(),
        ?reply,
        "selected assistant reply"
    );

    Ok(Json(AssistantResponse {
        ok: true,
        message: ReplyMessage {
            role: "assistant".to_string(),
            content: reply.text().to_string(),
        },
    }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/assistant", post(handler))
        .with_state(state)
}
