/// Miro client: the only code in the crate that talks to the Miro REST API.
///
/// Every call is a single POST with a JSON body. There is no retry: a non-2xx
/// response becomes `MiroError::Api` and the caller decides what to do with it.
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const MIRO_API_URL: &str = "https://api.miro.com/v2";
const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const BOARD_NAME_LIMIT: usize = 60;
pub const FRAME_TITLE_LIMIT: usize = 6000;
pub const CONTENT_LIMIT: usize = 65000;

#[derive(Debug, Error)]
pub enum MiroError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Request bodies
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<&'static str>,
}

impl Position {
    /// Board-absolute position (frame centres).
    pub fn absolute(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            relative_to: None,
        }
    }

    /// Position measured from the parent frame's top-left corner.
    pub fn in_parent(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            relative_to: Some("parent_top_left"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    pub width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parent {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameData {
    pub title: String,
    pub format: &'static str,
    #[serde(rename = "type")]
    pub frame_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemData {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<&'static str>,
}

/// Body shared by every item-creating endpoint (frames, texts, stickies, shapes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRequest<D> {
    pub data: D,
    pub position: Position,
    pub geometry: Geometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
}

/// Which collection an item is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Frame,
    Text,
    StickyNote,
    Shape,
}

impl ItemKind {
    pub fn path(&self) -> &'static str {
        match self {
            ItemKind::Frame => "frames",
            ItemKind::Text => "texts",
            ItemKind::StickyNote => "sticky_notes",
            ItemKind::Shape => "shapes",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct MiroErrorBody {
    message: String,
}

/// Truncates to at most `limit` characters without splitting a code point.
pub fn clip(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// API seam
// ────────────────────────────────────────────────────────────────────────────

/// The two calls the board surface needs. Implemented by [`MiroClient`] and by
/// recording fakes in tests.
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn create_board(&self, request: &BoardRequest) -> Result<String, MiroError>;

    /// Creates one item on `board_id` and returns its id. `body` is the
    /// already-serialised request.
    async fn create_item(
        &self,
        board_id: &str,
        kind: ItemKind,
        body: serde_json::Value,
    ) -> Result<String, MiroError>;
}

#[derive(Clone)]
pub struct MiroClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl MiroClient {
    pub fn new(access_token: String) -> Result<Self, MiroError> {
        Self::with_base_url(access_token, MIRO_API_URL)
    }

    pub fn with_base_url(access_token: String, base_url: &str) -> Result<Self, MiroError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            access_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, MiroError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Miro API returned {} for {}: {}", status, path, text);
            let message = serde_json::from_str::<MiroErrorBody>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(MiroError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl BoardApi for MiroClient {
    async fn create_board(&self, request: &BoardRequest) -> Result<String, MiroError> {
        let created: Created = self.post("boards", request).await?;
        Ok(created.id)
    }

    async fn create_item(
        &self,
        board_id: &str,
        kind: ItemKind,
        body: serde_json::Value,
    ) -> Result<String, MiroError> {
        let path = format!("boards/{}/{}", board_id, kind.path());
        let created: Created = self.post(&path, &body).await?;
        Ok(created.id)
    }
}
