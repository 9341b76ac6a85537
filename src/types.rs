use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// MIME type used for every load issued by the notifier
pub const AUDIO_MPEG: &str = "audio/mpeg";

/// Receiver volume
///
/// Both fields are optional on the wire; a receiver only changes what is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Volume {
    /// Level between 0.0 and 1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
}

impl Volume {
    /// An unmuted volume at `level`
    pub fn unmuted(level: f64) -> Self {
        Self {
            level: Some(level),
            muted: Some(false),
        }
    }
}

/// How the receiver should treat the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamType {
    None,
    Buffered,
    Live,
}

/// Media to load on the receiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub content_id: String,
    pub stream_type: StreamType,
    pub content_type: String,
}

impl MediaItem {
    /// A buffered `audio/mpeg` item for `url`
    pub fn audio(url: impl Into<String>) -> Self {
        Self {
            content_id: url.into(),
            stream_type: StreamType::Buffered,
            content_type: AUDIO_MPEG.to_string(),
        }
    }
}

/// Full load command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRequest {
    pub media: MediaItem,

    /// Starting offset in seconds
    pub current_time: f64,

    pub autoplay: bool,

    #[serde(default)]
    pub custom_data: Map<String, Value>,
}

impl LoadRequest {
    /// Autoplay `media` from the beginning with no extra data
    pub fn autoplay(media: MediaItem) -> Self {
        Self {
            media,
            current_time: 0.0,
            autoplay: true,
            custom_data: Map::new(),
        }
    }
}

/// Player state reported by the media channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    Idle,
    Playing,
    Paused,
    Buffering,
}

/// One media session entry from a status response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaStatus {
    pub media_session_id: i64,
    pub player_state: PlayerState,

    #[serde(default)]
    pub current_time: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_reason: Option<String>,
}
