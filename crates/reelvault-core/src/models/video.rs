use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

/// Frame-geometry classification used to namespace stored objects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Orientation {
    /// Landscape, 16:9-ish geometry
    SixteenNine,
    /// Portrait, 9:16-ish geometry
    NineSixteen,
    Other,
}

impl Orientation {
    /// Classify a frame geometry.
    ///
    /// This is the inherited truncating-integer-division heuristic, not a true
    /// ratio comparison: near-ratio resolutions such as 1918x1080 classify as
    /// `Other`. Kept exactly as-is; downstream key prefixes depend on it.
    pub fn classify(width: i64, height: i64) -> Orientation {
        if width / 16 == height / 9 {
            Orientation::SixteenNine
        } else if width / 9 == height / 16 {
            Orientation::NineSixteen
        } else {
            Orientation::Other
        }
    }

    /// Storage-key prefix for this orientation.
    pub fn storage_prefix(&self) -> &'static str {
        match self {
            Orientation::SixteenNine => "landscape",
            Orientation::NineSixteen => "portrait",
            Orientation::Other => "other",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Orientation::SixteenNine => write!(f, "16:9"),
            Orientation::NineSixteen => write!(f, "9:16"),
            Orientation::Other => write!(f, "other"),
        }
    }
}

/// A video metadata record.
///
/// `video_url` stays absent until an upload completes; a re-upload overwrites
/// it wholesale. Records are created and deleted through the CRUD surface,
/// never by the upload pipeline itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// API representation of a video record.
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        VideoResponse {
            id: video.id,
            owner_id: video.owner_id,
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}
