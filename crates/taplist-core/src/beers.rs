use serde::{Deserialize, Serialize};

/// A single catalog entry from the inventory API.
///
/// Immutable once received; the renderer owns display formatting (fallback
/// image, alcohol percentage) so the record carries API values untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    /// API-assigned product id.
    pub id: i64,
    pub name: String,
    /// Thumbnail URL; `None` falls back to the placeholder image at render time.
    pub image_thumb_url: Option<String>,
    /// Alcohol content in hundredths of a percent (`550` = 5.5%).
    pub alcohol_content: i32,
    pub varietal: Option<String>,
    pub style: Option<String>,
    pub tasting_note: Option<String>,
}
