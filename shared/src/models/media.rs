//! Media asset types

use serde::{Deserialize, Serialize};

/// Durable asset reference returned by the media service after upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Retrieval URL of the stored asset
    pub url: String,
}
