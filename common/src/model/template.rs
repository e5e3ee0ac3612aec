use serde::{Deserialize, Serialize};

/// A meme template as listed by the catalog.
///
/// Only `id`, `name` and `url` are kept; the catalog's extra fields
/// (`width`, `height`, `box_count`, ...) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Opaque catalog key, unique within one catalog response.
    pub id: String,
    /// Human readable label shown under the thumbnail.
    pub name: String,
    /// Location of the template image.
    pub url: String,
}
