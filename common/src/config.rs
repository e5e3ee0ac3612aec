//! Compile-time defaults for the widget.

/// Public catalog of meme templates. Answers a plain GET with
/// `{ "success": true, "data": { "memes": [...] } }`.
pub const CATALOG_URL: &str = "https://api.imgflip.com/get_memes";

/// Number of templates revealed initially and on every "Load More".
pub const PAGE_SIZE: usize = 4;

/// File name offered to the browser when a meme is downloaded.
pub const EXPORT_FILENAME: &str = "meme.png";
