//! Error taxonomy for the widget.
//!
//! Both enums render into the notice shown to the user, so the `Display`
//! strings are written for people rather than logs.

use thiserror::Error;

/// Failures while retrieving or decoding the template catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogFetchError {
    #[error("Could not reach the meme catalog: {0}")]
    Network(String),

    #[error("The meme catalog answered with HTTP {0}")]
    Status(u16),

    #[error("The meme catalog sent an unexpected response: {0}")]
    Malformed(String),

    #[error("The meme catalog refused the request: {0}")]
    Rejected(String),
}

/// Failures while turning the composed preview into a downloadable PNG.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterizationError {
    #[error("Pick a template before downloading")]
    NoSelection,

    #[error("The meme preview is not on screen")]
    RegionUnavailable,

    #[error("The template image has not finished loading")]
    ImageNotReady,

    #[error("Could not draw the meme: {0}")]
    Canvas(String),

    /// The browser refused to read back pixels, usually because the template
    /// image was served without CORS headers.
    #[error("The browser blocked exporting this image: {0}")]
    Tainted(String),

    #[error("Could not encode the meme as PNG: {0}")]
    Encoding(String),

    #[error("Could not start the download: {0}")]
    Download(String),
}
