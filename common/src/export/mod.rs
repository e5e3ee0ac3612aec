//! Target-independent half of the export pipeline.
//!
//! The browser side draws onto a canvas; what gets drawn, and where, is
//! decided here so the preview and the downloaded PNG agree.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::RasterizationError;
use crate::model::overlay::Overlay;
use crate::model::template::Template;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Everything the rasterizer needs besides the live DOM region.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportScene {
    pub template: Template,
    pub caption: String,
    pub overlay: Overlay,
    pub filename: String,
}

/// Caption typography, shared by the preview markup and the canvas so both
/// place glyphs identically.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    pub font_px: f64,
    pub line_height_px: f64,
    pub font_weight: &'static str,
    pub font_family: &'static str,
    pub color: &'static str,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_px: 20.0,
            line_height_px: 28.0,
            font_weight: "bold",
            font_family: "sans-serif",
            color: "#ffffff",
        }
    }
}

impl CaptionStyle {
    /// Value for `CanvasRenderingContext2D.font`.
    pub fn canvas_font(&self) -> String {
        format!("{} {}px {}", self.font_weight, self.font_px, self.font_family)
    }

    /// Inline CSS for the caption element positioned at `overlay`.
    pub fn css(&self, overlay: Overlay) -> String {
        format!(
            "position:absolute;left:{}px;top:{}px;color:{};font-size:{}px;line-height:{}px;\
             font-weight:{};font-family:{};white-space:pre;cursor:move;user-select:none;",
            overlay.x,
            overlay.y,
            self.color,
            self.font_px,
            self.line_height_px,
            self.font_weight,
            self.font_family
        )
    }
}

/// One caption line with the top-left corner of its line box.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Splits the caption into line boxes anchored at `overlay`.
///
/// Lines are neither trimmed nor wrapped, matching the `white-space: pre`
/// preview. An empty caption produces no lines.
pub fn layout_caption(caption: &str, overlay: Overlay, style: &CaptionStyle) -> Vec<CaptionLine> {
    if caption.is_empty() {
        return Vec::new();
    }

    caption
        .split('\n')
        .enumerate()
        .map(|(index, line)| CaptionLine {
            text: line.trim_end_matches('\r').to_string(),
            x: overlay.x,
            y: overlay.y + style.line_height_px * index as f64,
        })
        .collect()
}

/// Vertical offset from the top of a line box to the text's top edge, used
/// with `textBaseline = "top"` to mimic CSS half-leading.
pub fn half_leading(style: &CaptionStyle) -> f64 {
    ((style.line_height_px - style.font_px) / 2.0).max(0.0)
}

/// Decodes a `data:image/png;base64,...` URI into raw PNG bytes.
///
/// Browsers hand back `"data:,"` for zero-sized canvases; that and any other
/// non-PNG payload are rejected.
pub fn decode_png_data_uri(uri: &str) -> Result<Vec<u8>, RasterizationError> {
    let payload = uri.strip_prefix(PNG_DATA_URI_PREFIX).ok_or_else(|| {
        let head: String = uri.chars().take(32).collect();
        RasterizationError::Encoding(format!("not a PNG data URI: {head}"))
    })?;

    let bytes = BASE64
        .decode(payload)
        .map_err(|e| RasterizationError::Encoding(e.to_string()))?;

    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(RasterizationError::Encoding(
            "payload is missing the PNG signature".to_string(),
        ));
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_caption_sits_on_the_overlay() {
        let style = CaptionStyle::default();
        let lines = layout_caption("TOP TEXT", Overlay::new(40.0, 15.0), &style);
        assert_eq!(
            lines,
            vec![CaptionLine {
                text: "TOP TEXT".to_string(),
                x: 40.0,
                y: 15.0
            }]
        );
    }

    #[test]
    fn multi_line_caption_steps_by_line_height() {
        let style = CaptionStyle::default();
        let lines = layout_caption("one\ntwo\r\n\nfour", Overlay::new(-5.0, 10.0), &style);
        let ys: Vec<f64> = lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![10.0, 38.0, 66.0, 94.0]);
        assert_eq!(lines[1].text, "two");
        assert_eq!(lines[2].text, "");
        assert!(lines.iter().all(|l| l.x == -5.0));
    }

    #[test]
    fn whitespace_caption_is_kept_verbatim() {
        let lines = layout_caption("   ", Overlay::default(), &CaptionStyle::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "   ");
    }

    #[test]
    fn empty_caption_has_no_lines() {
        assert!(layout_caption("", Overlay::default(), &CaptionStyle::default()).is_empty());
    }

    #[test]
    fn canvas_font_and_css_agree_on_size() {
        let style = CaptionStyle::default();
        assert_eq!(style.canvas_font(), "bold 20px sans-serif");
        let css = style.css(Overlay::new(40.0, 15.0));
        assert!(css.contains("left:40px;top:15px;"));
        assert!(css.contains("font-size:20px;line-height:28px;"));
        assert_eq!(half_leading(&style), 4.0);
    }

    #[test]
    fn decodes_png_data_uri() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend_from_slice(b"IHDR");
        let uri = format!("{PNG_DATA_URI_PREFIX}{}", BASE64.encode(&png));
        assert_eq!(decode_png_data_uri(&uri), Ok(png));
    }

    #[test]
    fn rejects_empty_canvas_and_foreign_payloads() {
        assert!(matches!(
            decode_png_data_uri("data:,"),
            Err(RasterizationError::Encoding(_))
        ));
        assert!(matches!(
            decode_png_data_uri("data:image/png;base64,@@@"),
            Err(RasterizationError::Encoding(_))
        ));
        let jpeg_in_png_clothing = format!("{PNG_DATA_URI_PREFIX}{}", BASE64.encode([0xff, 0xd8]));
        assert!(matches!(
            decode_png_data_uri(&jpeg_in_png_clothing),
            Err(RasterizationError::Encoding(_))
        ));
    }
}
