//! Decoding of the catalog endpoint's JSON body.
//!
//! The endpoint answers `{ "success": true, "data": { "memes": [...] } }` and
//! signals failures with `success: false` plus an `error_message`.

use serde::Deserialize;

use crate::error::CatalogFetchError;
use crate::model::template::Template;

#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: Option<CatalogData>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogData {
    pub memes: Vec<Template>,
}

fn default_success() -> bool {
    true
}

/// Parses a catalog body into the ordered template list.
///
/// Order is preserved exactly as received; pagination relies on it.
pub fn parse_catalog(body: &str) -> Result<Vec<Template>, CatalogFetchError> {
    let response: CatalogResponse =
        serde_json::from_str(body).map_err(|e| CatalogFetchError::Malformed(e.to_string()))?;

    if !response.success {
        return Err(CatalogFetchError::Rejected(
            response
                .error_message
                .unwrap_or_else(|| "no reason given".to_string()),
        ));
    }

    response
        .data
        .map(|data| data.memes)
        .ok_or_else(|| CatalogFetchError::Malformed("missing `data.memes`".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_imgflip_shaped_body_and_ignores_extra_fields() {
        let body = r#"{
            "success": true,
            "data": { "memes": [
                { "id": "181913649", "name": "Drake Hotline Bling", "url": "https://i.imgflip.com/30b1gx.jpg",
                  "width": 1200, "height": 1200, "box_count": 2, "captions": 1000 },
                { "id": "87743020", "name": "Two Buttons", "url": "https://i.imgflip.com/1g8my4.jpg" }
            ] }
        }"#;

        let memes = parse_catalog(body).expect("catalog should parse");
        assert_eq!(memes.len(), 2);
        assert_eq!(memes[0].id, "181913649");
        assert_eq!(memes[1].name, "Two Buttons");
    }

    #[test]
    fn missing_success_flag_is_accepted() {
        let body = r#"{ "data": { "memes": [ { "id": "1", "name": "Drake", "url": "u1" } ] } }"#;
        assert_eq!(parse_catalog(body).map(|m| m.len()), Ok(1));
    }

    #[test]
    fn rejected_response_carries_the_error_message() {
        let body = r#"{ "success": false, "error_message": "rate limited" }"#;
        assert_eq!(
            parse_catalog(body),
            Err(CatalogFetchError::Rejected("rate limited".to_string()))
        );
    }

    #[test]
    fn missing_memes_is_malformed() {
        assert!(matches!(
            parse_catalog(r#"{ "success": true, "data": {} }"#),
            Err(CatalogFetchError::Malformed(_))
        ));
        assert!(matches!(
            parse_catalog(r#"{ "success": true }"#),
            Err(CatalogFetchError::Malformed(_))
        ));
        assert!(matches!(
            parse_catalog("<html>gateway timeout</html>"),
            Err(CatalogFetchError::Malformed(_))
        ));
    }
}
