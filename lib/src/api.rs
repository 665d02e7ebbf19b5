//! Request/response contract for the two engine endpoints.
//!
//! The payload shapes (field names, `success` flags, error envelope and
//! status codes) are the wire contract any transport must keep; the
//! functions here are transport-agnostic.

use serde::{Deserialize, Serialize};

use crate::compose::compose_styled;
use crate::font::{FontInfo, FontTable};

/// Text-to-ASCII request. `font_size` and `letter_spacing` are accepted for
/// contract compatibility; they are applied by the render adapter, not
/// during composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    #[serde(default)]
    pub font: String,
    #[serde(rename = "fontSize", default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(rename = "letterSpacing", default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
}

impl GenerateRequest {
    pub fn new(text: impl Into<String>, font: impl Into<String>) -> Self {
        Self { text: text.into(), font: font.into(), font_size: None, letter_spacing: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub ascii: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontsResponse {
    pub success: bool,
    pub fonts: Vec<FontInfo>,
}

/// Error envelope: `{ "success": false, "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Faults a transport maps onto its own status codes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed request field; rejected before any work.
    #[error("Invalid text input")]
    InvalidInput,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP-style status for the fault.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidInput => 400,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn to_payload(&self) -> ErrorResponse {
        ErrorResponse { success: false, error: self.to_string() }
    }
}

/// Font listing: the static enumeration of supported identifiers with
/// their display names. Always succeeds in-process.
pub fn list_fonts(table: &FontTable) -> FontsResponse {
    FontsResponse { success: true, fonts: table.infos() }
}

/// Text-to-ASCII endpoint.
///
/// Rejects empty text with `InvalidInput`. An unresolved font is not an
/// error: the response echoes the input text unchanged.
pub fn generate_text(
    table: &FontTable,
    request: &GenerateRequest,
) -> Result<GenerateResponse, ApiError> {
    if request.text.is_empty() {
        return Err(ApiError::InvalidInput);
    }
    let ascii = compose_styled(&request.text, &request.font, table).into_text();
    Ok(GenerateResponse { success: true, ascii })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_fonts_succeeds_with_display_names() {
        let table = FontTable::builtin();
        let response = list_fonts(&table);
        assert!(response.success);
        let standard = response.fonts.iter().find(|f| f.name == "standard").unwrap();
        assert_eq!(standard.display_name, "Standard");
    }

    #[test]
    fn test_empty_text_is_rejected_before_any_work() {
        let table = FontTable::builtin();
        let err = generate_text(&table, &GenerateRequest::new("", "standard")).unwrap_err();
        assert_eq!(err.status(), 400);
        let payload = err.to_payload();
        assert!(!payload.success);
        assert_eq!(payload.error, "Invalid text input");
    }

    #[test]
    fn test_error_payload_wire_shape() {
        let json = serde_json::to_string(&ApiError::InvalidInput.to_payload()).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"Invalid text input"}"#);
    }

    #[test]
    fn test_unresolved_font_echoes_text() {
        let table = FontTable::builtin();
        let request = GenerateRequest::new("Hello", "gothic");
        let response = generate_text(&table, &request).unwrap();
        assert!(response.success);
        assert_eq!(response.ascii, "Hello");
    }

    #[test]
    fn test_known_font_renders_multiline_ascii() {
        let table = FontTable::builtin();
        let response = generate_text(&table, &GenerateRequest::new("HI", "standard")).unwrap();
        assert!(response.ascii.contains('\n'));
        assert!(response.ascii.contains('#'));
    }

    #[test]
    fn test_request_accepts_adapter_fields() {
        let json = r#"{"text":"yo","font":"standard","fontSize":2,"letterSpacing":1.5}"#;
        let request: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.font_size, Some(2.0));
        assert_eq!(request.letter_spacing, Some(1.5));
    }

    #[test]
    fn test_request_font_defaults_to_empty() {
        let request: GenerateRequest = serde_json::from_str(r#"{"text":"yo"}"#).unwrap();
        assert_eq!(request.font, "");
        // Empty font name resolves nothing and falls back to the echo path.
        let response = generate_text(&FontTable::builtin(), &request).unwrap();
        assert_eq!(response.ascii, "yo");
    }
}
