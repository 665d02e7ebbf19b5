//! Per-session generation state.
//!
//! One explicit [`Session`] object owns the single "current result" slot;
//! the pipelines themselves stay stateless. Callers pass the session by
//! reference, so there is no ambient global to share between components.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Which pipeline produced a piece of art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Image,
}

/// Lifecycle of the session's single in-flight generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Complete,
    Error,
}

/// Immutable settings snapshot attached to a completed render.
///
/// `fidelity` applies only to image mode; `text_style`, `font_size` and
/// `letter_spacing` only to text mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(rename = "isColor")]
    pub is_color: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fidelity: Option<f32>,
    #[serde(rename = "textStyle", default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<String>,
    #[serde(rename = "fontSize", default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(rename = "letterSpacing", default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
}

impl GenerationSettings {
    pub fn for_text(
        is_color: bool,
        style: impl Into<String>,
        font_size: f32,
        letter_spacing: f32,
    ) -> Self {
        Self {
            is_color,
            fidelity: None,
            text_style: Some(style.into()),
            font_size: Some(font_size),
            letter_spacing: Some(letter_spacing),
        }
    }

    pub fn for_image(is_color: bool, fidelity: f32) -> Self {
        Self {
            is_color,
            fidelity: Some(fidelity),
            text_style: None,
            font_size: None,
            letter_spacing: None,
        }
    }
}

/// A completed generation: both output versions plus the settings that
/// produced them. Toggling color mode selects a version; it never
/// re-renders.
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiArt {
    pub id: String,
    pub kind: InputKind,
    pub color_version: String,
    pub grayscale_version: String,
    pub settings: GenerationSettings,
}

impl AsciiArt {
    pub fn new(
        kind: InputKind,
        color_version: String,
        grayscale_version: String,
        settings: GenerationSettings,
    ) -> Self {
        let id = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis().to_string())
            .unwrap_or_default();
        Self { id, kind, color_version, grayscale_version, settings }
    }

    pub fn version(&self, is_color: bool) -> &str {
        if is_color { &self.color_version } else { &self.grayscale_version }
    }
}

/// Session state: the status flag and the single current-result slot.
#[derive(Debug, Default)]
pub struct Session {
    status: GenerationStatus,
    current: Option<AsciiArt>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// Mark a generation as started. Returns false while one is already in
    /// flight; the UI policy is to disable re-submission, not to queue.
    pub fn begin(&mut self) -> bool {
        if self.status == GenerationStatus::Generating {
            return false;
        }
        self.status = GenerationStatus::Generating;
        true
    }

    /// Store a completed generation, overwriting the slot whole. The last
    /// completed generation wins.
    pub fn complete(&mut self, art: AsciiArt) {
        self.current = Some(art);
        self.status = GenerationStatus::Complete;
    }

    pub fn fail(&mut self) {
        self.status = GenerationStatus::Error;
    }

    pub fn current(&self) -> Option<&AsciiArt> {
        self.current.as_ref()
    }

    /// The stored art's text in the requested color mode.
    pub fn current_text(&self, is_color: bool) -> Option<&str> {
        self.current.as_ref().map(|art| art.version(is_color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(tag: &str) -> AsciiArt {
        AsciiArt::new(
            InputKind::Text,
            format!("color-{tag}"),
            format!("gray-{tag}"),
            GenerationSettings::for_text(true, "standard", 1.0, 1.0),
        )
    }

    #[test]
    fn test_begin_blocks_overlapping_generation() {
        let mut session = Session::new();
        assert!(session.begin());
        assert!(!session.begin());
        session.complete(art("a"));
        assert!(session.begin());
    }

    #[test]
    fn test_complete_overwrites_slot() {
        let mut session = Session::new();
        session.begin();
        session.complete(art("first"));
        session.begin();
        session.complete(art("second"));
        assert_eq!(session.current_text(false), Some("gray-second"));
        assert_eq!(session.status(), GenerationStatus::Complete);
    }

    #[test]
    fn test_color_toggle_retrieves_stored_versions() {
        let mut session = Session::new();
        session.begin();
        session.complete(art("x"));
        assert_eq!(session.current_text(true), Some("color-x"));
        assert_eq!(session.current_text(false), Some("gray-x"));
    }

    #[test]
    fn test_fail_keeps_previous_result() {
        let mut session = Session::new();
        session.begin();
        session.complete(art("kept"));
        session.begin();
        session.fail();
        assert_eq!(session.status(), GenerationStatus::Error);
        assert_eq!(session.current_text(false), Some("gray-kept"));
    }

    #[test]
    fn test_settings_serialization_shape() {
        let settings = GenerationSettings::for_image(true, 0.7);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"isColor":true,"fidelity":0.7}"#);
    }
}
