//! Configuration for the image map
//!
//! Concentrates the user-facing knobs: where the image and region list come
//! from, which font renders the error banner, and the drawing theme. The
//! binary loads this from a JSON file or assembles it from arguments.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tiny_skia::Color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// An RGBA color as it appears on the wire: `[r, g, b, a]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const RED: Rgba = Rgba([255, 0, 0, 255]);

    pub fn to_color(self) -> Color {
        let [r, g, b, a] = self.0;
        Color::from_rgba8(r, g, b, a)
    }
}

/// Drawing theme for the highlight outline and the error banner
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Outline color for the hovered region
    pub highlight: Rgba,
    /// Error banner text color
    pub error_color: Rgba,
    /// Error banner text size in pixels
    pub error_font_size: f32,
    /// Stroke width of the region outline
    pub stroke_width: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: Rgba::RED,
            error_color: Rgba::RED,
            error_font_size: 16.0,
            stroke_width: 1.0,
        }
    }
}

impl Theme {
    pub fn highlight_color(&self) -> Color {
        self.highlight.to_color()
    }

    pub fn error_text_color(&self) -> Color {
        self.error_color.to_color()
    }
}

/// Top-level configuration for the map binary
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    /// Image source: a file path or an http(s) URL
    pub image: String,
    /// Region list source: a file path or an http(s) URL
    pub regions: String,
    /// Font for the error banner; well-known system locations are probed
    /// when absent
    #[serde(default)]
    pub font: Option<PathBuf>,
    #[serde(default)]
    pub theme: Theme,
}

impl MapConfig {
    /// Builds a configuration from the two sources with default theming
    pub fn from_sources(image: impl Into<String>, regions: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            regions: regions.into(),
            font: None,
            theme: Theme::default(),
        }
    }

    /// Loads a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.highlight, Rgba::RED);
        assert_eq!(theme.error_color, Rgba::RED);
        assert_eq!(theme.error_font_size, 16.0);
        assert_eq!(theme.stroke_width, 1.0);
    }

    #[test]
    fn partial_theme_fills_in_defaults() {
        let theme: Theme = serde_json::from_str(r#"{"stroke_width": 3.0}"#).unwrap();
        assert_eq!(theme.stroke_width, 3.0);
        assert_eq!(theme.highlight, Rgba::RED);
    }

    #[test]
    fn config_parses_sources_and_theme() {
        let json = r#"{
            "image": "plot.png",
            "regions": "https://example.org/regions.json",
            "theme": {"highlight": [0, 255, 0, 255]}
        }"#;
        let config: MapConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.image, "plot.png");
        assert_eq!(config.regions, "https://example.org/regions.json");
        assert_eq!(config.font, None);
        assert_eq!(config.theme.highlight, Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn from_file_reports_missing_and_malformed_configs() {
        let err = MapConfig::from_file(Path::new("/nonexistent/map.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = MapConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rgba_converts_to_surface_color() {
        let color = Rgba([10, 20, 30, 255]).to_color();
        assert_eq!(color.to_color_u8().red(), 10);
        assert_eq!(color.to_color_u8().alpha(), 255);
    }
}
