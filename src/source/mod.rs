//! Image and region-list acquisition
//!
//! The engine treats both sources as opaque collaborators that either
//! complete or fail; this module supplies the concrete loaders. A source is
//! a local file path or an http(s) URL. URL fetches block until they
//! resolve, matching the single-threaded event model: the load sequence
//! suspends at each source and resumes on completion.

use std::io::Read;

use tiny_skia::{ColorU8, Pixmap};

use crate::domain::region::Region;

/// Source errors
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to decode image from {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("image {name} cannot back a pixel buffer")]
    Buffer { name: String },

    #[error("failed to parse region list from {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// True when the source names a URL rather than a local path
fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_bytes(source: &str) -> Result<Vec<u8>, SourceError> {
    if is_url(source) {
        let response = ureq::get(source)
            .set("User-Agent", concat!("plotmap/", env!("CARGO_PKG_VERSION")))
            .call()
            .map_err(|e| SourceError::Http {
                url: source.to_string(),
                source: Box::new(e),
            })?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| SourceError::Io {
                name: source.to_string(),
                source: e,
            })?;
        Ok(bytes)
    } else {
        std::fs::read(source).map_err(|e| SourceError::Io {
            name: source.to_string(),
            source: e,
        })
    }
}

/// Loads and decodes the base image into its natural-size pixel buffer
pub fn load_image(source: &str) -> Result<Pixmap, SourceError> {
    let bytes = fetch_bytes(source)?;
    let decoded = image::load_from_memory(&bytes).map_err(|e| SourceError::Decode {
        name: source.to_string(),
        source: e,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| SourceError::Buffer {
        name: source.to_string(),
    })?;
    for (pixel, chunk) in pixmap.pixels_mut().iter_mut().zip(rgba.as_raw().chunks_exact(4)) {
        *pixel = ColorU8::from_rgba(chunk[0], chunk[1], chunk[2], chunk[3]).premultiply();
    }
    Ok(pixmap)
}

/// Fetches and parses the region list, preserving input order
pub fn load_regions(source: &str) -> Result<Vec<Region>, SourceError> {
    let bytes = fetch_bytes(source)?;
    serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse {
        name: source.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_detection() {
        assert!(is_url("http://example.org/regions.json"));
        assert!(is_url("https://example.org/plot.png"));
        assert!(!is_url("plot.png"));
        assert!(!is_url("/var/data/regions.json"));
    }

    #[test]
    fn regions_load_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regions.json");
        std::fs::write(
            &path,
            r#"[
                {"xmin": 0, "xmax": 10, "ymin": 0, "ymax": 10, "href": "a"},
                {"xmin": 5, "xmax": 15, "ymin": 5, "ymax": 15, "href": "b"}
            ]"#,
        )
        .unwrap();

        let regions = load_regions(path.to_str().unwrap()).unwrap();
        let hrefs: Vec<&str> = regions.iter().map(|r| r.href.as_str()).collect();
        assert_eq!(hrefs, ["a", "b"]);
    }

    #[test]
    fn malformed_region_list_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regions.json");
        std::fs::write(&path, r#"{"not": "a list"}"#).unwrap();

        let err = load_regions(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_regions("/nonexistent/regions.json").unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        let err = load_image("/nonexistent/plot.png").unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn image_decodes_to_its_natural_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let img = image::RgbaImage::from_pixel(6, 4, image::Rgba([0, 0, 255, 255]));
        img.save(&path).unwrap();

        let pixmap = load_image(path.to_str().unwrap()).unwrap();
        assert_eq!(pixmap.width(), 6);
        assert_eq!(pixmap.height(), 4);
        let c = pixmap.pixel(3, 2).unwrap().demultiply();
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (0, 0, 255, 255));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        let err = load_image(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SourceError::Decode { .. }));
    }
}
