//! Region records and the half-open match test
//!
//! A region is an axis-aligned rectangle in image-pixel coordinates mapped
//! to a navigation target. Regions are loaded once per page view and never
//! mutated; their input order is significant because overlap resolution is
//! first-match-wins.

use serde::Deserialize;

use crate::domain::core::Point;

/// A labeled rectangle in the image's natural pixel space
///
/// Mirrors the wire shape of the region list: coordinates are image pixels,
/// not display pixels. `xmin <= xmax` / `ymin <= ymax` is not validated; a
/// record that breaks the invariant simply never matches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
    pub href: String,
}

impl Region {
    /// Creates a new region
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32, href: impl Into<String>) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
            href: href.into(),
        }
    }

    /// Width of the rectangle
    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }

    /// Height of the rectangle
    pub fn height(&self) -> f32 {
        self.ymax - self.ymin
    }

    /// Half-open containment test over `[xmin, xmax) x [ymin, ymax)`
    ///
    /// The max edges are excluded so two regions sharing an edge never both
    /// claim the boundary pixel.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x < self.xmax && p.y >= self.ymin && p.y < self.ymax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_interior_point() {
        let region = Region::new(0.0, 10.0, 0.0, 10.0, "a");
        assert!(region.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn min_edges_are_included() {
        let region = Region::new(2.0, 10.0, 3.0, 10.0, "a");
        assert!(region.contains(Point::new(2.0, 3.0)));
    }

    #[test]
    fn max_edges_are_excluded() {
        let region = Region::new(0.0, 10.0, 0.0, 10.0, "a");
        assert!(!region.contains(Point::new(10.0, 5.0)));
        assert!(!region.contains(Point::new(5.0, 10.0)));
        assert!(!region.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn inverted_rectangle_never_matches() {
        // xmin > xmax: no x satisfies xmin <= x < xmax
        let region = Region::new(10.0, 0.0, 0.0, 10.0, "broken");
        assert!(!region.contains(Point::new(5.0, 5.0)));
        assert!(!region.contains(Point::new(0.0, 5.0)));
        assert!(!region.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn zero_area_rectangle_never_matches() {
        let region = Region::new(5.0, 5.0, 5.0, 5.0, "empty");
        assert!(!region.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let json = r#"{"xmin": 1.0, "xmax": 4.0, "ymin": 2.0, "ymax": 8.0, "href": "page.html"}"#;
        let region: Region = serde_json::from_str(json).unwrap();
        assert_eq!(region, Region::new(1.0, 4.0, 2.0, 8.0, "page.html"));
    }

    #[test]
    fn dimensions() {
        let region = Region::new(1.0, 4.0, 2.0, 8.0, "a");
        assert_eq!(region.width(), 3.0);
        assert_eq!(region.height(), 6.0);
    }
}
