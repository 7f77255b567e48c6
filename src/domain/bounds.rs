//! Union bounding box used as a cheap reject filter
//!
//! Region lists can be large, and testing every region on every pointer
//! move is wasteful once the cursor leaves the union of all regions (the
//! margins around the mapped area). A single containment check against the
//! union turns the common miss into O(1).

use crate::domain::core::Point;
use crate::domain::region::Region;

/// Axis-aligned union of a region set
///
/// For the empty set this is the canonical contains-nothing value
/// (`xmin = +inf`, `xmax = -inf`): every real coordinate already fails
/// `x >= +inf`, so the comparisons in [`Bounds::contains`] reject everything
/// without a special case at query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl Bounds {
    /// The contains-nothing bounds, also the seed for the union fold
    pub const EMPTY: Bounds = Bounds {
        xmin: f32::INFINITY,
        xmax: f32::NEG_INFINITY,
        ymin: f32::INFINITY,
        ymax: f32::NEG_INFINITY,
    };

    /// Computes the union of all region rectangles in a single pass
    pub fn of(regions: &[Region]) -> Self {
        let mut bounds = Self::EMPTY;
        for region in regions {
            if region.xmin < bounds.xmin {
                bounds.xmin = region.xmin;
            }
            if region.xmax > bounds.xmax {
                bounds.xmax = region.xmax;
            }
            if region.ymin < bounds.ymin {
                bounds.ymin = region.ymin;
            }
            if region.ymax > bounds.ymax {
                bounds.ymax = region.ymax;
            }
        }
        bounds
    }

    /// Inclusive containment on all four edges
    ///
    /// This is a coarse filter, not a region match; the per-region test is
    /// half-open, so inclusivity on the boundary here is safe.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_tracks_extremes_over_all_regions() {
        let regions = vec![
            Region::new(5.0, 10.0, 8.0, 20.0, "a"),
            Region::new(0.0, 7.0, 12.0, 30.0, "b"),
            Region::new(6.0, 25.0, 2.0, 9.0, "c"),
        ];
        let bounds = Bounds::of(&regions);
        assert_eq!(bounds.xmin, 0.0);
        assert_eq!(bounds.xmax, 25.0);
        assert_eq!(bounds.ymin, 2.0);
        assert_eq!(bounds.ymax, 30.0);
    }

    #[test]
    fn single_region_union_is_that_region() {
        let regions = vec![Region::new(1.0, 2.0, 3.0, 4.0, "a")];
        let bounds = Bounds::of(&regions);
        assert_eq!(
            bounds,
            Bounds {
                xmin: 1.0,
                xmax: 2.0,
                ymin: 3.0,
                ymax: 4.0
            }
        );
    }

    #[test]
    fn empty_set_contains_nothing() {
        let bounds = Bounds::of(&[]);
        assert!(!bounds.contains(Point::new(0.0, 0.0)));
        assert!(!bounds.contains(Point::new(-1000.0, 1000.0)));
        assert!(!bounds.contains(Point::new(f32::MAX, f32::MIN)));
    }

    #[test]
    fn containment_is_inclusive_on_all_edges() {
        let bounds = Bounds::of(&[Region::new(0.0, 10.0, 0.0, 10.0, "a")]);
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(0.0, 10.0)));
        assert!(!bounds.contains(Point::new(10.1, 5.0)));
        assert!(!bounds.contains(Point::new(5.0, -0.1)));
    }
}
