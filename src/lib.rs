//! plotmap: an interactive image map engine
//!
//! An image is displayed on a raster surface overlaid with rectangular
//! regions, each mapped to a destination link. As the pointer moves over the
//! surface the region under the cursor is outlined; a click reports the
//! region so the caller can follow its link.
//!
//! The crate splits into four layers:
//!
//! - [`domain`] - pure hit-testing geometry: regions, their union bounds and
//!   the first-match index
//! - [`ui`] - the pixmap-backed drawing surface and glyph rasterization
//! - [`app`] - the load-lifecycle state machine and the engine that ties
//!   surface, image and regions together
//! - [`source`] - image and region-list loaders for files and URLs
//!
//! The engine never touches the host environment: it is constructed with an
//! already-resolved surface handle, fed source-completion events, and handed
//! pointer events one at a time.

pub mod app;
pub mod config;
pub mod domain;
pub mod source;
pub mod ui;

pub use app::engine::{PointerEvent, RegionMap, REGIONS_ERROR_TEXT};
pub use app::state::{LoadEvent, Phase};
pub use config::{MapConfig, Rgba, Theme};
pub use domain::bounds::Bounds;
pub use domain::core::{Point, Scale};
pub use domain::index::RegionIndex;
pub use domain::region::Region;
pub use source::SourceError;
pub use ui::surface::{Surface, SurfaceError};
pub use ui::text::FontError;
