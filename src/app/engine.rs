//! The interactive image map engine
//!
//! Owns the drawing surface, the base image and the region index, and drives
//! the erase/redraw cycle for pointer events. The engine is constructed with
//! an already-resolved surface handle and fed source-completion events by
//! the host; wiring to a page or window lifecycle is the caller's job, as is
//! acting on the navigation target a click reports.

use ab_glyph::FontArc;
use tiny_skia::Pixmap;
use tracing::{debug, error, info, warn};

use crate::app::state::{LoadEvent, Phase};
use crate::config::Theme;
use crate::domain::core::{Point, Scale};
use crate::domain::index::RegionIndex;
use crate::domain::region::Region;
use crate::ui::surface::{Surface, SurfaceError};

/// Banner drawn when the region list cannot be fetched
pub const REGIONS_ERROR_TEXT: &str = "Regions not found. Interactivity disabled";

/// A raw pointer event relative to the surface's displayed size
///
/// Offsets are display pixels. `display_width`/`display_height` carry the
/// surface's on-screen size at dispatch time; the engine uses them to
/// rescale the offsets into image-pixel space, since the displayed size can
/// differ from the backing store under responsive layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub offset_x: f32,
    pub offset_y: f32,
    pub display_width: f32,
    pub display_height: f32,
}

impl PointerEvent {
    /// Creates a pointer event
    pub fn new(offset_x: f32, offset_y: f32, display_width: f32, display_height: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            display_width,
            display_height,
        }
    }
}

/// Hit-testing and rendering engine for one image map
///
/// The surface's pixel buffer and the region index are owned exclusively by
/// this struct; pointer events are expected to arrive one at a time, each
/// handler running to completion before the next.
#[derive(Debug)]
pub struct RegionMap {
    surface: Surface,
    theme: Theme,
    font: Option<FontArc>,
    image: Option<Pixmap>,
    index: Option<RegionIndex>,
    phase: Phase,
}

impl RegionMap {
    /// Creates an engine around an already-resolved surface handle
    pub fn new(surface: Surface, theme: Theme) -> Self {
        Self {
            surface,
            theme,
            font: None,
            image: None,
            index: None,
            phase: Phase::Unloaded,
        }
    }

    /// Supplies the font used for the error banner
    ///
    /// Without a font the banner text is logged instead of rasterized.
    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read access to the drawing surface
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The loaded regions in input order; empty before they arrive
    pub fn regions(&self) -> &[Region] {
        self.index.as_ref().map(RegionIndex::regions).unwrap_or(&[])
    }

    /// Image source completed: size the surface to the image's natural
    /// dimensions and draw it once
    pub fn image_loaded(&mut self, image: Pixmap) -> Result<(), SurfaceError> {
        if self.phase != Phase::Unloaded {
            warn!(phase = ?self.phase, "ignoring duplicate image delivery");
            return Ok(());
        }

        self.surface.resize(image.width(), image.height())?;
        info!(
            width = image.width(),
            height = image.height(),
            "image loaded, surface sized to natural dimensions"
        );
        self.image = Some(image);
        self.redraw_base();
        self.phase = self.phase.next(LoadEvent::ImageLoaded);
        Ok(())
    }

    /// Image source failed: the map never activates
    ///
    /// Nothing is drawn because there is no content to draw an error over;
    /// the failure is only reported as a diagnostic.
    pub fn image_failed(&mut self, reason: &str) {
        error!(reason, "cannot load image");
        self.phase = self.phase.next(LoadEvent::ImageFailed);
    }

    /// Region source completed: compute the union bounds and go interactive
    pub fn regions_loaded(&mut self, regions: Vec<Region>) {
        if self.phase != Phase::Loaded {
            warn!(phase = ?self.phase, "ignoring region delivery outside the load sequence");
            return;
        }

        info!(count = regions.len(), "region list loaded");
        self.index = Some(RegionIndex::new(regions));
        self.phase = self.phase.next(LoadEvent::RegionsLoaded);
    }

    /// Region source failed: degrade to a static view with an error banner
    pub fn regions_failed(&mut self, reason: &str) {
        error!(reason, "cannot fetch regions, interactivity disabled");
        if self.phase == Phase::Loaded {
            self.render_error(REGIONS_ERROR_TEXT);
        }
        self.phase = self.phase.next(LoadEvent::RegionsFailed);
    }

    /// Transforms a raw event into image-pixel coordinates
    ///
    /// The scale factor is derived fresh from the event's layout data every
    /// time; layout can change between events, so it is never cached.
    pub fn scaled_point(&self, event: &PointerEvent) -> Point {
        let scale = Scale::from_sizes(
            self.surface.width(),
            self.surface.height(),
            event.display_width,
            event.display_height,
        );
        scale.apply(event.offset_x, event.offset_y)
    }

    /// First region under `p` in input order, bounds-rejected first
    pub fn hit_test(&self, p: Point) -> Option<&Region> {
        self.index.as_ref()?.hit(p)
    }

    /// Pointer motion: erase, redraw, and outline the hit region if any
    ///
    /// The redraw happens on every move regardless of a match, so a
    /// previous highlight never lingers.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        if !self.phase.is_interactive() {
            return;
        }

        self.redraw_base();
        let p = self.scaled_point(&event);
        if let Some(region) = self.hit_test(p).cloned() {
            debug!(href = %region.href, "pointer over region");
            self.draw_outline(&region);
        }
    }

    /// Pointer click: redraw, then report the hit region for navigation
    ///
    /// The engine never navigates; the caller owns what following the
    /// region's `href` means.
    pub fn pointer_click(&mut self, event: PointerEvent) -> Option<&Region> {
        if !self.phase.is_interactive() {
            return None;
        }

        self.redraw_base();
        let p = self.scaled_point(&event);
        let hit = self.hit_test(p);
        if let Some(region) = hit {
            debug!(href = %region.href, "click matched region");
        }
        hit
    }

    /// Pointer left the surface: clear any lingering highlight
    pub fn pointer_leave(&mut self) {
        if !self.phase.is_interactive() {
            return;
        }
        self.redraw_base();
    }

    /// Strokes the region's outline over the freshly drawn base image
    fn draw_outline(&mut self, region: &Region) {
        self.surface.stroke_rect(
            region.xmin,
            region.ymin,
            region.width(),
            region.height(),
            self.theme.highlight_color(),
            self.theme.stroke_width,
        );
    }

    /// Erase-and-redraw of the base image; a no-op before any image exists
    fn redraw_base(&mut self) {
        self.surface.clear();
        if let Some(image) = &self.image {
            self.surface.blit(image, 0, 0);
        }
    }

    /// Draws `message` centered near the top of the surface
    fn render_error(&mut self, message: &str) {
        self.redraw_base();
        let center_x = self.surface.width() as f32 / 2.0;
        let top = self.surface.height() as f32 * 0.1;
        match &self.font {
            Some(font) => self.surface.fill_text(
                font,
                message,
                self.theme.error_font_size,
                self.theme.error_text_color(),
                center_x,
                top,
            ),
            None => warn!(message, "no font available for the error banner"),
        }
    }
}
