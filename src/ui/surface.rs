//! Raster drawing surface
//!
//! Wraps a tiny-skia pixmap and exposes the operations the engine needs:
//! resize to the image's natural size, blit the base image, stroke a
//! highlight rectangle and paint rasterized text. All operations are
//! synchronous and immediately visible in the pixel buffer.

use ab_glyph::FontArc;
use tiny_skia::{
    Color, Paint, PathBuilder, Pixmap, PixmapPaint, Rect as SkiaRect, Stroke, Transform,
};

use crate::ui::text;

/// Surface errors
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("cannot allocate a {width}x{height} pixel buffer")]
    Allocation { width: u32, height: u32 },
}

/// A 2D raster surface with an owned pixel buffer
///
/// Construction fails when the requested dimensions cannot back a pixel
/// buffer, so a surface handle always carries a valid drawing context.
#[derive(Debug, Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Creates a surface with the given backing-store dimensions
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width, height).ok_or(SurfaceError::Allocation { width, height })?;
        Ok(Self { pixmap })
    }

    /// Resizes the backing store, discarding current content
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::Allocation { width, height })?;
        Ok(())
    }

    /// Backing-store width in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Backing-store height in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Clears the whole surface to transparent
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Draws an image with its top-left corner at `(x, y)`
    pub fn blit(&mut self, image: &Pixmap, x: i32, y: i32) {
        self.pixmap.draw_pixmap(
            x,
            y,
            image.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Strokes an axis-aligned rectangle outline
    ///
    /// Degenerate rectangles (non-positive width or height, non-finite
    /// coordinates) draw nothing.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, stroke_width: f32) {
        let Some(rect) = SkiaRect::from_xywh(x, y, w, h) else {
            return;
        };

        let mut path_builder = PathBuilder::new();
        path_builder.push_rect(rect);
        if let Some(path) = path_builder.finish() {
            let mut paint = Paint::default();
            paint.set_color(color);
            paint.anti_alias = true;

            let stroke = Stroke {
                width: stroke_width,
                ..Stroke::default()
            };

            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Paints `text` horizontally centered on `center_x` with its top at `top`
    pub fn fill_text(
        &mut self,
        font: &FontArc,
        content: &str,
        size: f32,
        color: Color,
        center_x: f32,
        top: f32,
    ) {
        text::draw_centered(&mut self.pixmap, font, content, size, color, center_x, top);
    }

    /// Read access to the pixel buffer
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Copies the surface out as straight-alpha RGBA bytes
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }
}
