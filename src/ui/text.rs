//! Glyph layout and rasterization for the error banner
//!
//! Uses ab_glyph to scale and rasterize glyph outlines straight into a
//! pixmap. The font itself is host-provided: either an explicit path from
//! configuration or the first hit from a short list of well-known system
//! font locations.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use tiny_skia::{Color, Pixmap, PremultipliedColorU8};

/// Font errors
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read font file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {path:?} is not a usable font")]
    Parse { path: PathBuf },

    #[error("no usable font found in the known system locations")]
    NoSystemFont,
}

/// Locations probed by [`find_system_font`], in order
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads a font from an explicit path
pub fn load_font(path: &Path) -> Result<FontArc, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    FontArc::try_from_vec(data).map_err(|_| FontError::Parse {
        path: path.to_path_buf(),
    })
}

/// Probes well-known system locations for a usable font
pub fn find_system_font() -> Result<FontArc, FontError> {
    for candidate in SYSTEM_FONT_PATHS {
        let path = Path::new(candidate);
        if path.is_file() {
            if let Ok(font) = load_font(path) {
                return Ok(font);
            }
        }
    }
    Err(FontError::NoSystemFont)
}

/// Advance width of `text` at the given pixel size
pub fn measure(font: &FontArc, text: &str, size: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0;
    let mut previous = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        previous = Some(id);
    }
    width
}

/// Rasterizes `text` horizontally centered on `center_x`, top edge at `top`
pub fn draw_centered(
    pixmap: &mut Pixmap,
    font: &FontArc,
    text: &str,
    size: f32,
    color: Color,
    center_x: f32,
    top: f32,
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let baseline = top + scaled.ascent();
    let mut caret = center_x - measure(font, text, size) / 2.0;
    let mut previous = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let glyph_bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = glyph_bounds.min.x as i32 + gx as i32;
                let y = glyph_bounds.min.y as i32 + gy as i32;
                blend_pixel(pixmap, x, y, color, coverage);
            });
        }
    }
}

/// Source-over blend of `color` at the given coverage into one pixel
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: Color, coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    if x < 0 || y < 0 || x >= pixmap.width() as i32 || y >= pixmap.height() as i32 {
        return;
    }

    let index = y as usize * pixmap.width() as usize + x as usize;
    let pixels = pixmap.pixels_mut();
    let dst = pixels[index];

    let src_a = color.alpha() * coverage.min(1.0);
    let inv = 1.0 - src_a;
    let r = color.red() * src_a + dst.red() as f32 / 255.0 * inv;
    let g = color.green() * src_a + dst.green() as f32 / 255.0 * inv;
    let b = color.blue() * src_a + dst.blue() as f32 / 255.0 * inv;
    let a = src_a + dst.alpha() as f32 / 255.0 * inv;

    let a8 = (a * 255.0 + 0.5) as u8;
    // Premultiplied components can never exceed the alpha channel
    let r8 = ((r * 255.0 + 0.5) as u8).min(a8);
    let g8 = ((g * 255.0 + 0.5) as u8).min(a8);
    let b8 = ((b * 255.0 + 0.5) as u8).min(a8);
    if let Some(blended) = PremultipliedColorU8::from_rgba(r8, g8, b8, a8) {
        pixels[index] = blended;
    }
}
