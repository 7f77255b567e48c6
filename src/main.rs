//! Headless probe binary for the image map engine
//!
//! Walks the engine through the full load lifecycle against real sources,
//! optionally probes a pointer position (printing the hit region's link),
//! and writes the resulting surface to a PNG.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use plotmap::config::{ConfigError, MapConfig};
use plotmap::source::{self, SourceError};
use plotmap::ui::surface::{Surface, SurfaceError};
use plotmap::ui::text::{self, FontError};
use plotmap::{PointerEvent, RegionMap};

/// Backing-store size before the image's natural dimensions are known
const PLACEHOLDER_WIDTH: u32 = 300;
const PLACEHOLDER_HEIGHT: u32 = 150;

const USAGE: &str = "\
usage: plotmap <image> <regions.json> [options]
       plotmap --config <map.json> [options]

options:
    --probe X Y      simulate a pointer at display offset (X, Y) and print
                     the hit region's link
    --display WxH    displayed surface size for --probe (defaults to the
                     image's natural size)
    --out PATH       write the final surface to PATH as PNG";

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to write {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Where the map configuration comes from
#[derive(Debug, Clone, PartialEq)]
enum ConfigSource {
    File(PathBuf),
    Inline { image: String, regions: String },
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    config: ConfigSource,
    probe: Option<(f32, f32)>,
    display: Option<(f32, f32)>,
    out: Option<PathBuf>,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut config_path = None;
        let mut probe = None;
        let mut display = None;
        let mut out = None;
        let mut positional = Vec::new();

        while let Some(arg) = raw.next() {
            match arg.as_str() {
                "--config" => {
                    let path = raw.next().ok_or("--config requires a path")?;
                    config_path = Some(PathBuf::from(path));
                }
                "--probe" => {
                    let x = raw.next().ok_or("--probe requires X and Y")?;
                    let y = raw.next().ok_or("--probe requires X and Y")?;
                    let x = x.parse().map_err(|_| format!("invalid probe x: {x}"))?;
                    let y = y.parse().map_err(|_| format!("invalid probe y: {y}"))?;
                    probe = Some((x, y));
                }
                "--display" => {
                    let size = raw.next().ok_or("--display requires WxH")?;
                    let (w, h) = size
                        .split_once('x')
                        .ok_or_else(|| format!("invalid display size: {size}"))?;
                    let w = w.parse().map_err(|_| format!("invalid display width: {w}"))?;
                    let h = h.parse().map_err(|_| format!("invalid display height: {h}"))?;
                    display = Some((w, h));
                }
                "--out" => {
                    let path = raw.next().ok_or("--out requires a path")?;
                    out = Some(PathBuf::from(path));
                }
                other if other.starts_with("--") => {
                    return Err(format!("unknown option: {other}"));
                }
                _ => positional.push(arg),
            }
        }

        let config = match (config_path, positional.len()) {
            (Some(path), 0) => ConfigSource::File(path),
            (Some(_), _) => return Err("--config and positional sources are exclusive".into()),
            (None, 2) => {
                let mut positional = positional.into_iter();
                ConfigSource::Inline {
                    image: positional.next().unwrap_or_default(),
                    regions: positional.next().unwrap_or_default(),
                }
            }
            (None, _) => return Err("expected <image> <regions.json> or --config".into()),
        };

        Ok(Self {
            config,
            probe,
            display,
            out,
        })
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = match &args.config {
        ConfigSource::File(path) => MapConfig::from_file(path)?,
        ConfigSource::Inline { image, regions } => MapConfig::from_sources(image, regions),
    };

    let font = match &config.font {
        Some(path) => text::load_font(path)?,
        None => text::find_system_font()?,
    };

    let surface = Surface::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)?;
    let mut map = RegionMap::new(surface, config.theme.clone()).with_font(font);

    match source::load_image(&config.image) {
        Ok(image) => map.image_loaded(image)?,
        Err(e) => {
            // The map never activates without its image; report and stop
            map.image_failed(&e.to_string());
            return Err(e.into());
        }
    }

    match source::load_regions(&config.regions) {
        Ok(regions) => map.regions_loaded(regions),
        // Degraded static view: the banner is drawn, the probe finds nothing
        Err(e) => map.regions_failed(&e.to_string()),
    }

    if let Some((x, y)) = args.probe {
        let (display_w, display_h) = args.display.unwrap_or((
            map.surface().width() as f32,
            map.surface().height() as f32,
        ));
        let event = PointerEvent::new(x, y, display_w, display_h);
        map.pointer_move(event);
        match map.pointer_click(event) {
            Some(region) => println!("{}", region.href),
            None => println!("no match"),
        }
    }

    if let Some(path) = &args.out {
        write_png(map.surface(), path)?;
        info!(path = %path.display(), "surface written");
    }

    Ok(())
}

fn write_png(surface: &Surface, path: &Path) -> Result<(), AppError> {
    image::save_buffer(
        path,
        &surface.to_rgba(),
        surface.width(),
        surface.height(),
        image::ExtendedColorType::Rgba8,
    )
    .map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn positional_sources() {
        let args = parse(&["plot.png", "regions.json"]).unwrap();
        assert_eq!(
            args.config,
            ConfigSource::Inline {
                image: "plot.png".into(),
                regions: "regions.json".into()
            }
        );
        assert_eq!(args.probe, None);
        assert_eq!(args.out, None);
    }

    #[test]
    fn config_file_source() {
        let args = parse(&["--config", "map.json"]).unwrap();
        assert_eq!(args.config, ConfigSource::File(PathBuf::from("map.json")));
    }

    #[test]
    fn probe_display_and_out() {
        let args = parse(&[
            "plot.png",
            "regions.json",
            "--probe",
            "12.5",
            "30",
            "--display",
            "800x600",
            "--out",
            "map.png",
        ])
        .unwrap();
        assert_eq!(args.probe, Some((12.5, 30.0)));
        assert_eq!(args.display, Some((800.0, 600.0)));
        assert_eq!(args.out, Some(PathBuf::from("map.png")));
    }

    #[test]
    fn rejects_unknown_options_and_bad_values() {
        assert!(parse(&["plot.png", "regions.json", "--bogus"]).is_err());
        assert!(parse(&["plot.png", "regions.json", "--probe", "x", "1"]).is_err());
        assert!(parse(&["plot.png", "regions.json", "--display", "800"]).is_err());
        assert!(parse(&["plot.png"]).is_err());
        assert!(parse(&["--config", "map.json", "extra.png", "more.json"]).is_err());
    }
}
