use anyhow::bail;
use chrono::Local;
use log::info;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::chart::draw_chart;
use crate::theme::Theme;
use crate::turn_log::TurnLog;

pub const IMAGE_SIZE: (u32, u32) = (1280, 900);

/// Image formats a chart can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    /// PNG, BMP or JPEG, picked by the bitmap encoder from the extension.
    Bitmap,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Option<ImageFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "svg" => Some(ImageFormat::Svg),
            "png" | "bmp" | "jpg" | "jpeg" => Some(ImageFormat::Bitmap),
            _ => None,
        }
    }
}

/// Returns the file the chart will be written to. A directory gets a
/// timestamped PNG inside it.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        let filename = format!("war-chart-{}.png", Local::now().timestamp());
        path.join(filename)
    } else {
        path.to_path_buf()
    }
}

/// Renders the chart of `log` to an image file instead of a window and
/// returns the path that was written.
pub fn save_chart(
    path: &Path,
    log: &TurnLog,
    theme: &Theme,
    size: (u32, u32),
) -> anyhow::Result<PathBuf> {
    let path = resolve_output_path(path);
    let Some(format) = ImageFormat::from_path(&path) else {
        bail!(
            "Can't save a chart as {:?}. Try a .svg, .png, .bmp, or .jpg file.",
            path
        );
    };

    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            draw_chart(&root, log, theme)?;
            root.present()?;
        }
        ImageFormat::Bitmap => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            draw_chart(&root, log, theme)?;
            root.present()?;
        }
    }

    info!("Saved chart of {} turns to {:?}", log.turns(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Some(ImageFormat::Svg), ImageFormat::from_path(Path::new("war.svg")));
        assert_eq!(Some(ImageFormat::Bitmap), ImageFormat::from_path(Path::new("war.PNG")));
        assert_eq!(Some(ImageFormat::Bitmap), ImageFormat::from_path(Path::new("war.jpeg")));
        assert_eq!(None, ImageFormat::from_path(Path::new("war.pdf")));
        assert_eq!(None, ImageFormat::from_path(Path::new("war")));
    }

    #[test]
    fn test_directory_gets_timestamped_png() {
        let dir = std::env::temp_dir();
        let path = resolve_output_path(&dir);
        assert_eq!(Some(dir.as_path()), path.parent());

        let filename = path.file_name().unwrap().to_str().unwrap();
        assert!(filename.starts_with("war-chart-"), "Unexpected name {}", filename);
        assert_eq!(Some(ImageFormat::Bitmap), ImageFormat::from_path(&path));
    }

    #[test]
    fn test_file_path_is_kept() {
        let path = Path::new("charts/not-a-dir.svg");
        assert_eq!(path.to_path_buf(), resolve_output_path(path));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let log = TurnLog::new(vec![26], vec![26]).unwrap();
        let err = save_chart(Path::new("war.pdf"), &log, &Theme::default(), IMAGE_SIZE)
            .unwrap_err();
        assert!(err.to_string().contains("war.pdf"));
    }
}
