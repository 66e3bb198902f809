use anyhow::{Context, Result};
use image::GenericImageView;
use std::path::Path;

/// Decoded dimensions of an uploaded photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoInfo {
    pub width: u32,
    pub height: u32,
}

/// Confirm `path` decodes as an image. The pixels are never used for content.
pub fn inspect(path: &Path) -> Result<PhotoInfo> {
    let img = image::open(path).with_context(|| format!("reading photo {}", path.display()))?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("photo {} has zero dimensions", path.display());
    }
    Ok(PhotoInfo { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("facestyle-{}-{}", std::process::id(), name))
    }

    #[test]
    fn reads_png_dimensions() {
        let path = temp_path("photo.png");
        image::RgbImage::new(4, 3).save(&path).unwrap();
        let info = inspect(&path).unwrap();
        assert_eq!(info, PhotoInfo { width: 4, height: 3 });
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_non_images() {
        let path = temp_path("notes.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(inspect(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }
}
