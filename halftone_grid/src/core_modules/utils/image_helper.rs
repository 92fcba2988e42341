pub mod image_helper {
    use crate::core_modules::canvas::OutputCanvas;
    use crate::core_modules::source_image::SourceImage;
    use crate::error::{HalftoneError, Result};
    use log::{debug, info};
    use std::fs;
    use std::path::Path;

    /// Decodes the image at `path` into a `SourceImage`.
    ///
    /// A missing path and an undecodable file are reported as different errors.
    pub fn load_source_image(path: &Path) -> Result<SourceImage> {
        if !path.exists() {
            return Err(HalftoneError::InputNotFound { path: path.to_path_buf() });
        }
        let decoded = image::open(path).map_err(|source| HalftoneError::Undecodable {
            path: path.to_path_buf(),
            source,
        })?;
        let rgb = decoded.into_rgb8();
        debug!("Decoded {} ({}x{})", path.display(), rgb.width(), rgb.height());
        SourceImage::from_rgb_image(&rgb)
    }

    /// Encodes `canvas` to `path`, picking the format from the extension.
    pub fn save_canvas(canvas: &OutputCanvas, path: &Path) -> Result<()> {
        let write_failure = |source| HalftoneError::WriteFailure {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_failure(image::ImageError::IoError(e)))?;
            }
        }
        canvas.to_gray_image().save(path).map_err(write_failure)?;

        info!("Saved image to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::image_helper::*;
    use crate::core_modules::canvas::{OutputCanvas, Stroke};
    use crate::core_modules::pixel::pixel::Pixel;
    use crate::error::{ErrorKind, HalftoneError};

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_source_image(&dir.path().join("ghost.png")).unwrap_err();
        assert!(matches!(err, HalftoneError::InputNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn garbage_file_is_undecodable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not a png").expect("write");

        let err = load_source_image(&path).unwrap_err();
        assert!(matches!(err, HalftoneError::Undecodable { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn decoded_colours_keep_their_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("swatch.png");
        let mut rgb = image::RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        rgb.put_pixel(1, 0, image::Rgb([0, 0, 255]));
        rgb.save(&path).expect("save swatch");

        let source = load_source_image(&path).expect("decode");
        assert_eq!(source.pixel(0, 0), Pixel::new(0, 0, 255));
        assert_eq!(source.pixel(1, 0), Pixel::new(255, 0, 0));
    }

    #[test]
    fn saved_canvas_round_trips_through_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("dots.png");
        let mut canvas = OutputCanvas::new(30, 20);
        canvas.draw_circle(15, 10, 6, Stroke::Filled);

        save_canvas(&canvas, &path).expect("save");

        let reloaded = image::open(&path).expect("reopen").into_luma8();
        assert_eq!(reloaded.dimensions(), (30, 20));
        assert_eq!(reloaded.as_raw().as_slice(), canvas.as_raw());
    }

    #[test]
    fn unsupported_extension_is_a_write_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let canvas = OutputCanvas::new(4, 4);
        let err = save_canvas(&canvas, &dir.path().join("dots.unknownext")).unwrap_err();
        assert!(matches!(err, HalftoneError::WriteFailure { .. }));
        assert_eq!(err.kind(), ErrorKind::WriteFailure);
    }
}
