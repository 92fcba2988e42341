//! Folder scanning and the per-file render loop.

use halftone_grid::{HalftoneError, HalftonePipeline, save_canvas};
use log::{info, warn};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extensions accepted as input, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Image files directly inside `dir`, sorted by path.
pub fn collect_inputs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: Vec<(PathBuf, HalftoneError)>,
}

pub struct BatchRunner<'a> {
    pipeline: &'a HalftonePipeline,
    filled_dir: &'a Path,
    outline_dir: &'a Path,
}

impl<'a> BatchRunner<'a> {
    pub fn new(pipeline: &'a HalftonePipeline, filled_dir: &'a Path, outline_dir: &'a Path) -> Self {
        Self { pipeline, filled_dir, outline_dir }
    }

    /// Renders every input in order. A failing file is logged and skipped.
    pub fn run(&self, inputs: &[PathBuf]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for input in inputs {
            match self.process_one(input) {
                Ok(()) => summary.processed += 1,
                Err(err) => {
                    warn!("Skipping {}: {err}", input.display());
                    summary.failed.push((input.clone(), err));
                }
            }
        }
        info!(
            "Batch finished: {} processed, {} failed",
            summary.processed,
            summary.failed.len()
        );
        summary
    }

    fn process_one(&self, input: &Path) -> halftone_grid::Result<()> {
        let output = self.pipeline.process_file(input)?;
        let file_name = input.file_name().unwrap_or(input.as_os_str());

        save_canvas(&output.filled, &self.filled_dir.join(file_name))?;
        save_canvas(&output.outline, &self.outline_dir.join(file_name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halftone_grid::{ErrorKind, HalftoneConfig};

    fn write_png(path: &Path, gray: u8) {
        image::GrayImage::from_pixel(8, 4, image::Luma([gray]))
            .save(path)
            .expect("write png");
    }

    #[test]
    fn extension_filter_ignores_case() {
        for name in ["a.png", "b.JPG", "c.Jpeg", "d.bmp", "e.TIFF"] {
            assert!(is_supported_image(Path::new(name)), "{name}");
        }
        for name in ["f.gif", "g.tif", "h.webp", "README", "png"] {
            assert!(!is_supported_image(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn collect_inputs_skips_other_files_and_sorts() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_png(&dir.path().join("b.png"), 10);
        write_png(&dir.path().join("a.PNG"), 10);
        std::fs::write(dir.path().join("notes.txt"), "hi").expect("write");
        std::fs::create_dir(dir.path().join("nested.png")).expect("mkdir");

        let inputs = collect_inputs(dir.path()).expect("scan");
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().and_then(OsStr::to_str).expect("name").to_string())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.png"]);
    }

    #[test]
    fn a_bad_file_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input_dir = dir.path().join("in");
        std::fs::create_dir(&input_dir).expect("mkdir");
        write_png(&input_dir.join("good.png"), 40);
        std::fs::write(input_dir.join("broken.jpg"), b"not a jpeg").expect("write");

        let config = HalftoneConfig { grid_height: 2, scale_factor: 4, radius_factor: 4, ..Default::default() };
        let pipeline = HalftonePipeline::new(config).expect("pipeline");
        let filled_dir = dir.path().join("filled");
        let outline_dir = dir.path().join("outline");

        let inputs = collect_inputs(&input_dir).expect("scan");
        let summary = BatchRunner::new(&pipeline, &filled_dir, &outline_dir).run(&inputs);

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].1.kind(), ErrorKind::InvalidInput);
        assert!(filled_dir.join("good.png").is_file());
        assert!(outline_dir.join("good.png").is_file());
        assert!(!filled_dir.join("broken.jpg").exists());
    }
}
