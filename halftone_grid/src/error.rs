// THEORY:
// Every fallible path in the crate reports through one `HalftoneError`. The core
// math itself cannot fail; errors only come from the edges of the pipeline:
// a missing or broken source image, a degenerate pixel buffer, a grid whose
// magnified canvas would not fit in `u32`, a bad configuration value, or an
// output file that could not be written.
//
// `ErrorKind` folds the variants back into the three families a caller
// actually branches on. The batch driver, for example, only needs to know
// whether a file was bad input or whether the disk refused the result.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, HalftoneError>;

/// Coarse classification of a `HalftoneError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source image is missing, undecodable, has no pixels or is too wide to render.
    InvalidInput,
    /// Encoding or writing an output canvas failed.
    WriteFailure,
    /// A configuration value or file was rejected.
    Config,
}

#[derive(Debug, thiserror::Error)]
pub enum HalftoneError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read image from {}: {source}", path.display())]
    Undecodable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image has a zero dimension ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} samples, expected {expected}")]
    BufferMismatch { expected: usize, actual: usize },

    #[error("a {grid_width}x{grid_height} grid at scale {scale_factor} overflows the canvas size")]
    CanvasTooLarge { grid_width: u32, grid_height: u32, scale_factor: u32 },

    #[error("failed to write image to {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl HalftoneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HalftoneError::InputNotFound { .. }
            | HalftoneError::Undecodable { .. }
            | HalftoneError::EmptyImage { .. }
            | HalftoneError::BufferMismatch { .. }
            | HalftoneError::CanvasTooLarge { .. } => ErrorKind::InvalidInput,
            HalftoneError::WriteFailure { .. } => ErrorKind::WriteFailure,
            HalftoneError::InvalidConfig(_)
            | HalftoneError::ConfigRead { .. }
            | HalftoneError::ConfigParse(_) => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_share_a_kind() {
        let missing = HalftoneError::InputNotFound { path: PathBuf::from("nope.png") };
        let empty = HalftoneError::EmptyImage { width: 0, height: 4 };
        let short = HalftoneError::BufferMismatch { expected: 12, actual: 9 };
        let huge = HalftoneError::CanvasTooLarge { grid_width: 87_500_000, grid_height: 1, scale_factor: 50 };

        assert_eq!(missing.kind(), ErrorKind::InvalidInput);
        assert_eq!(empty.kind(), ErrorKind::InvalidInput);
        assert_eq!(short.kind(), ErrorKind::InvalidInput);
        assert_eq!(huge.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn messages_name_the_offending_path() {
        let missing = HalftoneError::InputNotFound { path: PathBuf::from("shots/cat.jpg") };
        assert_eq!(missing.to_string(), "input file not found: shots/cat.jpg");

        let write = HalftoneError::WriteFailure {
            path: PathBuf::from("out/cat.xyz"),
            source: image::ImageError::IoError(std::io::Error::other("disk full")),
        };
        assert_eq!(write.kind(), ErrorKind::WriteFailure);
        assert!(write.to_string().starts_with("failed to write image to out/cat.xyz"));
    }
}
