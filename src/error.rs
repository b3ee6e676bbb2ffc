//! Errors that abort a compression run.

use std::path::PathBuf;

/// Broad category of a [`RunError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input before any work was attempted.
    Configuration,
    /// A filesystem operation failed mid-run.
    Filesystem,
    /// The external transcoder failed.
    ExternalProcess,
}

/// A fatal error; nothing is retried or rolled back.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Video directory {} does not exist", path.display())]
    InputDirectoryMissing { path: PathBuf },

    #[error("Video directory {} is not a directory", path.display())]
    InputNotDirectory { path: PathBuf },

    #[error("The compressed directory path {} exists, but it is not a directory", path.display())]
    OutputPathNotDirectory { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to compress {}: {source}", input.display())]
    Transcode {
        input: PathBuf,
        #[source]
        source: vidcompress_av::Error,
    },
}

impl RunError {
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RunError::InputDirectoryMissing { .. }
            | RunError::InputNotDirectory { .. }
            | RunError::OutputPathNotDirectory { .. } => ErrorKind::Configuration,
            RunError::Filesystem { .. } => ErrorKind::Filesystem,
            RunError::Transcode { .. } => ErrorKind::ExternalProcess,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = RunError::InputDirectoryMissing {
            path: PathBuf::from("/videos"),
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "Video directory /videos does not exist");

        let err = RunError::filesystem(
            "remove",
            "/videos/a.mp4",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ErrorKind::Filesystem);
        assert_eq!(err.to_string(), "Failed to remove /videos/a.mp4: denied");

        let err = RunError::Transcode {
            input: PathBuf::from("/videos/a.mp4"),
            source: vidcompress_av::Error::tool_not_found("ffmpeg"),
        };
        assert_eq!(err.kind(), ErrorKind::ExternalProcess);
        assert_eq!(
            err.to_string(),
            "Failed to compress /videos/a.mp4: tool not found: ffmpeg"
        );
    }
}
