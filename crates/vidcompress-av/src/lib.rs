//! # vidcompress-av
//!
//! External tool handling for video compression.
//!
//! This crate provides:
//! - Detection of external tools such as ffmpeg
//! - The [`Transcoder`] trait and its ffmpeg-backed implementation
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use vidcompress_av::{require_tool, EncodeSettings, FfmpegTranscoder, Transcoder};
//!
//! let ffmpeg = FfmpegTranscoder::new(require_tool("ffmpeg")?);
//! ffmpeg.transcode(
//!     Path::new("/videos/clip.mp4"),
//!     Path::new("/videos/compressed/clip.mp4"),
//!     &EncodeSettings::default(),
//! )?;
//! # Ok::<(), vidcompress_av::Error>(())
//! ```

mod error;
pub mod tools;
pub mod transcode;

// Re-exports
pub use error::{Error, Result};
pub use tools::{get_tool_path, require_tool};
pub use transcode::{EncodeSettings, FfmpegTranscoder, Transcoder, DEFAULT_CRF, DEFAULT_VIDEO_CODEC};
