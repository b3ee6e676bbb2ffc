//! Video transcoding through an external encoder.

use crate::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Video codec used for every compressed output.
pub const DEFAULT_VIDEO_CODEC: &str = "libx265";

/// Constant rate factor used for every compressed output.
pub const DEFAULT_CRF: u32 = 28;

/// Encoder parameters passed to a [`Transcoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSettings {
    /// ffmpeg video encoder name.
    pub video_codec: String,
    /// Constant rate factor; higher means smaller output.
    pub crf: u32,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            crf: DEFAULT_CRF,
        }
    }
}

/// Something that can re-encode one video file into another.
///
/// Calls block until the output is fully written or the encode fails.
pub trait Transcoder {
    /// Encode `input` into `output` with the given settings.
    fn transcode(&self, input: &Path, output: &Path, settings: &EncodeSettings) -> Result<()>;
}

impl<T: Transcoder + ?Sized> Transcoder for &T {
    fn transcode(&self, input: &Path, output: &Path, settings: &EncodeSettings) -> Result<()> {
        (**self).transcode(input, output, settings)
    }
}

/// [`Transcoder`] backed by the ffmpeg command line tool.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use vidcompress_av::{EncodeSettings, FfmpegTranscoder, Transcoder};
///
/// let ffmpeg = FfmpegTranscoder::new("ffmpeg");
/// ffmpeg.transcode(
///     Path::new("/videos/clip.mp4"),
///     Path::new("/videos/compressed/clip.mp4"),
///     &EncodeSettings::default(),
/// )?;
/// # Ok::<(), vidcompress_av::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    binary: PathBuf,
}

impl FfmpegTranscoder {
    /// Create a transcoder that runs the given ffmpeg executable.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Path of the ffmpeg executable this transcoder runs.
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, input: &Path, output: &Path, settings: &EncodeSettings) -> Result<()> {
        if !input.exists() {
            return Err(Error::file_not_found(input));
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Transcoding {:?} -> {:?} ({}, crf {})",
            input,
            output,
            settings.video_codec,
            settings.crf
        );

        let result = Command::new(&self.binary)
            .args(ffmpeg_args(input, output, settings))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(self.binary.to_string_lossy())
                } else {
                    Error::Io(e)
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::tool_failed(
                "ffmpeg",
                format!("{}: {}", result.status, stderr_tail(&stderr)),
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("ffmpeg finished for {:?}", output);

        Ok(())
    }
}

/// Build the ffmpeg argument list for a single encode.
///
/// `-n` makes ffmpeg refuse to overwrite an existing output and `-nostdin`
/// keeps it from waiting on the terminal.
pub fn ffmpeg_args(input: &Path, output: &Path, settings: &EncodeSettings) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-hide_banner", "-nostdin", "-n", "-i"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(input.as_os_str().to_owned());
    args.push("-c:v".into());
    args.push(settings.video_codec.clone().into());
    args.push("-crf".into());
    args.push(settings.crf.to_string().into());
    args.push(output.as_os_str().to_owned());
    args
}

/// Keep the last few lines of ffmpeg's stderr; the head is stream info noise.
fn stderr_tail(stderr: &str) -> String {
    const MAX_LINES: usize = 10;

    let lines: Vec<&str> = stderr.trim_end().lines().collect();
    let start = lines.len().saturating_sub(MAX_LINES);
    lines[start..].join("\n")
}
