//! Path utilities for classifying directory entries and allocating output paths.
//!
//! These are used by the directory processor to decide which files get
//! compressed and where each compressed copy is written.

use std::io;
use std::path::{Path, PathBuf};

/// Suffix a file name must end with to be compressed.
pub const MP4_SUFFIX: &str = ".mp4";

/// Name of the output subdirectory created inside the videos directory.
pub const COMPRESSED_DIRECTORY_NAME: &str = "compressed";

/// Classification of a single entry of the videos directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryClass {
    /// Directory, special file, or anything else that is not a regular file.
    NotAFile,
    /// Regular file whose name does not end with the matching suffix.
    NonMatchingExtension,
    /// Regular file that should be compressed.
    Eligible {
        /// File name with the matching suffix stripped.
        base_name: String,
    },
}

/// Classify a directory entry.
///
/// `Path::is_file` follows symlinks, so a symlink to a regular file is treated
/// like the file itself and a symlink to a directory is not a file.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vidcompress_common::paths::{classify_entry, EntryClass};
///
/// let class = classify_entry(Path::new("/videos/holiday.mp4"), ".mp4");
/// assert_eq!(class, EntryClass::Eligible { base_name: "holiday".to_string() });
/// ```
pub fn classify_entry(path: &Path, suffix: &str) -> EntryClass {
    if !path.is_file() {
        return EntryClass::NotAFile;
    }

    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => match strip_matching_suffix(name, suffix) {
            Some(base_name) => EntryClass::Eligible {
                base_name: base_name.to_string(),
            },
            None => EntryClass::NonMatchingExtension,
        },
        // Names that are not valid UTF-8 can never end with the suffix.
        None => EntryClass::NonMatchingExtension,
    }
}

/// Strip `suffix` from the end of `file_name`.
///
/// Matching is case-sensitive and exact; only the suffix itself is removed.
///
/// # Examples
///
/// ```
/// use vidcompress_common::paths::strip_matching_suffix;
///
/// assert_eq!(strip_matching_suffix("clip.mp4", ".mp4"), Some("clip"));
/// assert_eq!(strip_matching_suffix("clip.tar.mp4", ".mp4"), Some("clip.tar"));
/// assert_eq!(strip_matching_suffix("clip.MP4", ".mp4"), None);
/// ```
pub fn strip_matching_suffix<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    file_name.strip_suffix(suffix)
}

/// Return a path inside `directory` that does not exist yet.
///
/// The first candidate is `directory/{base_name}{suffix}`. While the candidate
/// exists, `" (N)"` is appended to `base_name` with N counting up from 1.
/// Disambiguation markers already present in `base_name` are left alone.
///
/// No locking is performed; the result is only guaranteed not to exist at the
/// moment it is returned.
///
/// # Errors
///
/// Returns the underlying I/O error if an existence check fails.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vidcompress_common::paths::allocate_output_path;
///
/// let out = allocate_output_path(Path::new("/videos/compressed"), "holiday", ".mp4")?;
/// println!("writing to {}", out.display());
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn allocate_output_path(directory: &Path, base_name: &str, suffix: &str) -> io::Result<PathBuf> {
    let mut candidate = directory.join(format!("{base_name}{suffix}"));
    let mut counter: u64 = 0;

    while candidate.try_exists()? {
        counter += 1;
        candidate = directory.join(format!("{base_name} ({counter}){suffix}"));
    }

    Ok(candidate)
}
