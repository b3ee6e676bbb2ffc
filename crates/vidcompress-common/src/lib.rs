//! Vidcompress-Common: shared constants and path utilities.
//!
//! - **Entry classification**: decide whether a directory entry is a video to compress
//! - **Output allocation**: pick an output path that does not collide with existing files
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use vidcompress_common::paths::{allocate_output_path, MP4_SUFFIX};
//!
//! let out = allocate_output_path(Path::new("/videos/compressed"), "clip", MP4_SUFFIX)?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod paths;

pub use paths::{
    allocate_output_path, classify_entry, EntryClass, COMPRESSED_DIRECTORY_NAME, MP4_SUFFIX,
};
