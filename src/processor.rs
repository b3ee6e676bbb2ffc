//! Directory processor.
//!
//! Walks the top level of a videos directory once, compressing every `.mp4`
//! file into the `compressed/` subdirectory. The first failure aborts the run.

use crate::error::{Result, RunError};
use std::fs;
use std::path::{Component, Path, PathBuf};
use vidcompress_av::{EncodeSettings, Transcoder};
use vidcompress_common::paths::{
    allocate_output_path, classify_entry, EntryClass, COMPRESSED_DIRECTORY_NAME, MP4_SUFFIX,
};

/// Settings for one run, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Plan only: no directory creation, no encoding, no deletion.
    pub dry_run: bool,
    /// Keep source files after a successful encode.
    pub skip_remove: bool,
    /// Directory whose direct children are scanned.
    pub videos_directory: PathBuf,
}

/// Why an entry was not compressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAFile,
    NonMatchingExtension,
}

/// What happened to a single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Skipped(SkipReason),
    /// Dry run: the output path that would have been written.
    Planned { output: PathBuf },
    Compressed {
        output: PathBuf,
        source_removed: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub source: PathBuf,
    pub disposition: Disposition,
}

/// Outcomes of a completed run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: Vec<EntryOutcome>,
}

impl RunSummary {
    /// Output paths that were written or, in a dry run, planned.
    pub fn outputs(&self) -> Vec<&Path> {
        self.entries
            .iter()
            .filter_map(|entry| match &entry.disposition {
                Disposition::Planned { output } | Disposition::Compressed { output, .. } => {
                    Some(output.as_path())
                }
                Disposition::Skipped(_) => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.disposition, Disposition::Skipped(_)))
            .count()
    }
}

/// Compresses the videos of one directory with a [`Transcoder`].
pub struct DirectoryProcessor<T> {
    config: RunConfig,
    transcoder: T,
    settings: EncodeSettings,
}

impl<T: Transcoder> DirectoryProcessor<T> {
    pub fn new(config: RunConfig, transcoder: T) -> Self {
        Self {
            config,
            transcoder,
            settings: EncodeSettings::default(),
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Process every entry of the videos directory.
    ///
    /// Configuration problems are reported before anything on disk changes.
    pub fn run(&self) -> Result<RunSummary> {
        println!(
            "Running with dry_run = {}, directory = {}, skip_remove = {}.",
            self.config.dry_run,
            self.config.videos_directory.display(),
            self.config.skip_remove
        );

        let videos_dir = self.resolve_videos_directory()?;
        let compressed_dir = self.prepare_output_directory(&videos_dir)?;

        let mut summary = RunSummary::default();
        for source in list_entries(&videos_dir)? {
            let disposition = self.process_entry(&source, &compressed_dir)?;
            summary.entries.push(EntryOutcome {
                source,
                disposition,
            });
        }

        tracing::info!(
            "Finished {:?}: {} processed, {} skipped",
            videos_dir,
            summary.entries.len() - summary.skipped(),
            summary.skipped()
        );

        Ok(summary)
    }

    fn resolve_videos_directory(&self) -> Result<PathBuf> {
        let videos_dir = std::path::absolute(&self.config.videos_directory)
            .map(|path| collapse_parent_components(&path))
            .map_err(|e| RunError::filesystem("resolve", &self.config.videos_directory, e))?;

        let exists = videos_dir
            .try_exists()
            .map_err(|e| RunError::filesystem("inspect", &videos_dir, e))?;
        if !exists {
            return Err(RunError::InputDirectoryMissing { path: videos_dir });
        }
        if !videos_dir.is_dir() {
            return Err(RunError::InputNotDirectory { path: videos_dir });
        }

        Ok(videos_dir)
    }

    fn prepare_output_directory(&self, videos_dir: &Path) -> Result<PathBuf> {
        let compressed_dir = videos_dir.join(COMPRESSED_DIRECTORY_NAME);

        let exists = compressed_dir
            .try_exists()
            .map_err(|e| RunError::filesystem("inspect", &compressed_dir, e))?;

        if exists {
            if !compressed_dir.is_dir() {
                return Err(RunError::OutputPathNotDirectory {
                    path: compressed_dir,
                });
            }
        } else if self.config.dry_run {
            tracing::debug!("[DRY RUN] Would create {:?}", compressed_dir);
        } else {
            fs::create_dir(&compressed_dir)
                .map_err(|e| RunError::filesystem("create directory", &compressed_dir, e))?;
            tracing::info!("Created output directory {:?}", compressed_dir);
        }

        Ok(compressed_dir)
    }

    fn process_entry(&self, source: &Path, compressed_dir: &Path) -> Result<Disposition> {
        let base_name = match classify_entry(source, MP4_SUFFIX) {
            EntryClass::NotAFile => {
                println!("Skipping non-file {}", source.display());
                return Ok(Disposition::Skipped(SkipReason::NotAFile));
            }
            EntryClass::NonMatchingExtension => {
                println!("Skipping non-mp4 file {}", source.display());
                return Ok(Disposition::Skipped(SkipReason::NonMatchingExtension));
            }
            EntryClass::Eligible { base_name } => base_name,
        };

        let output = allocate_output_path(compressed_dir, &base_name, MP4_SUFFIX)
            .map_err(|e| RunError::filesystem("allocate an output path in", compressed_dir, e))?;

        println!(
            "Compressing input {} to output {}",
            source.display(),
            output.display()
        );

        if self.config.dry_run {
            return Ok(Disposition::Planned { output });
        }

        self.transcoder
            .transcode(source, &output, &self.settings)
            .map_err(|e| RunError::Transcode {
                input: source.to_path_buf(),
                source: e,
            })?;

        let source_removed = if self.config.skip_remove {
            false
        } else {
            fs::remove_file(source).map_err(|e| RunError::filesystem("remove", source, e))?;
            tracing::debug!("Removed original {:?}", source);
            true
        };

        Ok(Disposition::Compressed {
            output,
            source_removed,
        })
    }
}

/// Remove `..` components lexically, without consulting the filesystem.
///
/// `..` directly under the root stays at the root.
fn collapse_parent_components(path: &Path) -> PathBuf {
    let mut collapsed = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                if matches!(
                    collapsed.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    collapsed.pop();
                }
            }
            Component::CurDir => {}
            other => collapsed.push(other),
        }
    }
    collapsed
}

/// Direct children of `dir`, sorted by file name so runs are reproducible.
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|e| RunError::filesystem("list", dir, e))?;

    let mut entries = read_dir
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| RunError::filesystem("list", dir, e))?;
    entries.sort();

    Ok(entries)
}
