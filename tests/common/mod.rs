//! Shared helpers for integration tests.
//!
//! Provides fake [`Transcoder`]s so the directory processor can be exercised
//! without a real ffmpeg, plus helpers for building video directories.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use vidcompress::RunConfig;
use vidcompress_av::{EncodeSettings, Error, Result, Transcoder};

/// Copies the input to the output and records every call.
#[derive(Default)]
pub struct FakeTranscoder {
    pub calls: RefCell<Vec<Call>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub input: PathBuf,
    pub output: PathBuf,
    pub settings: EncodeSettings,
}

impl FakeTranscoder {
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transcoder for FakeTranscoder {
    fn transcode(&self, input: &Path, output: &Path, settings: &EncodeSettings) -> Result<()> {
        self.calls.borrow_mut().push(Call {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            settings: settings.clone(),
        });
        fs::copy(input, output)?;
        Ok(())
    }
}

/// Succeeds for the first `succeed` calls, then fails like a crashed ffmpeg.
pub struct FailingTranscoder {
    succeed: usize,
    inner: FakeTranscoder,
}

impl FailingTranscoder {
    pub fn after(succeed: usize) -> Self {
        Self {
            succeed,
            inner: FakeTranscoder::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.inner.call_count()
    }
}

impl Transcoder for FailingTranscoder {
    fn transcode(&self, input: &Path, output: &Path, settings: &EncodeSettings) -> Result<()> {
        if self.inner.call_count() >= self.succeed {
            self.inner.calls.borrow_mut().push(Call {
                input: input.to_path_buf(),
                output: output.to_path_buf(),
                settings: settings.clone(),
            });
            return Err(Error::tool_failed("ffmpeg", "exit status: 1"));
        }
        self.inner.transcode(input, output, settings)
    }
}

/// Copies the input, then deletes it, so a later removal of the source fails.
#[derive(Default)]
pub struct VanishingSourceTranscoder {
    inner: FakeTranscoder,
}

impl VanishingSourceTranscoder {
    pub fn call_count(&self) -> usize {
        self.inner.call_count()
    }
}

impl Transcoder for VanishingSourceTranscoder {
    fn transcode(&self, input: &Path, output: &Path, settings: &EncodeSettings) -> Result<()> {
        self.inner.transcode(input, output, settings)?;
        fs::remove_file(input)?;
        Ok(())
    }
}

pub fn run_config(dir: &Path, dry_run: bool, skip_remove: bool) -> RunConfig {
    RunConfig {
        dry_run,
        skip_remove,
        videos_directory: dir.to_path_buf(),
    }
}

/// Create files (with their name as content) and subdirectories (trailing `/`).
pub fn populate(dir: &Path, entries: &[&str]) {
    for entry in entries {
        match entry.strip_suffix('/') {
            Some(name) => fs::create_dir(dir.join(name)).unwrap(),
            None => fs::write(dir.join(entry), entry.as_bytes()).unwrap(),
        }
    }
}

/// Every path below `dir`, relative to it, with file contents.
pub fn snapshot(dir: &Path) -> BTreeSet<(PathBuf, Option<Vec<u8>>)> {
    let mut out = BTreeSet::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            let relative = path.strip_prefix(dir).unwrap().to_path_buf();
            if path.is_dir() {
                out.insert((relative, None));
                stack.push(path);
            } else {
                out.insert((relative, Some(fs::read(&path).unwrap())));
            }
        }
    }
    out
}
