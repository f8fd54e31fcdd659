//! Upgrading many files at once.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tokio_util::sync::CancellationToken;

use super::{EnumLowering, UpgradeError, UpgradeOptions, UpgradeOutcome, Upgrader};
use crate::base::constants::{ARCHIVE_SOURCE_PREFIX, IDL_EXTENSION};
use crate::model::{Model, prelude};

/// Outcome of one file in a batch.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<UpgradeOutcome, UpgradeError>,
}

/// Per-file outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = (&Path, &UpgradeOutcome)> {
        self.files
            .iter()
            .filter_map(|f| f.result.as_ref().ok().map(|o| (f.path.as_path(), o)))
    }

    pub fn failed(&self) -> impl Iterator<Item = (&Path, &UpgradeError)> {
        self.files
            .iter()
            .filter_map(|f| f.result.as_ref().err().map(|e| (f.path.as_path(), e)))
    }

    /// Whether every file was upgraded.
    pub fn is_success(&self) -> bool {
        self.files.iter().all(|f| f.result.is_ok())
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for file in &self.files {
            match &file.result {
                Ok(outcome) => {
                    summary.upgraded.push(file.path.clone());
                    summary.notices.extend(outcome.notices.iter().map(ToString::to_string));
                }
                Err(UpgradeError::Cancelled { .. }) => summary.cancelled.push(file.path.clone()),
                Err(error) => summary.failed.push((file.path.clone(), error.to_string())),
            }
        }
        summary
    }
}

/// Serializable digest of a [`BatchReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    pub upgraded: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    pub cancelled: Vec<PathBuf>,
    pub notices: Vec<String>,
}

/// Upgrade `files` of `model` in parallel.
///
/// Each file succeeds or fails on its own. Once `cancel` fires, files not
/// yet started are reported as [`UpgradeError::Cancelled`]; files already
/// running finish. Nothing is written back to disk.
pub fn upgrade_files(
    model: &Model,
    files: &[PathBuf],
    options: UpgradeOptions,
    cancel: &CancellationToken,
) -> BatchReport {
    Upgrader::with_options(model, options).upgrade_files(files, cancel)
}

impl<L: EnumLowering + Sync> Upgrader<'_, L> {
    /// Upgrade `files` in parallel with this upgrader's options and lowering.
    pub fn upgrade_files(&self, files: &[PathBuf], cancel: &CancellationToken) -> BatchReport {
        tracing::debug!(files = files.len(), "batch upgrade");
        let files = files
            .par_iter()
            .map(|path| {
                let result = if cancel.is_cancelled() {
                    Err(UpgradeError::Cancelled { path: path.clone() })
                } else {
                    self.upgrade_file(path)
                };
                if let Err(error) = &result {
                    tracing::debug!(path = %path.display(), %error, "file not upgraded");
                }
                FileReport {
                    path: path.clone(),
                    result,
                }
            })
            .collect();
        BatchReport { files }
    }
}

/// The IDL files of `model` that lie under one of `inputs`, sorted.
///
/// Prelude shapes and shapes loaded from archives are ignored. Files that
/// are not `.smithy` files (JSON models) cannot be upgraded and are skipped.
pub fn resolve_model_files(model: &Model, inputs: &[PathBuf]) -> Vec<PathBuf> {
    let sources: FxHashSet<&str> = model
        .shapes()
        .filter(|shape| !prelude::is_prelude(shape.id()))
        .map(|shape| shape.location())
        .filter(|location| !location.is_none())
        .map(|location| location.file())
        .filter(|file| !file.starts_with(ARCHIVE_SOURCE_PREFIX))
        .collect();

    let mut files: Vec<PathBuf> = sources
        .into_iter()
        .map(PathBuf::from)
        .filter(|path| {
            if !inputs.iter().any(|input| path.starts_with(input)) {
                tracing::trace!(path = %path.display(), "skipping non-target model file");
                return false;
            }
            if path.extension().is_none_or(|ext| ext != IDL_EXTENSION) {
                tracing::info!(path = %path.display(), "skipping non-IDL model file");
                return false;
            }
            true
        })
        .collect();
    files.sort();
    files
}
