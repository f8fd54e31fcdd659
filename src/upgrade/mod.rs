//! Upgrading IDL 1.0 files to IDL 2.0, driven by a loaded [`Model`].
//!
//! The model says *what* has to change (which members had implicit defaults,
//! which string shapes carry a legacy enum, which traits are gone in 2.0);
//! the file text says *where*. An [`Upgrader`] reconciles the two for one
//! file at a time:
//!
//! 1. collect every shape and member declared in the file,
//! 2. visit them bottom-up so that each edit only moves text after the
//!    locations of units still to be visited,
//! 3. apply the per-unit rules to a [`PatchBuffer`],
//! 4. flush the buffer and point the `$version` statement at 2.0.
//!
//! Edits touch only the text that must change. Comments, blank lines, and
//! formatting elsewhere are kept.

mod batch;
mod boundary;
mod error;
mod lowering;
mod notice;
mod options;
mod rules;
pub mod version;

#[cfg(test)]
mod tests;

pub use batch::{BatchReport, BatchSummary, FileReport, resolve_model_files, upgrade_files};
pub use boundary::TraitBoundaryLocator;
pub use error::{LoweringError, UpgradeError};
pub use lowering::{EnumLowering, SerializerRoundTrip};
pub use notice::UnsupportedLegacyForm;
pub use options::UpgradeOptions;
pub use rules::UpgradeUnit;

use std::path::Path;

use crate::model::Model;
use crate::text::{LineEnding, PatchBuffer};

/// Result of upgrading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeOutcome {
    /// The upgraded text.
    pub text: String,
    /// Legacy constructs left as written.
    pub notices: Vec<UnsupportedLegacyForm>,
}

/// Upgrades the files of one model.
///
/// The model is only read, so one upgrader can serve any number of files,
/// including from several threads at once.
#[derive(Debug, Clone)]
pub struct Upgrader<'m, L = SerializerRoundTrip> {
    model: &'m Model,
    options: UpgradeOptions,
    lowering: L,
}

impl<'m> Upgrader<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self::with_options(model, UpgradeOptions::default())
    }

    pub fn with_options(model: &'m Model, options: UpgradeOptions) -> Self {
        let lowering = SerializerRoundTrip::new(options.indent(1));
        Self {
            model,
            options,
            lowering,
        }
    }
}

impl<'m, L: EnumLowering> Upgrader<'m, L> {
    /// Replace how legacy enums are turned into native enum text.
    pub fn with_lowering<M: EnumLowering>(self, lowering: M) -> Upgrader<'m, M> {
        Upgrader {
            model: self.model,
            options: self.options,
            lowering,
        }
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    pub fn options(&self) -> &UpgradeOptions {
        &self.options
    }

    /// Upgrade `text`, the content of `file` as the model knows it.
    ///
    /// `file` must match the file name recorded in the model's source
    /// locations. On error no output is produced.
    pub fn upgrade_source(&self, file: &str, text: &str) -> Result<UpgradeOutcome, UpgradeError> {
        if self.options.skip_upgraded && version::is_upgraded(text) {
            tracing::debug!(file, "already upgraded, skipping");
            return Ok(UpgradeOutcome {
                text: text.to_string(),
                notices: Vec::new(),
            });
        }

        let line_ending = self
            .options
            .line_ending
            .unwrap_or_else(|| LineEnding::detect(text));
        let mut buffer = PatchBuffer::with_line_ending(text, line_ending);
        let mut notices = Vec::new();

        let units = UpgradeUnit::collect(self.model, file);
        tracing::debug!(file, units = units.len(), "upgrading");

        let mut cx = rules::RuleContext {
            model: self.model,
            file,
            lowering: &self.lowering,
            notices: &mut notices,
        };
        for unit in units {
            rules::apply(unit, &mut buffer, &mut cx)?;
        }

        let mut upgraded = version::rewrite_version(&buffer.flush(), line_ending);
        if self.options.line_ending.is_some() {
            upgraded = normalize_line_endings(&upgraded, line_ending);
        }
        Ok(UpgradeOutcome {
            text: upgraded,
            notices,
        })
    }

    /// Read `path` and upgrade it.
    ///
    /// The model's source locations must name the file exactly as `path`
    /// is spelled.
    pub fn upgrade_file(&self, path: &Path) -> Result<UpgradeOutcome, UpgradeError> {
        let text = std::fs::read_to_string(path).map_err(|e| UpgradeError::io(path, e))?;
        self.upgrade_source(&path.to_string_lossy(), &text)
    }
}

/// Upgrade the file at `path` with default options.
pub fn upgrade(model: &Model, path: impl AsRef<Path>) -> Result<String, UpgradeError> {
    Upgrader::new(model)
        .upgrade_file(path.as_ref())
        .map(|outcome| outcome.text)
}

fn normalize_line_endings(text: &str, line_ending: LineEnding) -> String {
    let ending = line_ending.as_str();
    text.split_inclusive('\n')
        .map(|line| match line.strip_suffix('\n') {
            Some(content) => {
                let content = content.strip_suffix('\r').unwrap_or(content);
                format!("{content}{ending}")
            }
            None => line.to_string(),
        })
        .collect()
}
