//! Run results and orchestrator states.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::TemplateKind;

/// Orchestrator state.
///
/// ```text
/// Validating ─┬─> EnsuringDirectories ─> Rendering(k) ─> Writing(k) ─┬─> Done
///             │                              ^                       │
///             └─> Failed                     └───── next kind ───────┘
/// ```
///
/// `Failed` is only reachable from `Validating`. A kind whose template cannot
/// be rendered goes straight to the next kind without a `Writing` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationStage {
    Validating,
    EnsuringDirectories,
    Rendering(TemplateKind),
    Writing(TemplateKind),
    Done,
    Failed,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating => f.write_str("validating"),
            Self::EnsuringDirectories => f.write_str("ensuring-directories"),
            Self::Rendering(kind) => write!(f, "rendering({kind})"),
            Self::Writing(kind) => write!(f, "writing({kind})"),
            Self::Done => f.write_str("done"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// A directory or file that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedTarget {
    /// `None` for one of the required directories.
    pub kind: Option<TemplateKind>,
    pub path: PathBuf,
    pub reason: String,
}

/// What a run did, in the order it did it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Project root actually used.
    pub root: PathBuf,
    /// `--path` was unusable and the fallback directory was used.
    pub used_fallback_root: bool,
    pub dry_run: bool,
    pub directories_created: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    /// Dry run only: files that would have been written.
    pub planned: Vec<PathBuf>,
    /// Targets left alone because a file already existed.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FailedTarget>,
    pub stages: Vec<GenerationStage>,
}

impl GenerationReport {
    pub fn new(root: impl AsRef<Path>, used_fallback_root: bool, dry_run: bool) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            used_fallback_root,
            dry_run,
            directories_created: Vec::new(),
            written: Vec::new(),
            planned: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            stages: vec![GenerationStage::Validating],
        }
    }

    /// No skips and no failures.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }

    /// One-line summary, e.g. `4 written, 0 skipped, 0 failed`.
    pub fn summary(&self) -> String {
        if self.dry_run {
            return format!(
                "{} planned, {} skipped, {} failed (dry run)",
                self.planned.len(),
                self.skipped.len(),
                self.failed.len()
            );
        }
        format!(
            "{} written, {} skipped, {} failed",
            self.written.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_starts_in_validating() {
        let report = GenerationReport::new("/work", false, false);
        assert_eq!(report.stages, vec![GenerationStage::Validating]);
        assert!(report.is_clean());
    }

    #[test]
    fn summary_counts() {
        let mut report = GenerationReport::new("/work", false, false);
        report.written.push(PathBuf::from("/work/a"));
        report.skipped.push(PathBuf::from("/work/b"));
        assert_eq!(report.summary(), "1 written, 1 skipped, 0 failed");
        assert!(!report.is_clean());
    }

    #[test]
    fn dry_run_summary_mentions_plan() {
        let mut report = GenerationReport::new("/work", false, true);
        report.planned.push(PathBuf::from("/work/a"));
        assert!(report.summary().starts_with("1 planned"));
    }

    #[test]
    fn stage_display() {
        assert_eq!(
            GenerationStage::Rendering(TemplateKind::ClassTest).to_string(),
            "rendering(Test)"
        );
        assert_eq!(GenerationStage::EnsuringDirectories.to_string(), "ensuring-directories");
    }
}
