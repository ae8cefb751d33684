//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Submission;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Identifies a submission in reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionInfo {
    /// Course id
    pub course_id: String,
    /// Qualified task name
    pub task: String,
    /// Student display name
    pub student: String,
    /// Student account
    pub account: String,
}

impl From<&Submission> for SubmissionInfo {
    fn from(submission: &Submission) -> Self {
        Self {
            course_id: submission.task.course_id.clone(),
            task: submission.task.name.to_string(),
            student: submission.student.name.clone(),
            account: submission.student.account.clone(),
        }
    }
}

impl std::fmt::Display for SubmissionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}/{} by {}", self.course_id, self.task, self.student)
    }
}

/// What happened to one submission during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum SyncOutcome {
    /// Checked out
    Fetched,
    /// Already at the expected revision
    UpToDate,
    /// Nothing was submitted
    NoSubmission,
    /// No path, no link, bulk fetching disabled
    Unresolved,
    /// Covered by an earlier bulk fetch of the same account
    AlreadyFetched,
    /// Directory creation or checkout failed
    Failed(String),
}

impl SyncOutcome {
    /// Short label for listings
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fetched => "fetched",
            Self::UpToDate => "up to date",
            Self::NoSubmission => "no submission",
            Self::Unresolved => "unresolved",
            Self::AlreadyFetched => "already fetched",
            Self::Failed(_) => "failed",
        }
    }
}

/// One line of a synchronization report
#[derive(Debug, Clone, Serialize)]
pub struct SyncEntry {
    /// The submission
    #[serde(flatten)]
    pub submission: SubmissionInfo,
    /// What happened
    #[serde(flatten)]
    pub outcome: SyncOutcome,
    /// Checkout directory, when one was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// Result of a synchronization run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// Per-submission outcomes, in processing order
    pub entries: Vec<SyncEntry>,
}

impl SyncReport {
    /// Number of entries with the given outcome label
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.entries.iter().filter(|e| e.outcome.label() == label).count()
    }

    /// Number of failed submissions
    #[must_use]
    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, SyncOutcome::Failed(_)))
            .count()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.entries.is_empty() {
            println!("No submissions selected.");
            return;
        }

        for entry in &self.entries {
            let label = entry.outcome.label();
            let label = match &entry.outcome {
                SyncOutcome::Fetched => label.green(),
                SyncOutcome::Failed(_) => label.red(),
                SyncOutcome::Unresolved => label.yellow(),
                _ => label.dimmed(),
            };
            match &entry.outcome {
                SyncOutcome::Failed(reason) => println!("  [{label}] {} ({reason})", entry.submission),
                _ => println!("  [{label}] {}", entry.submission),
            }
        }

        println!(
            "\n{} fetched, {} up to date, {} failed",
            self.count("fetched"),
            self.count("up to date"),
            self.failures()
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// One line of a dry-run report
#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    /// The submission
    #[serde(flatten)]
    pub submission: SubmissionInfo,
    /// `needs update`, `up to date`, `unknown`, ...
    pub status: String,
    /// Why the status could not be determined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Checkout directory that would be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// Result of a dry run: what a synchronization would change
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusReport {
    /// Submissions that would be fetched, or whose state is unknown
    pub entries: Vec<StatusEntry>,
}

impl StatusReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.entries.is_empty() {
            println!("Everything is up to date.");
            return;
        }

        for entry in &self.entries {
            match &entry.reason {
                Some(reason) => {
                    println!("  [{}] {} ({reason})", entry.status.red(), entry.submission);
                },
                None => println!("  [{}] {}", entry.status.yellow(), entry.submission),
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Information about a student
#[derive(Debug, Clone, Serialize)]
pub struct StudentInfo {
    /// Display name
    pub name: String,
    /// Account
    pub account: String,
}

/// Result of a student list operation
#[derive(Debug, Clone, Serialize)]
pub struct StudentListResult {
    /// Students, ordered by name
    pub students: Vec<StudentInfo>,
}

impl StudentListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for s in &self.students {
                    println!("{} ({})", s.name, s.account);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of a task list operation
#[derive(Debug, Clone, Serialize)]
pub struct TaskListResult {
    /// Qualified task names, ordered by task id
    pub tasks: Vec<String>,
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for t in &self.tasks {
                    println!("{t}");
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// A key → value association (link or relocation)
#[derive(Debug, Clone, Serialize)]
pub struct MappingInfo {
    /// Review id or reported account
    pub from: String,
    /// Path or effective account
    pub to: String,
}

/// Result of a link or relocation list operation
#[derive(Debug, Clone, Serialize)]
pub struct MappingListResult {
    /// What is listed: `links` or `relocations`
    pub kind: String,
    /// Entries, ordered by key
    pub entries: Vec<MappingInfo>,
}

impl MappingListResult {
    /// Build from `(key, value)` pairs
    #[must_use]
    pub fn new(kind: &str, pairs: Vec<(String, String)>) -> Self {
        Self {
            kind: kind.to_string(),
            entries: pairs.into_iter().map(|(from, to)| MappingInfo { from, to }).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.entries.is_empty() {
                    println!("No {} defined.", self.kind);
                    return;
                }
                for e in &self.entries {
                    println!("{} -> {}", e.from, e.to);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
