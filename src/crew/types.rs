//! Type definitions for the crew subsystem.
//!
//! These types form the shared vocabulary between the solver, the
//! [`super::runtime::CrewRuntime`] implementations and the CLI/web output
//! layers. All result-bearing types derive [`serde::Serialize`] for the
//! `--json` output mode.

use serde::Serialize;

use crate::team::Role;

/// A single role-scoped unit of work submitted to a crew runtime.
#[derive(Clone, Debug, Serialize)]
pub struct TaskSpec {
    /// The persona this task belongs to.
    pub role: Role,
    /// System prompt establishing the persona.
    pub system_prompt: String,
    /// Task description with the problem text substituted in.
    pub description: String,
    /// One-line description of the expected answer shape.
    pub expected_output: String,
}

/// Output of one completed task.
#[derive(Clone, Debug, Serialize)]
pub struct TaskOutput {
    pub role: Role,
    pub text: String,
}

/// What a crew runtime hands back for one batch.
///
/// A tagged union instead of runtime shape-sniffing: a runtime either merges
/// everything into one answer or reports per-task outputs, and says which.
#[derive(Clone, Debug)]
pub enum CrewOutput {
    /// Single combined answer for the whole batch.
    Combined(String),
    /// One output per submitted task, in submission order.
    PerTask(Vec<TaskOutput>),
}

/// One normalized result entry: a stable label, the originating role (absent
/// for combined answers) and the output text.
#[derive(Clone, Debug, Serialize)]
pub struct SolveEntry {
    pub label: String,
    pub role: Option<Role>,
    pub output: String,
}

/// Normalized per-request result returned to the caller.
///
/// No persistence -- each result exists only for one request/response cycle.
#[derive(Clone, Debug, Serialize)]
pub struct SolveResult {
    /// Entries in task priority order.
    pub entries: Vec<SolveEntry>,
    /// Wall-clock duration of the batch in seconds.
    pub elapsed_secs: f64,
}

impl SolveResult {
    /// Plain-text rendering for the CLI and REPL.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let heading = entry.role.map_or("Result", Role::title);
            out.push_str(&format!("=== {heading} ===\n{}\n\n", entry.output.trim_end()));
        }
        out.push_str(&format!(
            "({} task(s), {:.1}s)",
            self.entries.len(),
            self.elapsed_secs
        ));
        out
    }
}
