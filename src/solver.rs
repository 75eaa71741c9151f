//! Problem solver: turns a request into a crew batch and normalizes the
//! output.
//!
//! One synchronous call out to the crew runtime per request; no state
//! machine, no concurrency. An empty selection is the one recoverable error
//! produced here -- everything else is whatever the runtime raised.

use std::time::Instant;

use crate::crew::{CrewOutput, CrewRuntime, SolveEntry, SolveResult, TaskSpec};
use crate::error::CrewError;
use crate::team::RoleSelection;

/// A free-text problem description plus the roles activated for it.
#[derive(Clone, Debug)]
pub struct ProblemRequest {
    pub description: String,
    pub roles: RoleSelection,
}

/// Build one task per selected role, in fixed priority order.
///
/// The order comes from [`RoleSelection`] iteration, not from however the
/// caller assembled the set.
pub fn build_tasks(request: &ProblemRequest) -> Vec<TaskSpec> {
    request
        .roles
        .iter()
        .map(|&role| TaskSpec {
            role,
            system_prompt: role.system_prompt(),
            description: role.task_description(&request.description),
            expected_output: role.expected_output().to_string(),
        })
        .collect()
}

/// Solve a problem with the given crew runtime.
///
/// Returns [`CrewError::NoAgentsSelected`] without invoking the runtime when
/// the selection is empty. Otherwise submits the full batch, blocks until it
/// completes and normalizes the output shape into a [`SolveResult`].
pub async fn solve(
    runtime: &dyn CrewRuntime,
    request: &ProblemRequest,
) -> Result<SolveResult, CrewError> {
    if request.roles.is_empty() {
        return Err(CrewError::NoAgentsSelected);
    }

    let tasks = build_tasks(request);
    tracing::info!(
        tasks = tasks.len(),
        runtime = runtime.name(),
        "submitting crew batch"
    );

    let start = Instant::now();
    let output = runtime.kickoff(&tasks).await?;
    Ok(normalize(output, start.elapsed().as_secs_f64()))
}

/// Normalize a runtime output shape into the uniform result structure:
/// a combined answer becomes a single entry under the `result` label, a
/// per-task report becomes one entry per task with role and text preserved.
fn normalize(output: CrewOutput, elapsed_secs: f64) -> SolveResult {
    let entries = match output {
        CrewOutput::Combined(text) => vec![SolveEntry {
            label: "result".to_string(),
            role: None,
            output: text,
        }],
        CrewOutput::PerTask(outputs) => outputs
            .into_iter()
            .map(|task| SolveEntry {
                label: task.role.key().to_string(),
                role: Some(task.role),
                output: task.text,
            })
            .collect(),
    };

    SolveResult {
        entries,
        elapsed_secs,
    }
}
