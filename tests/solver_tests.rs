use std::sync::Mutex;

use async_trait::async_trait;

use teamsim::crew::{CrewOutput, CrewRuntime, SolveResult, TaskOutput, TaskSpec};
use teamsim::error::CrewError;
use teamsim::solver::{self, ProblemRequest};
use teamsim::team::{Role, RoleSelection, router};

// ─── Fakes ────────────────────────────────────────────────────────────

/// Records every submitted batch and answers one canned line per task.
struct EchoCrew {
    batches: Mutex<Vec<Vec<TaskSpec>>>,
}

impl EchoCrew {
    fn new() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
        }
    }

    fn batch_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    fn last_batch(&self) -> Vec<TaskSpec> {
        self.batches.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl CrewRuntime for EchoCrew {
    fn name(&self) -> &str {
        "echo"
    }

    async fn kickoff(&self, tasks: &[TaskSpec]) -> Result<CrewOutput, CrewError> {
        self.batches.lock().unwrap().push(tasks.to_vec());
        Ok(CrewOutput::PerTask(
            tasks
                .iter()
                .map(|t| TaskOutput {
                    role: t.role,
                    text: format!("{} answer", t.role.key()),
                })
                .collect(),
        ))
    }
}

/// Always merges the batch into one combined answer.
struct CombinedCrew;

#[async_trait]
impl CrewRuntime for CombinedCrew {
    fn name(&self) -> &str {
        "combined"
    }

    async fn kickoff(&self, _tasks: &[TaskSpec]) -> Result<CrewOutput, CrewError> {
        Ok(CrewOutput::Combined("one merged answer".to_string()))
    }
}

/// Fails the whole batch, like a provider/network error would.
struct FailingCrew;

#[async_trait]
impl CrewRuntime for FailingCrew {
    fn name(&self) -> &str {
        "failing"
    }

    async fn kickoff(&self, _tasks: &[TaskSpec]) -> Result<CrewOutput, CrewError> {
        Err(CrewError::Llm("connection reset by provider".to_string()))
    }
}

fn request(description: &str, roles: RoleSelection) -> ProblemRequest {
    ProblemRequest {
        description: description.to_string(),
        roles,
    }
}

// ============================================================
// End-to-end: --problem "disk full on server" --agents both
// ============================================================

#[tokio::test]
async fn both_selection_yields_one_entry_per_role() {
    let crew = EchoCrew::new();
    let roles = router::resolve("both", &RoleSelection::from([Role::DEFAULT]));

    let result: SolveResult = solver::solve(&crew, &request("disk full on server", roles))
        .await
        .unwrap();

    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.entries[0].label, "it_specialist");
    assert_eq!(result.entries[0].role, Some(Role::ItSpecialist));
    assert_eq!(result.entries[1].label, "coder");
    assert_eq!(result.entries[1].role, Some(Role::Coder));
    for entry in &result.entries {
        assert!(!entry.output.is_empty());
    }
}

#[tokio::test]
async fn task_descriptions_reach_the_runtime_verbatim() {
    let crew = EchoCrew::new();
    let roles = RoleSelection::from([Role::BusinessAnalyst, Role::Tester]);

    solver::solve(&crew, &request("checkout page rejects valid cards", roles))
        .await
        .unwrap();

    let batch = crew.last_batch();
    assert_eq!(batch.len(), 2);
    for task in &batch {
        assert!(task.description.contains("checkout page rejects valid cards"));
        assert!(!task.system_prompt.is_empty());
        assert!(!task.expected_output.is_empty());
    }
    // Priority order: analyst first, tester last.
    assert_eq!(batch[0].role, Role::BusinessAnalyst);
    assert_eq!(batch[1].role, Role::Tester);
}

// ============================================================
// Empty selection is a reported error, not a silent no-op
// ============================================================

#[tokio::test]
async fn empty_selection_errors_without_invoking_the_runtime() {
    let crew = EchoCrew::new();

    let err = solver::solve(&crew, &request("anything", RoleSelection::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, CrewError::NoAgentsSelected));
    assert_eq!(crew.batch_count(), 0, "runtime must not be invoked");
}

// ============================================================
// Output-shape normalization
// ============================================================

#[tokio::test]
async fn combined_output_normalizes_to_a_single_result_entry() {
    let roles = RoleSelection::from([Role::ItSpecialist, Role::Coder]);

    let result = solver::solve(&CombinedCrew, &request("vpn drops hourly", roles))
        .await
        .unwrap();

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].label, "result");
    assert_eq!(result.entries[0].role, None);
    assert_eq!(result.entries[0].output, "one merged answer");
}

// ============================================================
// Batch failures propagate unchanged
// ============================================================

#[tokio::test]
async fn runtime_failure_propagates_to_the_caller() {
    let roles = RoleSelection::from([Role::Developer]);

    let err = solver::solve(&FailingCrew, &request("build is red", roles))
        .await
        .unwrap_err();

    match err {
        CrewError::Llm(message) => assert!(message.contains("connection reset")),
        other => panic!("expected an LLM error, got: {other}"),
    }
}
