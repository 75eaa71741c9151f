//! The orchestration-runtime seam.
//!
//! The solver only knows this trait. The production implementation is
//! [`super::llm_crew::LlmCrew`]; tests substitute fakes that return canned
//! [`CrewOutput`] shapes without touching the network.

use async_trait::async_trait;

use super::types::{CrewOutput, TaskSpec};
use crate::error::CrewError;

/// A collaborator that runs a batch of role tasks to completion.
///
/// `kickoff` blocks until every task in the batch has completed. There is no
/// per-task timeout, retry or partial-failure salvage: the first failing
/// task aborts the batch and its error propagates to the caller.
#[async_trait]
pub trait CrewRuntime: Send + Sync {
    /// Short runtime name for logs.
    fn name(&self) -> &str;

    /// Run the full batch and report the output shape.
    async fn kickoff(&self, tasks: &[TaskSpec]) -> Result<CrewOutput, CrewError>;
}
