//! Crew orchestration: task types, the runtime seam and the genai-backed
//! production runtime.

pub mod llm_crew;
pub mod runtime;
pub mod types;

pub use llm_crew::LlmCrew;
pub use runtime::CrewRuntime;
pub use types::{CrewOutput, SolveEntry, SolveResult, TaskOutput, TaskSpec};
