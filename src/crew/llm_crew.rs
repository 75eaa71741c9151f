//! Production crew runtime over the genai client.
//!
//! Each task becomes one chat request: the role's system prompt plus a user
//! message carrying the task description and expected-output line. Tasks run
//! sequentially in the order given; the response is streamed with captured
//! content, and chunks are echoed to stdout when `verbose` is set so the
//! user can watch the "team" work.
//!
//! Construction is where the credential check lives: the provider key must
//! be present in the environment before any request is attempted, and its
//! absence is a typed [`ConfigError::MissingCredentials`] the caller decides
//! what to do with.

use std::io::Write;

use async_trait::async_trait;
use futures::StreamExt;
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest, ChatStreamEvent};

use super::runtime::CrewRuntime;
use super::types::{CrewOutput, TaskOutput, TaskSpec};
use crate::config::AppConfig;
use crate::error::{ConfigError, CrewError};

/// Environment variable holding the LLM provider API key.
pub const CREDENTIAL_VAR: &str = "GEMINI_API_KEY";

pub struct LlmCrew {
    client: Client,
    model: String,
    temperature: f64,
    verbose: bool,
}

impl LlmCrew {
    /// Build the runtime from resolved configuration.
    ///
    /// Fails fast with [`ConfigError::MissingCredentials`] if the provider
    /// key is absent; the genai client itself reads the key from the
    /// environment when a request is made.
    pub fn from_env(config: &AppConfig) -> Result<Self, ConfigError> {
        if std::env::var_os(CREDENTIAL_VAR).is_none_or(|v| v.is_empty()) {
            return Err(ConfigError::MissingCredentials {
                var: CREDENTIAL_VAR,
            });
        }

        Ok(Self {
            client: Client::default(),
            model: config.model.clone(),
            temperature: config.temperature,
            verbose: config.verbose,
        })
    }

    /// Run a single task to completion, returning its captured text.
    async fn run_task(&self, task: &TaskSpec) -> Result<TaskOutput, CrewError> {
        let user_message = format!(
            "{}\n\nExpected output: {}",
            task.description, task.expected_output
        );
        let chat_req = ChatRequest::from_system(&task.system_prompt)
            .append_message(ChatMessage::user(&user_message));

        let chat_options = ChatOptions::default()
            .with_temperature(self.temperature)
            .with_capture_content(true);

        let stream_res = self
            .client
            .exec_chat_stream(&self.model, chat_req, Some(&chat_options))
            .await
            .map_err(|e| CrewError::Llm(format!("chat request for {} failed: {e}", task.role.key())))?;

        let mut stream = stream_res.stream;
        let mut captured: Option<String> = None;

        while let Some(event) = stream.next().await {
            match event {
                Ok(ChatStreamEvent::Chunk(chunk)) => {
                    if self.verbose {
                        print!("{}", chunk.content);
                        std::io::stdout().flush().ok();
                    }
                }
                Ok(ChatStreamEvent::End(end)) => {
                    if let Some(text) = end.captured_first_text() {
                        captured = Some(text.to_string());
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    return Err(CrewError::Llm(format!(
                        "stream error for {}: {e}",
                        task.role.key()
                    )));
                }
            }
        }
        if self.verbose {
            println!();
        }

        let text = captured.ok_or_else(|| {
            CrewError::Llm(format!("model returned no text for {}", task.role.key()))
        })?;

        Ok(TaskOutput {
            role: task.role,
            text,
        })
    }
}

#[async_trait]
impl CrewRuntime for LlmCrew {
    fn name(&self) -> &str {
        "llm"
    }

    async fn kickoff(&self, tasks: &[TaskSpec]) -> Result<CrewOutput, CrewError> {
        let mut outputs = Vec::with_capacity(tasks.len());
        for task in tasks {
            tracing::info!(role = task.role.key(), model = %self.model, "dispatching task");
            if self.verbose {
                println!("\n--- {} ---", task.role.title());
            }
            outputs.push(self.run_task(task).await?);
        }
        tracing::debug!(tasks = outputs.len(), "crew batch complete");
        Ok(CrewOutput::PerTask(outputs))
    }
}
