//! Interactive read-eval-print loop.
//!
//! One request is processed fully before the next line is read. Selection
//! state lives in an explicit [`ReplSession`] value that each iteration
//! consumes and returns -- there is no process-wide mutable variable. A role
//! token switches the selection for exactly the next solved problem; after a
//! solve the selection reverts to the configured default.

use std::io::Write;

use tokio::io::AsyncBufReadExt;

use crate::config::AppConfig;
use crate::crew::CrewRuntime;
use crate::error::CrewError;
use crate::solver::{self, ProblemRequest};
use crate::team::{RoleSelection, router};

/// Per-loop selection state.
#[derive(Clone, Debug)]
pub struct ReplSession {
    selection: RoleSelection,
    default: RoleSelection,
}

/// What the caller should do with one input line.
#[derive(Debug)]
pub enum ReplAction {
    /// Print the command list; selection untouched.
    Help,
    /// Leave the loop.
    Exit,
    /// The selection changed for the next problem.
    Switched,
    /// Solve this request, then the session has already reverted to default.
    Solve(ProblemRequest),
    /// Blank line; nothing to do.
    Ignore,
}

impl ReplSession {
    pub fn new(default: RoleSelection) -> Self {
        Self {
            selection: default.clone(),
            default,
        }
    }

    pub fn selection(&self) -> &RoleSelection {
        &self.selection
    }

    /// Consume one input line, returning the updated session and the action
    /// to take. `help` and blank lines leave the selection as it is; a
    /// recognized role token replaces it; anything else is a problem solved
    /// with the current selection, after which the default is restored.
    pub fn apply(mut self, line: &str) -> (Self, ReplAction) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (self, ReplAction::Ignore);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "exit" => (self, ReplAction::Exit),
            "help" => (self, ReplAction::Help),
            _ => {
                if let Some(selection) = router::lookup(trimmed) {
                    self.selection = selection;
                    (self, ReplAction::Switched)
                } else {
                    let request = ProblemRequest {
                        description: trimmed.to_string(),
                        roles: self.selection.clone(),
                    };
                    self.selection = self.default.clone();
                    (self, ReplAction::Solve(request))
                }
            }
        }
    }
}

/// Run the interactive loop until `exit` or end of input.
pub async fn run(config: &AppConfig, runtime: &dyn CrewRuntime) -> anyhow::Result<()> {
    println!("===== IT Project Simulation Agent =====");
    println!("Describe your technical problem and the selected roles will work it.");
    println!("Type 'help' for commands, 'exit' to quit.");

    let mut session = ReplSession::new(config.default_selection());
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    prompt();
    while let Some(line) = lines.next_line().await? {
        let (next, action) = session.apply(&line);
        session = next;

        match action {
            ReplAction::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
            ReplAction::Help => print_help(),
            ReplAction::Switched => {
                println!(
                    "Selected {} for the next problem.",
                    describe_selection(session.selection())
                );
            }
            ReplAction::Solve(request) => {
                println!("\nSimulating project... (this may take a moment)");
                match solver::solve(runtime, &request).await {
                    Ok(result) => {
                        println!("\nProject Output:\n{}", result.render_text());
                    }
                    Err(CrewError::NoAgentsSelected) => {
                        println!("Error: no valid agents were selected for this task.");
                    }
                    Err(e) => {
                        tracing::error!("solve failed: {e}");
                        println!("Error: {e}");
                    }
                }
            }
            ReplAction::Ignore => {}
        }
        prompt();
    }

    Ok(())
}

fn prompt() {
    print!("\nYou: ");
    std::io::stdout().flush().ok();
}

fn print_help() {
    println!("\nCommands:");
    println!("  help     - Show this help message");
    println!("  exit     - Exit the chat");
    println!("  ba       - Use the Business Analyst");
    println!("  it       - Use the IT Specialist");
    println!("  designer - Use the UI/UX Designer");
    println!("  dev      - Use the Software Developer");
    println!("  coder    - Use the Coder");
    println!("  test     - Use the QA Tester");
    println!("  both     - Use IT Specialist and Coder");
    println!("  all      - Use every role");
    println!("Anything else is treated as a problem for the current selection.");
}

fn describe_selection(selection: &RoleSelection) -> String {
    selection
        .iter()
        .map(|role| role.title())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Role;

    fn session() -> ReplSession {
        ReplSession::new(RoleSelection::from([Role::BusinessAnalyst]))
    }

    #[test]
    fn help_leaves_selection_untouched() {
        let (session, action) = session().apply("help");
        assert!(matches!(action, ReplAction::Help));
        assert_eq!(
            session.selection(),
            &RoleSelection::from([Role::BusinessAnalyst])
        );
    }

    #[test]
    fn token_switches_selection_for_next_problem_only() {
        let (session, action) = session().apply("both");
        assert!(matches!(action, ReplAction::Switched));
        assert_eq!(
            session.selection(),
            &RoleSelection::from([Role::ItSpecialist, Role::Coder])
        );

        // The next problem uses the switched selection...
        let (session, action) = session.apply("server keeps rebooting");
        let ReplAction::Solve(request) = action else {
            panic!("expected a solve action");
        };
        assert_eq!(
            request.roles,
            RoleSelection::from([Role::ItSpecialist, Role::Coder])
        );
        assert_eq!(request.description, "server keeps rebooting");

        // ...and the session reverts to the default afterwards.
        assert_eq!(
            session.selection(),
            &RoleSelection::from([Role::BusinessAnalyst])
        );
    }

    #[test]
    fn exit_and_blank_lines() {
        let (s, action) = session().apply("exit");
        assert!(matches!(action, ReplAction::Exit));
        let (_s, action) = s.apply("   ");
        assert!(matches!(action, ReplAction::Ignore));
    }

    #[test]
    fn commands_are_case_insensitive() {
        let (_s, action) = session().apply("EXIT");
        assert!(matches!(action, ReplAction::Exit));
        let (s, action) = session().apply("Both");
        assert!(matches!(action, ReplAction::Switched));
        assert_eq!(s.selection().len(), 2);
    }
}
