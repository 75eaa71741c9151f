//! Agent role definitions.
//!
//! Each [`Role`] is a fixed persona: a display title, a goal, a backstory and
//! a task-description template the free-text problem is substituted into.
//! Roles are immutable and defined at startup; nothing here talks to the
//! model. The declaration order of the enum is the task-construction
//! priority order (analyst-like roles first, tester-like roles last), and
//! the derived `Ord` carries that order into [`RoleSelection`] iteration.

pub mod router;

use serde::Serialize;
use std::collections::BTreeSet;

/// An ordered set of roles activated for one request.
///
/// `BTreeSet` keeps iteration in `Role` declaration order regardless of the
/// order the caller inserted roles, and deduplicates repeated tokens.
pub type RoleSelection = BTreeSet<Role>;

/// A named persona presented to the language model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    BusinessAnalyst,
    ItSpecialist,
    Designer,
    Developer,
    Coder,
    Tester,
}

impl Role {
    /// Every defined role, in priority order.
    pub const ALL: [Role; 6] = [
        Role::BusinessAnalyst,
        Role::ItSpecialist,
        Role::Designer,
        Role::Developer,
        Role::Coder,
        Role::Tester,
    ];

    /// Role used when nothing else is configured or recognized.
    pub const DEFAULT: Role = Role::BusinessAnalyst;

    /// Stable snake_case identifier, used as the result label and in logs.
    pub fn key(self) -> &'static str {
        match self {
            Role::BusinessAnalyst => "business_analyst",
            Role::ItSpecialist => "it_specialist",
            Role::Designer => "designer",
            Role::Developer => "developer",
            Role::Coder => "coder",
            Role::Tester => "tester",
        }
    }

    /// Human-readable title shown in output headings.
    pub fn title(self) -> &'static str {
        match self {
            Role::BusinessAnalyst => "Business Analyst",
            Role::ItSpecialist => "IT Specialist",
            Role::Designer => "UI/UX Designer",
            Role::Developer => "Software Developer",
            Role::Coder => "Coder",
            Role::Tester => "QA Tester",
        }
    }

    fn goal(self) -> &'static str {
        match self {
            Role::BusinessAnalyst => {
                "Understand requirements and translate them into technical insights"
            }
            Role::ItSpecialist => "Diagnose technical problems and recommend practical fixes",
            Role::Designer => "Design user-friendly and aesthetic interfaces",
            Role::Developer => "Write efficient, maintainable code",
            Role::Coder => "Produce working code or scripts that resolve the problem",
            Role::Tester => "Write test plans and identify bugs",
        }
    }

    fn backstory(self) -> &'static str {
        match self {
            Role::BusinessAnalyst => {
                "Senior business analyst skilled at analyzing user needs and business goals."
            }
            Role::ItSpecialist => {
                "Seasoned IT support engineer who has triaged everything from full disks to \
                 flaky networks."
            }
            Role::Designer => {
                "Expert UI/UX designer with experience in user flows and wireframes."
            }
            Role::Developer => {
                "Developer proficient in multi-language programming and best practices."
            }
            Role::Coder => "Pragmatic programmer who reaches for a short script before a meeting.",
            Role::Tester => "Quality assurance specialist with strong test automation skills.",
        }
    }

    /// One-line summary of what this role is expected to produce, appended to
    /// the task message so the model knows the shape of the answer.
    pub fn expected_output(self) -> &'static str {
        match self {
            Role::BusinessAnalyst => "Requirements analysis and user needs",
            Role::ItSpecialist => "Diagnosis and a step-by-step remediation plan",
            Role::Designer => "UI/UX design plan or wireframes",
            Role::Developer => "Code implementation with explanation",
            Role::Coder => "Working code or a script, with usage notes",
            Role::Tester => "Test plan and bug analysis",
        }
    }

    /// Build the task description for this role by substituting the free-text
    /// problem into the role's fixed template.
    pub fn task_description(self, problem: &str) -> String {
        match self {
            Role::BusinessAnalyst => {
                format!("Analyze and extract requirements for: {problem}")
            }
            Role::ItSpecialist => format!(
                "Diagnose the following technical problem and outline remediation steps: {problem}"
            ),
            Role::Designer => {
                format!("Design a user interface and experience flow for: {problem}")
            }
            Role::Developer => format!("Implement a solution for: {problem}"),
            Role::Coder => format!("Write the code or scripts needed to resolve: {problem}"),
            Role::Tester => {
                format!("Create test cases and identify edge cases and bugs for: {problem}")
            }
        }
    }

    /// Build the system prompt establishing this persona.
    pub fn system_prompt(self) -> String {
        format!(
            "You are a {title} on a simulated IT project team.\n\n\
             ## Goal\n{goal}\n\n\
             ## Backstory\n{backstory}\n\n\
             Answer in your role, concretely and without filler.",
            title = self.title(),
            goal = self.goal(),
            backstory = self.backstory(),
        )
    }
}
