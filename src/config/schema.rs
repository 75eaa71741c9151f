use serde::Deserialize;

use crate::team::{Role, RoleSelection, router};

/// The TOML file structure for teamsim.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub general: Option<GeneralConfig>,
    pub crew: Option<CrewConfig>,
    pub web: Option<WebConfig>,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    pub model: Option<String>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CrewConfig {
    /// Selection token applied when `--agents` is absent, and the fallback
    /// for unrecognized tokens.
    pub default_agents: Option<String>,
    /// Stream model text to stdout while tasks run.
    pub verbose: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct WebConfig {
    pub bind: Option<String>,
}

impl ConfigFile {
    pub fn to_partial(self) -> PartialConfig {
        let general = self.general;
        let crew = self.crew;
        let web = self.web;
        PartialConfig {
            model: general.as_ref().and_then(|g| g.model.clone()),
            temperature: general.as_ref().and_then(|g| g.temperature),
            default_agents: crew.as_ref().and_then(|c| c.default_agents.clone()),
            verbose: crew.as_ref().and_then(|c| c.verbose),
            bind: web.as_ref().and_then(|w| w.bind.clone()),
        }
    }
}

/// Fully-resolved runtime configuration. All fields have values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: String,
    pub temperature: f64,
    pub default_agents: String,
    pub verbose: bool,
    pub bind: String,
}

impl AppConfig {
    /// Role selection used when no token is given and as the fallback for
    /// unrecognized tokens. A misconfigured `default_agents` degrades to the
    /// base role rather than failing.
    pub fn default_selection(&self) -> RoleSelection {
        router::lookup(&self.default_agents)
            .unwrap_or_else(|| RoleSelection::from([Role::DEFAULT]))
    }
}

/// Partial config used during merge. All fields are Option so that
/// missing fields don't override lower-priority values.
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub default_agents: Option<String>,
    pub verbose: Option<bool>,
    pub bind: Option<String>,
}
