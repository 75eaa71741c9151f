use super::schema::{AppConfig, PartialConfig};

impl PartialConfig {
    /// Merge self with a lower-priority fallback.
    /// Self's non-None values take precedence.
    pub fn with_fallback(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            model: self.model.or(fallback.model),
            temperature: self.temperature.or(fallback.temperature),
            default_agents: self.default_agents.or(fallback.default_agents),
            verbose: self.verbose.or(fallback.verbose),
            bind: self.bind.or(fallback.bind),
        }
    }

    /// Convert to AppConfig, filling any remaining gaps with defaults.
    pub fn finalize(self) -> AppConfig {
        AppConfig {
            model: self
                .model
                .unwrap_or_else(|| "gemini-1.5-pro-latest".to_string()),
            temperature: self.temperature.unwrap_or(0.7),
            default_agents: self.default_agents.unwrap_or_else(|| "ba".to_string()),
            verbose: self.verbose.unwrap_or(true),
            bind: self.bind.unwrap_or_else(|| "127.0.0.1:8080".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::{Role, RoleSelection};

    #[test]
    fn finalize_fills_documented_defaults() {
        let config = PartialConfig::default().finalize();

        assert_eq!(config.model, "gemini-1.5-pro-latest");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.default_agents, "ba");
        assert!(config.verbose);
        assert_eq!(config.bind, "127.0.0.1:8080");
    }

    #[test]
    fn with_fallback_prefers_self() {
        let high = PartialConfig {
            model: Some("gemini-2.0-flash".to_string()),
            ..Default::default()
        };
        let low = PartialConfig {
            model: Some("gemini-1.5-pro-latest".to_string()),
            temperature: Some(0.2),
            ..Default::default()
        };

        let merged = high.with_fallback(low);
        assert_eq!(merged.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(merged.temperature, Some(0.2));
    }

    #[test]
    fn default_selection_degrades_for_bad_token() {
        let config = PartialConfig {
            default_agents: Some("no-such-team".to_string()),
            ..Default::default()
        }
        .finalize();

        assert_eq!(
            config.default_selection(),
            RoleSelection::from([Role::DEFAULT])
        );
    }

    #[test]
    fn default_selection_honors_configured_token() {
        let config = PartialConfig {
            default_agents: Some("both".to_string()),
            ..Default::default()
        }
        .finalize();

        assert_eq!(
            config.default_selection(),
            RoleSelection::from([Role::ItSpecialist, Role::Coder])
        );
    }
}
