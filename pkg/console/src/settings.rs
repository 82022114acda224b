use pkg_constants::console::{DEFAULT_CREATED_BY, DEFAULT_PROJECTS};
use pkg_types::cluster::ReferenceCapacity;
use pkg_types::config::ConsoleConfigFile;

/// Per-session settings: who is signed in, which projects exist, and the
/// cluster-wide totals shown next to the reservation inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleSettings {
    pub current_user: String,
    pub projects: Vec<String>,
    pub reference: ReferenceCapacity,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            current_user: DEFAULT_CREATED_BY.to_string(),
            projects: DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect(),
            reference: ReferenceCapacity::default(),
        }
    }
}

impl ConsoleSettings {
    /// Settings from a config file; keys the file leaves out keep their defaults.
    pub fn from_config(file: &ConsoleConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            current_user: file.created_by.clone().unwrap_or(defaults.current_user),
            projects: file.projects.clone().unwrap_or(defaults.projects),
            reference: file.reference.unwrap_or(defaults.reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_defaults() {
        let settings = ConsoleSettings::from_config(&ConsoleConfigFile::default());
        assert_eq!(settings, ConsoleSettings::default());
        assert_eq!(settings.projects.len(), DEFAULT_PROJECTS.len());
    }

    #[test]
    fn config_overrides_user_and_projects() {
        let file = ConsoleConfigFile {
            created_by: Some("jane".to_string()),
            projects: Some(vec!["Billing".to_string()]),
            ..Default::default()
        };
        let settings = ConsoleSettings::from_config(&file);
        assert_eq!(settings.current_user, "jane");
        assert_eq!(settings.projects, vec!["Billing".to_string()]);
        assert_eq!(settings.reference, ReferenceCapacity::default());
    }
}
