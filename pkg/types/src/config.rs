use crate::cluster::ReferenceCapacity;
use serde::{Deserialize, Serialize};

/// Console configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// data: ./clusters.yaml
/// output: table
/// created-by: jane
/// projects: [Project A, Project B]
/// reference:
///   totalRequestCpu: 64
///   totalLimitCpu: 128
///   totalRequestMemory: 131072
///   totalLimitMemory: 262144
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfigFile {
    /// Cluster snapshot to load instead of the built-in seed.
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default, alias = "created-by")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub projects: Option<Vec<String>>,
    #[serde(default)]
    pub reference: Option<ReferenceCapacity>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg: ConsoleConfigFile =
            load_config_file("/nonexistent/kdeck/config.yaml").unwrap();
        assert!(cfg.data.is_none());
        assert!(cfg.reference.is_none());
    }

    #[test]
    fn parses_kebab_case_keys() {
        let cfg: ConsoleConfigFile = serde_yaml::from_str(
            "created-by: jane\nprojects: [Project A]\nreference:\n  totalRequestCpu: 8\n  totalLimitCpu: 16\n  totalRequestMemory: 1024\n  totalLimitMemory: 2048\n",
        )
        .unwrap();
        assert_eq!(cfg.created_by.as_deref(), Some("jane"));
        assert_eq!(cfg.projects.unwrap(), vec!["Project A".to_string()]);
        assert_eq!(cfg.reference.unwrap().total_limit_cpu, 16.0);
    }
}
