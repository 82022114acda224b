//! Demo data compiled into the binaries.

use pkg_types::release::ReleaseNote;

/// Three demo clusters: two public, one private.
pub const CLUSTERS_YAML: &str = include_str!("../seed/clusters.yaml");

/// Release-notes timeline, newest first.
pub const RELEASE_NOTES_YAML: &str = include_str!("../seed/release-notes.yaml");

pub fn release_notes() -> anyhow::Result<Vec<ReleaseNote>> {
    Ok(serde_yaml::from_str(RELEASE_NOTES_YAML)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_notes_parse_newest_first() {
        let notes = release_notes().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].version, "2.0.0");
        assert!(notes[1].known_issues.is_empty());
    }
}
