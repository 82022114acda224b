use serde::{Deserialize, Serialize};

/// One entry of the release-notes timeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseNote {
    pub version: String,
    pub date: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub bug_fixes: Vec<String>,
    #[serde(default)]
    pub known_issues: Vec<String>,
    #[serde(default)]
    pub coming_soon: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseSection {
    Features,
    Improvements,
    BugFixes,
    KnownIssues,
    ComingSoon,
}

impl ReleaseSection {
    pub const ALL: [ReleaseSection; 5] = [
        ReleaseSection::Features,
        ReleaseSection::Improvements,
        ReleaseSection::BugFixes,
        ReleaseSection::KnownIssues,
        ReleaseSection::ComingSoon,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReleaseSection::Features => "New Features",
            ReleaseSection::Improvements => "Improvements",
            ReleaseSection::BugFixes => "Bug Fixes",
            ReleaseSection::KnownIssues => "Known Issues",
            ReleaseSection::ComingSoon => "Coming Soon",
        }
    }
}

impl ReleaseNote {
    pub fn entries(&self, section: ReleaseSection) -> &[String] {
        match section {
            ReleaseSection::Features => &self.features,
            ReleaseSection::Improvements => &self.improvements,
            ReleaseSection::BugFixes => &self.bug_fixes,
            ReleaseSection::KnownIssues => &self.known_issues,
            ReleaseSection::ComingSoon => &self.coming_soon,
        }
    }

    /// Sections that have at least one entry, in display order.
    pub fn sections(&self) -> impl Iterator<Item = (ReleaseSection, &[String])> {
        ReleaseSection::ALL
            .into_iter()
            .map(|s| (s, self.entries(s)))
            .filter(|(_, entries)| !entries.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sections_are_skipped() {
        let note = ReleaseNote {
            version: "1.9.0".to_string(),
            date: "February 28, 2024".to_string(),
            features: vec!["New test suite management".to_string()],
            coming_soon: vec!["Advanced analytics dashboard".to_string()],
            ..Default::default()
        };
        let titles: Vec<_> = note.sections().map(|(s, _)| s.title()).collect();
        assert_eq!(titles, vec!["New Features", "Coming Soon"]);
    }
}
