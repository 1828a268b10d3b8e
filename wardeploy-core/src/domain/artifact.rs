//! Recorded build artifact types

use serde::{Deserialize, Serialize};

/// Artifact type of a packaged web archive
pub const WAR_TYPE: &str = "war";

/// One output artifact recorded by the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub file_path: String,
}

impl ArtifactRecord {
    pub fn new(artifact_type: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            artifact_type: artifact_type.into(),
            file_path: file_path.into(),
        }
    }

    /// Whether this record designates a deployable web archive
    pub fn is_war(&self) -> bool {
        self.artifact_type == WAR_TYPE
    }
}

/// Artifacts attached to a single build-recording action
pub type ArtifactGroup = Vec<ArtifactRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_is_named_type() {
        let record: ArtifactRecord =
            serde_json::from_str(r#"{"type":"war","file_path":"/tmp/app.war"}"#).unwrap();
        assert!(record.is_war());
        assert_eq!(record.file_path, "/tmp/app.war");
    }

    #[test]
    fn test_war_match_is_exact() {
        assert!(!ArtifactRecord::new("WAR", "a").is_war());
        assert!(!ArtifactRecord::new("jar", "a").is_war());
    }
}
