//! Deployable artifact resolution

use wardeploy_core::domain::artifact::ArtifactGroup;

/// Finds the web archive to deploy among a build's recorded artifacts
///
/// Records are scanned across all groups in encounter order and the path of
/// the last `war` record wins. Returns `None` when nothing qualifies or the
/// winning path is blank.
pub fn find_deployable_artifact(groups: &[ArtifactGroup]) -> Option<&str> {
    groups
        .iter()
        .flatten()
        .filter(|record| record.is_war())
        .last()
        .map(|record| record.file_path.as_str())
        .filter(|path| !path.trim().is_empty())
}
