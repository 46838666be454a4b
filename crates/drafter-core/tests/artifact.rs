use std::path::Path;

use drafter_core::artifact::{default_names, Artifact, ArtifactSet};

#[test]
fn test_default_set_has_four_linux_archives() {
    let set = ArtifactSet::default();
    assert_eq!(
        set.names(),
        vec![
            "worker-linux-amd64.tar.gz",
            "worker-linux-arm64.tar.gz",
            "coordinator-linux-amd64.tar.gz",
            "coordinator-linux-arm64.tar.gz",
        ]
    );
    assert_eq!(set.len(), default_names().len());
}

#[test]
fn test_matrix_matches_default_order() {
    let set = ArtifactSet::from_matrix(
        &["worker".to_string(), "coordinator".to_string()],
        &["linux".to_string()],
        &["amd64".to_string(), "arm64".to_string()],
    )
    .unwrap();
    assert_eq!(set, ArtifactSet::default());
}

#[test]
fn test_local_path_joins_dir() {
    let artifact = Artifact::new("worker-linux-amd64.tar.gz").unwrap();
    assert_eq!(
        artifact.local_path(Path::new("bin")),
        Path::new("bin").join("worker-linux-amd64.tar.gz")
    );
}

#[test]
fn test_names_with_separators_are_rejected() {
    assert!(Artifact::new("../secret.tar.gz").is_err());
    assert!(Artifact::new("dir\\file.tar.gz").is_err());
    assert!(Artifact::new("").is_err());
}

#[test]
fn test_duplicates_are_rejected() {
    let err = ArtifactSet::from_names(["a.tar.gz", "b.tar.gz", "a.tar.gz"]).unwrap_err();
    assert!(err.to_string().contains("more than once"), "got: {err}");
}

#[test]
fn test_empty_set_is_rejected() {
    assert!(ArtifactSet::from_names(Vec::<String>::new()).is_err());
    assert!(ArtifactSet::from_matrix(&[], &["linux".to_string()], &["amd64".to_string()]).is_err());
}

#[test]
fn test_from_names_keeps_order() {
    let set = ArtifactSet::from_names(["z.tar.gz", "a.tar.gz"]).unwrap();
    assert_eq!(set.names(), vec!["z.tar.gz", "a.tar.gz"]);
}
