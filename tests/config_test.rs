// tests/config_test.rs
use std::io::Write;
use std::path::PathBuf;

use deploy_changes::config::{load_config, Config, GitBackendKind};
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.git.backend, GitBackendKind::Libgit2);
    assert_eq!(config.slack.api_url, "https://slack.com/api");
    assert!(config.deploy.repository_url.is_none());
}

#[test]
fn test_load_from_fixture() {
    let config = load_config(Some("tests/fixtures/deploy-changes.toml"))
        .expect("Failed to load test config");

    assert_eq!(
        config.deploy.repository_url.as_deref(),
        Some("https://github.com/acme/storefront")
    );
    assert_eq!(config.deploy.tag_prefix.as_deref(), Some("app-stg-"));
    assert_eq!(config.deploy.build_number, None);
    assert_eq!(config.git.backend, GitBackendKind::System);
    assert_eq!(
        config.git.workspace_root,
        PathBuf::from("/tmp/deploy-changes")
    );
    assert!(!config.slack.as_user);
    assert_eq!(config.slack.api_url, "https://slack.com/api");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[slack]
api_url = "http://localhost:9000/api"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.slack.api_url, "http://localhost:9000/api");
    assert!(config.slack.as_user);
    assert_eq!(config.git.backend, GitBackendKind::Libgit2);
}

#[test]
fn test_invalid_toml_is_reported() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[git\nbackend = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
