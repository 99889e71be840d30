use scout::utils::validation::Validate;
use scout::{AppConfig, Environment};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_production_disables_debug() {
    let config = AppConfig::default().resolve(Environment::Production);

    assert!(!config.app.debug);
    assert_eq!(config.app.api_base_url, "https://api.yourapp.com");
    assert!(config.validate().is_ok());
}

#[test]
fn test_environment_by_name() {
    let staging = AppConfig::default().resolve_named("staging");
    assert!(staging.app.debug);
    assert_eq!(staging.app.api_base_url, "https://staging-api.yourapp.com");

    let development = AppConfig::default().resolve_named("development");
    assert_eq!(development.app.api_base_url, "http://localhost:3000");
}

#[test]
fn test_file_overlay_then_environment() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(
            br#"
[app]
debug = true
default_location = "Texas"

[apis.resume]
endpoint = "https://resume.example.com"
"#,
        )
        .unwrap();

    let config = AppConfig::from_file(temp_file.path())
        .unwrap()
        .resolve(Environment::Production);

    // the environment wins over the file for the fields it overrides
    assert!(!config.app.debug);
    assert_eq!(config.app.default_location, "Texas");

    let url = config.endpoint_url(&config.apis.resume, "generate").unwrap();
    assert_eq!(url.as_str(), "https://resume.example.com/api/v1/generate");
    let url = config.endpoint_url(&config.apis.jobs, "search").unwrap();
    assert_eq!(url.as_str(), "https://api.yourapp.com/api/v1/search");
}
