use std::time::Duration;

use edgar_db::config::env::load_values;
use edgar_db::{BootstrapError, MongoSettings, DEFAULT_DB_NAME};

#[test]
fn test_absent_file_yields_empty_map() {
    let dir = tempfile::tempdir().unwrap();

    let values = load_values(dir.path().join("absent.env"));

    assert!(values.is_empty());
}

#[test]
fn test_key_value_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(
        &path,
        "# connection settings\nMONGO_URI=mongodb://localhost:27017\n\nMONGO_DB=\"edgar\"\n",
    )
    .unwrap();

    let values = load_values(&path);

    assert_eq!(values.len(), 2);
    assert_eq!(
        values.get("MONGO_URI").map(String::as_str),
        Some("mongodb://localhost:27017")
    );
    // quotes are stripped
    assert_eq!(values.get("MONGO_DB").map(String::as_str), Some("edgar"));
}

#[test]
fn test_settings_defaults() {
    let settings = MongoSettings::new("mongodb://valid-host");

    assert_eq!(settings.uri, "mongodb://valid-host");
    assert_eq!(settings.db_name, DEFAULT_DB_NAME);
    assert_eq!(settings.connect_timeout, Duration::from_secs(30));
    assert_eq!(settings.io_timeout, Duration::from_secs(30));
    assert_eq!(settings.server_selection_timeout, Duration::from_secs(30));
}

#[test]
fn test_settings_from_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "MONGO_URI=mongodb://valid-host\nMONGO_DB=filings\n").unwrap();

    let settings = MongoSettings::from_env_file(&path).unwrap();

    assert_eq!(settings.uri, "mongodb://valid-host");
    assert_eq!(settings.db_name, "filings");
}

#[test]
fn test_settings_from_env_file_without_db_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "MONGO_URI=mongodb://valid-host\nMONGO_DB=\n").unwrap();

    let settings = MongoSettings::from_env_file(&path).unwrap();

    assert_eq!(settings.db_name, "edgar");
}

#[test]
fn test_settings_from_absent_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = MongoSettings::from_env_file(dir.path().join("absent.env")).unwrap_err();

    assert!(matches!(err, BootstrapError::MissingKey("MONGO_URI")));
}
