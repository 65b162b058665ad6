/* src/cli/core/src/config/tests/loading.rs */

use super::*;

#[test]
fn find_config_walks_upward() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
  let nested = dir.path().join("a/b");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_brickyard_config(&nested).unwrap();
  assert_eq!(found, dir.path().canonicalize().unwrap().join(CONFIG_FILE));
}

#[test]
fn find_config_reports_missing() {
  let dir = tempfile::tempdir().unwrap();
  let err = find_brickyard_config(dir.path()).unwrap_err().to_string();
  assert!(err.contains("brickyard.toml not found"));
}

#[test]
fn load_validates_i18n() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(CONFIG_FILE);
  std::fs::write(&path, "[i18n]\nlocales = [\"en\"]\ndefault = \"it\"\n").unwrap();
  let err = load_brickyard_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("i18n.default \"it\""));
}

#[test]
fn load_reports_parse_errors() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(CONFIG_FILE);
  std::fs::write(&path, "[preview]\nport = \"x\"\n").unwrap();
  let err = load_brickyard_config(&path).unwrap_err().to_string();
  assert!(err.contains("failed to parse"));
}

#[test]
fn load_valid_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(CONFIG_FILE);
  std::fs::write(&path, "[preview]\nport = 8080\n").unwrap();
  assert_eq!(load_brickyard_config(&path).unwrap().preview.port, 8080);
}
