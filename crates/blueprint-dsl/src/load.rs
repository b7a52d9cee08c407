//! Loading blueprint files from disk
//!
//! Blueprints are JSON-first; YAML is accepted for hand-written files.
//! Both formats deserialize into the same JSON value, so validation and
//! conversion never see the difference.

use std::path::Path;

use serde_json::Value;

use crate::blueprint::Blueprint;
use crate::error::{Error, Result};

/// Read a blueprint instance from a JSON or YAML file.
///
/// The format is chosen by file extension (`.json`, `.yaml`, `.yml`).
pub fn load_value<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    tracing::debug!("Loading blueprint from {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "json" => Ok(serde_json::from_str(&contents)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&contents)?),
        other => Err(Error::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

/// Read a blueprint file and normalize it into the typed model.
pub fn load_blueprint<P: AsRef<Path>>(path: P) -> Result<Blueprint> {
    let value = load_value(path)?;
    Blueprint::from_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_blueprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bp.json");
        std::fs::write(&path, r#"{"id": "bp-1", "name": "From JSON"}"#).unwrap();

        let blueprint = load_blueprint(&path).unwrap();
        assert_eq!(blueprint.id, "bp-1");
        assert_eq!(blueprint.name, "From JSON");
    }

    #[test]
    fn test_load_yaml_blueprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bp.yaml");
        std::fs::write(&path, "id: bp-2\nname: From YAML\nsteps:\n  - id: s1\n").unwrap();

        let blueprint = load_blueprint(&path).unwrap();
        assert_eq!(blueprint.id, "bp-2");
        assert_eq!(blueprint.steps.len(), 1);
        assert_eq!(blueprint.steps[0].id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_value("does-not-exist.json").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bp.toml");
        std::fs::write(&path, "id = \"bp-3\"").unwrap();

        let err = load_value(&path).unwrap_err();
        match err {
            Error::UnsupportedFormat { extension } => assert_eq!(extension, "toml"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
