//! Vendored package metadata.

use std::path::Path;

/// Read the `version` field of a package's `package.json`.
///
/// Any failure (missing file, bad JSON, no version field) degrades to
/// `"unknown"` — a missing version must not block extraction.
pub fn read_package_version(package_dir: &Path) -> String {
    let path = package_dir.join("package.json");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no package.json");
            return "unknown".to_string();
        }
    };

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(manifest) => manifest
            .get("version")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unparsable package.json");
            "unknown".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_version_field() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"name": "lucide-static", "version": "0.544.0"}"#,
        )
        .unwrap();
        assert_eq!(read_package_version(dir.path()), "0.544.0");
    }

    #[test]
    fn missing_manifest_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_package_version(dir.path()), "unknown");
    }

    #[test]
    fn malformed_manifest_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{not json").unwrap();
        assert_eq!(read_package_version(dir.path()), "unknown");
    }
}
