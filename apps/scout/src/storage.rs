//! JSON snapshot persistence. Every write replaces the whole file through a
//! temp-file rename, so a concurrent reader always sees a complete document.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;

/// Serializes `value` pretty-printed and atomically replaces `path` with it.
pub fn write_json_snapshot<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize snapshot")?;

    // The temp file must live on the same filesystem as the target for the
    // rename to be atomic.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file next to {}", path.display()))?;
    tmp.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write snapshot for {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_snapshot_round_trips_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let value = json!({"jobs": [{"score": "80"}]});

        write_json_snapshot(&path, &value).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains('\n'), "expected pretty-printed output");
        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_snapshot_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json_snapshot(&path, &json!({"jobs": [1, 2, 3]})).unwrap();
        write_json_snapshot(&path, &json!({"jobs": []})).unwrap();

        let parsed: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, json!({"jobs": []}));
    }

    #[test]
    fn test_snapshot_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.json");
        assert!(write_json_snapshot(&path, &json!({})).is_err());
    }
}
