use crate::Dictionary;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load a dictionary table from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "hello": "ndewo",
///     "thank you": "dalu"
/// }
/// ```
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// A `Dictionary` containing all non-metadata entries, in file order
///
/// # Errors
/// - File not found
/// - Invalid JSON
/// - File read errors
pub fn load_dictionary_from_file(path: &Path) -> Result<Dictionary, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse JSON from '{}': {}", path.display(), e))?;

    let obj = json.as_object().ok_or_else(|| {
        format!(
            "Invalid JSON in '{}': root must be an object",
            path.display()
        )
    })?;

    let mut dictionary = Dictionary::new();
    for (key, value) in obj {
        // Skip metadata
        if key.starts_with('@') {
            continue;
        }

        if let Some(igbo) = value.as_str() {
            dictionary.with_entry(key, igbo);
        } else {
            warn!("Entry '{}' is not a string, skipping", key);
        }
    }

    Ok(dictionary)
}

/// Load and merge all `*.json` dictionary files from a directory
///
/// Files are merged in filename-sorted order so the resulting entry order
/// is deterministic. Later files override earlier ones for duplicate keys.
///
/// # Arguments
/// * `dir` - Directory path containing JSON files
///
/// # Errors
/// - Directory not found
/// - File read/parse errors
pub fn load_dictionary_from_dir(dir: &Path) -> Result<Dictionary, String> {
    if !dir.exists() {
        return Err(format!("Directory not found: {}", dir.display()));
    }

    if !dir.is_dir() {
        return Err(format!("Path is not a directory: {}", dir.display()));
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory '{}': {}", dir.display(), e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        warn!("No JSON files found in directory {}", dir.display());
    }

    let mut dictionary = Dictionary::new();
    for path in paths {
        let loaded = load_dictionary_from_file(&path)?;
        for (english, igbo) in loaded.iter() {
            dictionary.with_entry(english, igbo);
        }
    }

    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_json(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        write_json(
            dir.path(),
            "en-ig.json",
            r#"{"@metadata": {"authors": []}, "hello": "ndewo", "water": "mmiri"}"#,
        );

        let dictionary = load_dictionary_from_file(&dir.path().join("en-ig.json")).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.lookup("hello"), Some("ndewo"));
        assert_eq!(dictionary.lookup("water"), Some("mmiri"));
    }

    #[test]
    fn test_load_skips_non_string_values() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "bad.json", r#"{"hello": "ndewo", "count": 3}"#);

        let dictionary = load_dictionary_from_file(&dir.path().join("bad.json")).unwrap();
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dictionary_from_file(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "broken.json", "{not json");
        let result = load_dictionary_from_file(&dir.path().join("broken.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_dir_merges_in_filename_order() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "a.json", r#"{"hello": "ndewo"}"#);
        write_json(dir.path(), "b.json", r#"{"hello": "ndeewo", "food": "nri"}"#);

        let dictionary = load_dictionary_from_dir(dir.path()).unwrap();
        assert_eq!(dictionary.len(), 2);
        // b.json overrides a.json but the key keeps its original position
        assert_eq!(dictionary.lookup("hello"), Some("ndeewo"));
        let keys: Vec<&str> = dictionary.keys().collect();
        assert_eq!(keys, vec!["hello", "food"]);
    }

    #[test]
    fn test_load_from_missing_dir_is_error() {
        let result = load_dictionary_from_dir(Path::new("/definitely/not/here"));
        assert!(result.is_err());
    }
}
