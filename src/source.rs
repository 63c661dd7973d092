//! Locale source files: reading bytes and deserializing them into a tree.

use std::path::Path;

use crate::error::{
    I18nError,
    Result,
};
use crate::message::{
    MessageNode,
    MessageTree,
    node_from_json,
    node_from_yaml,
};

/// Serialization format of a locale source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// Picks the format from the file extension.
    ///
    /// `.json` is JSON; everything else, including no extension, is read as
    /// YAML, which also accepts JSON documents.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Reads and parses a locale file.
///
/// # Errors
/// - `SourceNotFound`: the file cannot be read
/// - `MalformedSource`: the content is not a mapping of messages
pub fn load_source(path: &Path) -> Result<MessageTree> {
    let bytes = read_source(path)?;
    parse_source(&bytes, SourceFormat::from_path(path))
        .map_err(|message| I18nError::MalformedSource { path: path.to_path_buf(), message })
}

/// Reads all bytes of a locale file.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    tracing::debug!("Reading locale file: {:?}", path);

    std::fs::read(path)
        .map_err(|source| I18nError::SourceNotFound { path: path.to_path_buf(), source })
}

/// Deserializes locale bytes into a message tree.
///
/// An empty YAML document is an empty tree. Any root other than a mapping is
/// rejected.
pub fn parse_source(bytes: &[u8], format: SourceFormat) -> Result<MessageTree, String> {
    let root = match format {
        SourceFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_slice(bytes).map_err(|e| format!("Failed to parse JSON: {e}"))?;
            if !value.is_object() {
                return Err(NOT_A_MAPPING.to_string());
            }
            node_from_json(&value)
        }
        SourceFormat::Yaml => {
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(MessageTree::new());
            }
            let value: serde_yaml::Value =
                serde_yaml::from_slice(bytes).map_err(|e| format!("Failed to parse YAML: {e}"))?;
            match value {
                serde_yaml::Value::Null => return Ok(MessageTree::new()),
                serde_yaml::Value::Mapping(_) => node_from_yaml(&value),
                _ => return Err(NOT_A_MAPPING.to_string()),
            }
        }
    };

    match root {
        MessageNode::Tree(tree) => Ok(tree),
        MessageNode::Text(_) => Err(NOT_A_MAPPING.to_string()),
    }
}

/// Error message for documents whose root is not a mapping.
const NOT_A_MAPPING: &str = "the document root must be a mapping";

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[case("locales/zh-CN.yaml", SourceFormat::Yaml)]
    #[case("locales/zh-CN.yml", SourceFormat::Yaml)]
    #[case("locales/en.json", SourceFormat::Json)]
    #[case("locales/en.JSON", SourceFormat::Json)]
    #[case("locales/en", SourceFormat::Yaml)]
    fn test_source_format_from_path(#[case] path: &str, #[case] expected: SourceFormat) {
        assert_eq!(SourceFormat::from_path(Path::new(path)), expected);
    }

    #[rstest]
    fn test_load_source_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zh-CN.yaml");
        fs::write(&path, "user:\n  password:\n    error:\n      too-simple: 密码太简单\n").unwrap();

        let tree = load_source(&path).unwrap();

        assert_that!(tree.keys(), len(eq(1)));
        assert!(tree.contains_key("user"));
    }

    #[rstest]
    fn test_load_source_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, r#"{"hello": "Hello", "nested": {"key": "Value"}}"#).unwrap();

        let tree = load_source(&path).unwrap();

        assert_that!(tree.len(), eq(2));
    }

    #[rstest]
    fn test_load_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_source(&temp_dir.path().join("missing.yaml"));

        assert!(matches!(result, Err(I18nError::SourceNotFound { .. })));
    }

    #[rstest]
    #[case("broken.json", "{ not json")]
    #[case("broken.yaml", "key: [unclosed")]
    #[case("scalar.yaml", "just a string")]
    #[case("list.json", r#"["a", "b"]"#)]
    fn test_load_source_malformed(#[case] file_name: &str, #[case] content: &str) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(file_name);
        fs::write(&path, content).unwrap();

        let result = load_source(&path);

        assert!(matches!(result, Err(I18nError::MalformedSource { .. })));
    }

    #[rstest]
    fn test_parse_source_empty_yaml() {
        let tree = parse_source(b"", SourceFormat::Yaml).unwrap();

        assert!(tree.is_empty());
    }
}
