//! Message tree definitions
//!
//! A locale file is a nested mapping whose leaves are text templates.
//! Every node is either a [`MessageNode::Text`] leaf or a
//! [`MessageNode::Tree`] of further nodes, never both.

use std::collections::HashMap;
use std::sync::Arc;

/// A single node of a message tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    /// Text template, possibly containing `%` placeholders.
    Text(String),
    /// Nested group of messages.
    Tree(MessageTree),
}

impl MessageNode {
    /// Returns the template if this node is a leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Tree(_) => None,
        }
    }

    /// Returns the sub-tree if this node is a group.
    #[must_use]
    pub const fn as_tree(&self) -> Option<&MessageTree> {
        match self {
            Self::Text(_) => None,
            Self::Tree(tree) => Some(tree),
        }
    }
}

impl From<&str> for MessageNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MessageNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<MessageTree> for MessageNode {
    fn from(tree: MessageTree) -> Self {
        Self::Tree(tree)
    }
}

/// Immutable mapping from key to [`MessageNode`].
///
/// Cloning is cheap: the entries are shared, so a sub-tree handed out to a
/// [`crate::Group`] stays valid after its locale is evicted from the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTree {
    /// Shared entries.
    entries: Arc<HashMap<String, MessageNode>>,
}

impl MessageTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a direct child.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MessageNode> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Direct child keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when both trees share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl From<HashMap<String, MessageNode>> for MessageTree {
    fn from(entries: HashMap<String, MessageNode>) -> Self {
        Self { entries: Arc::new(entries) }
    }
}

impl<K, V> FromIterator<(K, V)> for MessageTree
where
    K: Into<String>,
    V: Into<MessageNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect::<HashMap<_, _>>().into()
    }
}

/// Converts a JSON document into a message node.
///
/// Objects become trees, arrays become trees keyed by index, strings become
/// text and other scalars use their textual form. `null` is an empty message.
#[must_use]
pub fn node_from_json(value: &serde_json::Value) -> MessageNode {
    use serde_json::Value;

    match value {
        Value::Object(map) => MessageNode::Tree(
            map.iter().map(|(key, value)| (key.clone(), node_from_json(value))).collect(),
        ),
        Value::Array(items) => MessageNode::Tree(
            items
                .iter()
                .enumerate()
                .map(|(i, value)| (i.to_string(), node_from_json(value)))
                .collect(),
        ),
        Value::String(s) => MessageNode::Text(s.clone()),
        Value::Null => MessageNode::Text(String::new()),
        Value::Bool(_) | Value::Number(_) => MessageNode::Text(value.to_string()),
    }
}

/// Converts a YAML document into a message node.
///
/// Same rules as [`node_from_json`]. Non-string mapping keys are stringified
/// and tagged values are converted by their inner value.
#[must_use]
pub fn node_from_yaml(value: &serde_yaml::Value) -> MessageNode {
    use serde_yaml::Value;

    match value {
        Value::Mapping(map) => MessageNode::Tree(
            map.iter().map(|(key, value)| (yaml_key(key), node_from_yaml(value))).collect(),
        ),
        Value::Sequence(items) => MessageNode::Tree(
            items
                .iter()
                .enumerate()
                .map(|(i, value)| (i.to_string(), node_from_yaml(value)))
                .collect(),
        ),
        Value::String(s) => MessageNode::Text(s.clone()),
        Value::Null => MessageNode::Text(String::new()),
        Value::Bool(b) => MessageNode::Text(b.to_string()),
        Value::Number(n) => MessageNode::Text(n.to_string()),
        Value::Tagged(tagged) => node_from_yaml(&tagged.value),
    }
}

/// Textual form of a YAML mapping key.
fn yaml_key(key: &serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        Value::Tagged(tagged) => yaml_key(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            serde_yaml::to_string(key).map_or_else(|_| String::new(), |s| s.trim_end().to_string())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn test_node_from_json_nested() {
        let json = json!({
            "common": {
                "hello": "Hello",
                "goodbye": "Goodbye"
            },
            "title": "Title"
        });

        let node = node_from_json(&json);
        let tree = node.as_tree().unwrap();

        assert_eq!(tree.keys(), vec!["common", "title"]);
        expect_that!(tree.get("title"), some(eq(&MessageNode::from("Title"))));

        let common = tree.get("common").and_then(MessageNode::as_tree).unwrap();
        expect_that!(common.get("hello").and_then(MessageNode::as_text), some(eq("Hello")));
        expect_that!(common.len(), eq(2));
    }

    #[googletest::test]
    fn test_node_from_json_scalars() {
        let json = json!({
            "number": 42,
            "boolean": true,
            "null": null
        });

        let node = node_from_json(&json);
        let tree = node.as_tree().unwrap();

        expect_that!(tree.get("number").and_then(MessageNode::as_text), some(eq("42")));
        expect_that!(tree.get("boolean").and_then(MessageNode::as_text), some(eq("true")));
        expect_that!(tree.get("null").and_then(MessageNode::as_text), some(eq("")));
    }

    #[googletest::test]
    fn test_node_from_json_array_uses_index_keys() {
        let json = json!({ "items": ["apple", { "name": "banana" }] });

        let node = node_from_json(&json);
        let items =
            node.as_tree().and_then(|t| t.get("items")).and_then(MessageNode::as_tree).unwrap();

        expect_that!(items.get("0").and_then(MessageNode::as_text), some(eq("apple")));
        expect_that!(items.get("1").and_then(MessageNode::as_tree).map(MessageTree::len), some(eq(1)));
    }

    #[rstest]
    #[case("1: one", "1")]
    #[case("true: yes-key", "true")]
    #[case("plain: value", "plain")]
    fn test_node_from_yaml_stringifies_keys(#[case] source: &str, #[case] expected_key: &str) {
        let yaml: serde_yaml::Value = serde_yaml::from_str(source).unwrap();

        let node = node_from_yaml(&yaml);

        assert!(node.as_tree().unwrap().contains_key(expected_key));
    }

    #[googletest::test]
    fn test_node_from_yaml_nested() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(
            "user:\n  password:\n    error:\n      too-short: \"Password too short: %s\"\n      limit: 8\n",
        )
        .unwrap();

        let node = node_from_yaml(&yaml);
        let error = node
            .as_tree()
            .and_then(|t| t.get("user"))
            .and_then(MessageNode::as_tree)
            .and_then(|t| t.get("password"))
            .and_then(MessageNode::as_tree)
            .and_then(|t| t.get("error"))
            .and_then(MessageNode::as_tree)
            .unwrap();

        expect_that!(error.get("too-short").and_then(MessageNode::as_text), some(eq("Password too short: %s")));
        expect_that!(error.get("limit").and_then(MessageNode::as_text), some(eq("8")));
    }

    #[rstest]
    fn test_tree_clone_shares_storage() {
        let tree: MessageTree = [("a", "A")].into_iter().collect();
        let copy = tree.clone();

        assert!(tree.ptr_eq(&copy));
        assert!(!tree.ptr_eq(&MessageTree::new()));
    }
}
