//! Single-level lookups inside one resolved group of messages.

use crate::error::{
    I18nError,
    Result,
};
use crate::format::FormatArg;
use crate::message::{
    MessageNode,
    MessageTree,
};
use crate::resolver;

/// A view over one sub-tree of a [`crate::Locale`].
///
/// The sub-tree is shared with the locale, not copied, and stays usable after
/// the locale has been evicted from the cache.
#[derive(Debug, Clone)]
pub struct Group {
    /// Key path the group was resolved from.
    path: String,
    /// Separator of the locale's key paths, used to report full paths.
    separator: String,
    tree: MessageTree,
}

impl Group {
    pub(crate) fn new(path: &str, separator: &str, tree: MessageTree) -> Self {
        Self { path: path.to_string(), separator: separator.to_string(), tree }
    }

    /// Returns the formatted message directly under this group.
    ///
    /// `key` is a single segment, it is not split. Missing keys, nested groups
    /// and arguments that do not fit the template yield an empty string.
    #[must_use]
    pub fn get(&self, key: &str, args: &[FormatArg]) -> String {
        self.try_get(key, args).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            String::new()
        })
    }

    /// Strict variant of [`Group::get`].
    ///
    /// A missing key is still `Ok("")`.
    ///
    /// # Errors
    /// - `FormatOnNonLeaf`: `key` names a nested group
    /// - `FormatMismatch`: `args` do not fit the template
    pub fn try_get(&self, key: &str, args: &[FormatArg]) -> Result<String> {
        match self.tree.get(key) {
            Some(node @ MessageNode::Text(_)) => {
                resolver::format(node, &self.full_path(key), args)
            }
            Some(MessageNode::Tree(_)) => {
                Err(I18nError::FormatOnNonLeaf { path: self.full_path(key) })
            }
            None => Ok(String::new()),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.tree.contains_key(key)
    }

    /// Keys directly under this group, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.tree.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Key path the group was resolved from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn tree(&self) -> &MessageTree {
        &self.tree
    }

    /// Path of `key` for error messages.
    fn full_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}{}{key}", self.path, self.separator)
        }
    }
}

impl From<MessageTree> for Group {
    /// A group over a whole tree, e.g. a locale's root.
    fn from(tree: MessageTree) -> Self {
        Self::new("", ".", tree)
    }
}
