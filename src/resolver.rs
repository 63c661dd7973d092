//! Dotted-path resolution and leaf formatting over a [`MessageTree`].

use crate::error::{
    I18nError,
    Result,
};
use crate::format::{
    FormatArg,
    sprintf,
};
use crate::message::{
    MessageNode,
    MessageTree,
};

/// Resolves `path` against `root`, splitting it on `separator`.
///
/// # Returns
/// - `Ok(Some(node))`: every segment exists
/// - `Ok(None)`: a segment is missing at some depth
/// - `Err(LeafDescent)`: a segment other than the last names a text leaf
///
/// # Examples
/// ```
/// use tree_i18n::message::{MessageNode, MessageTree};
/// use tree_i18n::resolver::resolve_path;
///
/// let error: MessageTree = [("too-simple", "Password too simple")].into_iter().collect();
/// let root: MessageTree = [("error", MessageNode::Tree(error))].into_iter().collect();
///
/// let node = resolve_path(&root, "error.too-simple", ".").unwrap();
/// assert_eq!(node.and_then(MessageNode::as_text), Some("Password too simple"));
/// assert_eq!(resolve_path(&root, "error.missing", ".").unwrap(), None);
/// ```
pub fn resolve_path<'a>(
    root: &'a MessageTree,
    path: &str,
    separator: &str,
) -> Result<Option<&'a MessageNode>> {
    let mut segments = path.split(separator).peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        let Some(node) = current.get(segment) else {
            return Ok(None);
        };

        if segments.peek().is_none() {
            return Ok(Some(node));
        }

        match node {
            MessageNode::Tree(tree) => current = tree,
            MessageNode::Text(_) => {
                return Err(I18nError::LeafDescent {
                    path: path.to_string(),
                    segment: segment.to_string(),
                });
            }
        }
    }

    Ok(None)
}

/// Formats a resolved leaf with positional arguments.
///
/// Without arguments the template is returned verbatim. A group node cannot
/// be formatted and yields `FormatOnNonLeaf`; `path` is only used for error
/// reporting.
pub fn format(node: &MessageNode, path: &str, args: &[FormatArg]) -> Result<String> {
    match node {
        MessageNode::Text(template) => sprintf(template, args)
            .map_err(|source| I18nError::FormatMismatch { path: path.to_string(), source }),
        MessageNode::Tree(_) => Err(I18nError::FormatOnNonLeaf { path: path.to_string() }),
    }
}
