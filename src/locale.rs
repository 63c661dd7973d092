//! A loaded message tree bound to one language.

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use crate::config::I18nSettings;
use crate::error::{
    I18nError,
    Result,
};
use crate::format::FormatArg;
use crate::group::Group;
use crate::message::{
    MessageNode,
    MessageTree,
};
use crate::resolver;
use crate::source::{
    self,
    SourceFormat,
};

/// Result of [`Locale::get`]: a formatted message or a whole sub-tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Text(String),
    Tree(MessageTree),
}

impl Lookup {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Tree(_) => None,
        }
    }

    #[must_use]
    pub const fn as_tree(&self) -> Option<&MessageTree> {
        match self {
            Self::Text(_) => None,
            Self::Tree(tree) => Some(tree),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Tree(tree) => write!(f, "{{{}}}", tree.keys().join(", ")),
        }
    }
}

/// Messages of one language, immutable once loaded.
#[derive(Debug, Clone)]
pub struct Locale {
    language: String,
    source_path: PathBuf,
    root: MessageTree,
    /// Separator between the segments of a key path.
    separator: String,
}

impl Locale {
    /// Loads the locale for `language` from `path`.
    ///
    /// An empty `language` falls back to the configured default language and
    /// a missing or empty `path` to `<localesDir>/<language>.<extension>`.
    ///
    /// # Errors
    /// - `SourceNotFound`: the file cannot be read
    /// - `MalformedSource`: the file is not a mapping of messages
    pub fn load(language: &str, path: Option<&Path>, settings: &I18nSettings) -> Result<Self> {
        let language =
            if language.is_empty() { settings.default_language.as_str() } else { language };
        let source_path = match path {
            Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
            _ => settings.default_source_path(language),
        };

        tracing::debug!("Loading locale '{}' from {:?}", language, source_path);
        let root = source::load_source(&source_path)?;

        Ok(Self::from_tree(language, source_path, root).with_separator(&settings.key_separator))
    }

    /// Builds a locale from an in-memory source document.
    ///
    /// # Errors
    /// - `MalformedSource`: `text` is not a mapping of messages
    pub fn parse(language: &str, text: &str, format: SourceFormat) -> Result<Self> {
        let root = source::parse_source(text.as_bytes(), format).map_err(|message| {
            I18nError::MalformedSource { path: PathBuf::from("<memory>"), message }
        })?;
        Ok(Self::from_tree(language, PathBuf::new(), root))
    }

    /// Wraps an already built tree.
    #[must_use]
    pub fn from_tree(language: impl Into<String>, source_path: PathBuf, root: MessageTree) -> Self {
        Self { language: language.into(), source_path, root, separator: ".".to_string() }
    }

    /// Uses `separator` between key path segments instead of `.`.
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        separator.clone_into(&mut self.separator);
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    #[must_use]
    pub const fn root(&self) -> &MessageTree {
        &self.root
    }

    /// Resolves `path` without formatting.
    ///
    /// # Errors
    /// - `LeafDescent`: the path continues below a text leaf
    pub fn node(&self, path: &str) -> Result<Option<&MessageNode>> {
        resolver::resolve_path(&self.root, path, &self.separator)
    }

    /// Returns the formatted message at `path`, or the sub-tree if `path`
    /// names a group.
    ///
    /// A missing key yields an empty text. Arguments are ignored for groups.
    ///
    /// # Errors
    /// - `LeafDescent`: the path continues below a text leaf
    /// - `FormatMismatch`: `args` do not fit the template
    pub fn get(&self, path: &str, args: &[FormatArg]) -> Result<Lookup> {
        match self.node(path)? {
            None => Ok(Lookup::Text(String::new())),
            Some(MessageNode::Tree(tree)) => Ok(Lookup::Tree(tree.clone())),
            Some(node) => resolver::format(node, path, args).map(Lookup::Text),
        }
    }

    /// Returns the formatted message at `path`.
    ///
    /// Never fails: missing keys, groups and invalid paths or arguments all
    /// yield an empty string.
    #[must_use]
    pub fn text(&self, path: &str, args: &[FormatArg]) -> String {
        match self.get(path, args) {
            Ok(Lookup::Text(text)) => text,
            Ok(Lookup::Tree(_)) => {
                tracing::warn!("'{}' is a group, not a message", path);
                String::new()
            }
            Err(e) => {
                tracing::warn!("{}", e);
                String::new()
            }
        }
    }

    /// Returns a view over the group at `path` for repeated lookups.
    ///
    /// A missing path yields an empty group.
    ///
    /// # Errors
    /// - `NotAGroup`: `path` names a text leaf
    /// - `LeafDescent`: the path continues below a text leaf
    pub fn group(&self, path: &str) -> Result<Group> {
        match self.node(path)? {
            Some(MessageNode::Tree(tree)) => Ok(Group::new(path, &self.separator, tree.clone())),
            Some(MessageNode::Text(_)) => Err(I18nError::NotAGroup { path: path.to_string() }),
            None => {
                tracing::debug!("Group '{}' not found in locale '{}'", path, self.language);
                Ok(Group::new(path, &self.separator, MessageTree::new()))
            }
        }
    }
}
