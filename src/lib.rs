//! tree-i18n
//!
//! Dotted-key message lookup over nested YAML/JSON locale files, with a
//! per-language instance cache and group views for repeated lookups.

pub mod ambient;
pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod group;
pub mod locale;
pub mod message;
pub mod resolver;
pub mod source;

pub use cache::{
    CacheStats,
    InstanceCache,
};
pub use config::I18nSettings;
pub use error::{
    I18nError,
    Result,
};
pub use format::FormatArg;
pub use group::Group;
pub use locale::{
    Locale,
    Lookup,
};
pub use message::{
    MessageNode,
    MessageTree,
};
