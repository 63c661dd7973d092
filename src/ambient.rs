//! Process-wide locale cache and the ambient accessors bound to it.
//!
//! [`init`] installs the cache explicitly. Without it the first use installs
//! one built from [`I18nSettings::default`]. Code that needs isolation, such
//! as tests, should construct its own [`InstanceCache`] instead.
//!
//! ```no_run
//! use tree_i18n::ambient;
//!
//! ambient::new_locale("zh-CN", None)?;
//!
//! let text = ambient::text("user.password.error.too-simple", &[])?;
//! let group = ambient::group("user.password.error")?;
//! let short = group.get("too-short", &["1234a".into()]);
//! # Ok::<(), tree_i18n::I18nError>(())
//! ```

use std::path::Path;
use std::sync::{
    Arc,
    OnceLock,
};

use crate::cache::InstanceCache;
use crate::config::I18nSettings;
use crate::error::{
    I18nError,
    Result,
};
use crate::format::FormatArg;
use crate::group::Group;
use crate::locale::{
    Locale,
    Lookup,
};

/// The process-wide cache.
static GLOBAL: OnceLock<InstanceCache> = OnceLock::new();

/// Installs the process-wide cache.
///
/// # Errors
/// - `Config`: `settings` are invalid
/// - `AlreadyInitialized`: the cache was already installed or used
pub fn init(settings: I18nSettings) -> Result<()> {
    GLOBAL.set(InstanceCache::new(settings)?).map_err(|_| I18nError::AlreadyInitialized)
}

/// The process-wide cache, installed with default settings on first use.
pub fn cache() -> &'static InstanceCache {
    GLOBAL.get_or_init(|| {
        tracing::debug!("Initializing the global locale cache with default settings");
        InstanceCache::default()
    })
}

/// The installed cache; no cache means no locale was created yet.
fn installed() -> Result<&'static InstanceCache> {
    GLOBAL.get().ok_or(I18nError::NoInstanceYet)
}

/// Creates or fetches the locale for `language` in the process-wide cache.
///
/// See [`InstanceCache::get_or_create`].
pub fn new_locale(language: &str, path: Option<&Path>) -> Result<Arc<Locale>> {
    cache().get_or_create(language, path)
}

/// Creates or fetches the default language's locale.
pub fn default_locale() -> Result<Arc<Locale>> {
    cache().get_default()
}

/// [`Locale::get`] on the locale most recently created or fetched.
///
/// # Errors
/// - `NoInstanceYet`: no locale exists yet in this process
pub fn get(path: &str, args: &[FormatArg]) -> Result<Lookup> {
    installed()?.get(path, args)
}

/// [`Locale::text`] on the locale most recently created or fetched.
///
/// # Errors
/// - `NoInstanceYet`: no locale exists yet in this process
pub fn text(path: &str, args: &[FormatArg]) -> Result<String> {
    installed()?.text(path, args)
}

/// [`Locale::group`] on the locale most recently created or fetched.
///
/// # Errors
/// - `NoInstanceYet`: no locale exists yet in this process
pub fn group(path: &str) -> Result<Group> {
    installed()?.group(path)
}
