//! Registry of loaded locales keyed by language.
//!
//! Locales are created once per language and reused afterwards. With a
//! non-zero capacity the oldest inserted locale is evicted when a new one
//! does not fit. The registry also remembers the locale it handed out last,
//! which backs the ambient accessors.
//!
//! # Locking
//!
//! Every operation that touches the registry takes the same mutex, including
//! the file read of a cache miss. Lookups on a returned [`Locale`] or
//! [`Group`] need no lock since loaded trees are never mutated.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError,
};

use crate::config::{
    ConfigError,
    I18nSettings,
};
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

/// Hit/miss counters of an [`InstanceCache`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub evictions: usize,
}

/// State guarded by the cache mutex.
#[derive(Debug, Default)]
struct CacheState {
    /// Cached locales, oldest first.
    entries: VecDeque<Arc<Locale>>,
    /// Locale most recently created or fetched.
    last_used: Option<Arc<Locale>>,
    stats: CacheStats,
}

/// Locale registry with reuse by language and optional FIFO eviction.
///
/// Returned locales are shared: evicting one only means the next request
/// for its language loads it again, callers holding it keep a valid value.
#[derive(Debug, Default)]
pub struct InstanceCache {
    settings: I18nSettings,
    state: Mutex<CacheState>,
}

impl InstanceCache {
    /// Creates an empty cache. Its capacity is `settings.cache_capacity`.
    ///
    /// # Errors
    /// - `Config`: `settings` are invalid
    pub fn new(settings: I18nSettings) -> Result<Self> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(Self { settings, state: Mutex::new(CacheState::default()) })
    }

    #[must_use]
    pub const fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    /// Maximum number of cached locales, `0` when unbounded.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.settings.cache_capacity
    }

    /// Returns the cached locale for `language` or loads it.
    ///
    /// On a hit `path` is ignored: a language is never reloaded from another
    /// file while it is cached. An empty `language` means the configured
    /// default language and a missing `path` the conventional source file.
    ///
    /// # Errors
    /// - `SourceNotFound`, `MalformedSource`: loading failed, the cache is unchanged
    pub fn get_or_create(&self, language: &str, path: Option<&Path>) -> Result<Arc<Locale>> {
        let language =
            if language.is_empty() { self.settings.default_language.as_str() } else { language };
        let mut state = self.lock();

        if let Some(locale) = state.entries.iter().find(|l| l.language() == language).cloned() {
            tracing::debug!("Locale '{}' served from cache", language);
            state.stats.hits += 1;
            state.last_used = Some(Arc::clone(&locale));
            return Ok(locale);
        }

        state.stats.misses += 1;
        let locale = Arc::new(Locale::load(language, path, &self.settings)?);
        self.push(&mut state, Arc::clone(&locale));
        Ok(locale)
    }

    /// Creates or fetches the default language's locale.
    pub fn get_default(&self) -> Result<Arc<Locale>> {
        self.get_or_create("", None)
    }

    /// Registers an already loaded locale, replacing any cached locale of
    /// the same language. It becomes the last used locale.
    pub fn insert(&self, locale: Locale) -> Arc<Locale> {
        let locale = Arc::new(locale);
        let mut state = self.lock();
        state.entries.retain(|l| l.language() != locale.language());
        self.push(&mut state, Arc::clone(&locale));
        locale
    }

    /// Appends a new locale, evicting the oldest ones beyond capacity.
    fn push(&self, state: &mut CacheState, locale: Arc<Locale>) {
        let capacity = self.capacity();
        while capacity != 0 && state.entries.len() >= capacity {
            if let Some(evicted) = state.entries.pop_front() {
                tracing::debug!("Evicting locale '{}'", evicted.language());
                state.stats.evictions += 1;
            }
        }

        tracing::debug!("Caching locale '{}'", locale.language());
        state.last_used = Some(Arc::clone(&locale));
        state.entries.push_back(locale);
    }

    #[must_use]
    pub fn contains(&self, language: &str) -> bool {
        self.lock().entries.iter().any(|l| l.language() == language)
    }

    /// Cached languages, oldest first.
    #[must_use]
    pub fn languages(&self) -> Vec<String> {
        self.lock().entries.iter().map(|l| l.language().to_string()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    /// The locale most recently created or fetched.
    ///
    /// # Errors
    /// - `NoInstanceYet`: no locale was created or fetched through this cache
    pub fn last_used(&self) -> Result<Arc<Locale>> {
        self.lock().last_used.clone().ok_or(I18nError::NoInstanceYet)
    }

    /// [`Locale::get`] on the last used locale.
    pub fn get(&self, path: &str, args: &[FormatArg]) -> Result<Lookup> {
        self.last_used()?.get(path, args)
    }

    /// [`Locale::text`] on the last used locale.
    pub fn text(&self, path: &str, args: &[FormatArg]) -> Result<String> {
        Ok(self.last_used()?.text(path, args))
    }

    /// [`Locale::group`] on the last used locale.
    pub fn group(&self, path: &str) -> Result<Group> {
        self.last_used()?.group(path)
    }

    /// Locks the state, recovering it if a previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
