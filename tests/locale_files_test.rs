//! Lookups against the locale files under `tests/fixtures/locales`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::*;
use tree_i18n::{
    I18nError,
    I18nSettings,
    InstanceCache,
    Lookup,
};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/locales")
}

#[fixture]
fn cache() -> InstanceCache {
    InstanceCache::new(I18nSettings { locales_dir: fixtures_dir(), ..I18nSettings::default() })
        .unwrap()
}

#[rstest]
fn test_password_messages_in_chinese(cache: InstanceCache) {
    let locale = cache.get_or_create("zh-CN", None).unwrap();

    assert_eq!(locale.text("user.password.error.too-simple", &[]), "密码太简单");

    let group = locale.group("user.password.error").unwrap();
    assert_eq!(group.get("too-short", &["1234a".into()]), "密码太短: 1234a");
}

#[rstest]
fn test_password_messages_in_english(cache: InstanceCache) {
    let path = fixtures_dir().join("en.json");
    let locale = cache.get_or_create("en", Some(path.as_path())).unwrap();

    assert_eq!(
        locale.get("user.password.error.too-simple", &[]).unwrap(),
        Lookup::Text("Password too simple".to_string())
    );
    assert_eq!(
        locale.group("user.password.error").unwrap().get("too-short", &["1234a".into()]),
        "Password too short: 1234a"
    );
    assert_eq!(
        locale.text("user.password.error.length", &[8.into(), 64.into()]),
        "Password must be between 8 and 64 characters"
    );
}

#[rstest]
fn test_sequences_resolve_by_index(cache: InstanceCache) {
    let locale = cache.get_or_create("zh-CN", None).unwrap();

    assert_eq!(locale.text("menu.0", &[]), "首页");
    assert_eq!(locale.text("menu.1", &[]), "设置");
    assert_eq!(locale.text("menu.2", &[]), "");
}

#[rstest]
#[case("user", "name")]
#[case("user.password", "label")]
#[case("user.password.error", "too-simple")]
#[case("user.password.error", "missing")]
fn test_group_and_path_lookups_agree(
    cache: InstanceCache,
    #[case] group_path: &str,
    #[case] key: &str,
) {
    for language in ["zh-CN", "en"] {
        let path = (language == "en").then(|| fixtures_dir().join("en.json"));
        let locale = cache.get_or_create(language, path.as_deref()).unwrap();

        let via_group = locale.group(group_path).unwrap().get(key, &[]);
        let via_path = locale.text(&format!("{group_path}.{key}"), &[]);

        assert_eq!(via_group, via_path);
    }
}

#[rstest]
fn test_capacity_bounds_the_cache() {
    let settings =
        I18nSettings { locales_dir: fixtures_dir(), cache_capacity: 1, ..I18nSettings::default() };
    let cache = InstanceCache::new(settings).unwrap();

    let zh = cache.get_or_create("zh-CN", None).unwrap();
    let group = zh.group("user.password.error").unwrap();
    let en_path = fixtures_dir().join("en.json");
    let en = cache.get_or_create("en", Some(en_path.as_path())).unwrap();

    assert_eq!(cache.languages(), vec!["en"]);
    assert_eq!(group.get("too-simple", &[]), "密码太简单");

    let zh_again = cache.get_or_create("zh-CN", None).unwrap();
    assert!(!Arc::ptr_eq(&zh, &zh_again));
    assert!(!cache.contains("en"));
    assert_eq!(en.text("user.name", &[]), "Username");
}

#[rstest]
fn test_missing_locale_file(cache: InstanceCache) {
    let result = cache.get_or_create("fr", None);

    match result {
        Err(I18nError::SourceNotFound { path, .. }) => {
            assert_eq!(path, fixtures_dir().join("fr.yaml"));
        }
        other => panic!("Expected SourceNotFound, got {other:?}"),
    }
}
