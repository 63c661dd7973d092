//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
};

/// Settings file name looked up in a directory.
pub const CONFIG_FILE_NAME: &str = ".tree-i18n.json";

/// ディレクトリから設定を読み込む
///
/// `.tree-i18n.json` ファイルを探して読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub fn load_from_dir(root: &Path) -> Result<Option<I18nSettings>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: I18nSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// 設定を読み込み、バリデーションする
///
/// `root` が `None` または設定ファイルがない場合はデフォルト値を使う。
/// 相対パスの `localesDir` は `root` 基準に解決する。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_settings(root: Option<&Path>) -> Result<I18nSettings, ConfigError> {
    tracing::debug!("Loading settings for directory: {:?}", root);

    let settings = match root {
        Some(root) => load_from_dir(root)?.map_or_else(I18nSettings::default, |mut settings| {
            if settings.locales_dir.is_relative() {
                settings.locales_dir = root.join(&settings.locales_dir);
            }
            tracing::debug!("Loaded settings: {:?}", settings);
            settings
        }),
        None => I18nSettings::default(),
    };

    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(settings)
}
