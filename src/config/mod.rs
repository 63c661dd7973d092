//! Settings for locale lookup and the settings file loader.
mod loader;
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
    load_settings,
};
pub use types::{
    ConfigError,
    I18nSettings,
    ValidationError,
};
