//! キャッシュ設定の読み込みと検証
mod loader;
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use types::{
    CacheSettings,
    ConfigError,
    ValidationError,
};
