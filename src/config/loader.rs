//! `.l10n-cache.json` の読み込み

use std::path::Path;

use super::{
    CacheSettings,
    ConfigError,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".l10n-cache.json";

impl CacheSettings {
    /// `root` 直下の `.l10n-cache.json` を読み込み、検証済みの設定を返す
    ///
    /// ファイルが無ければデフォルト設定。書かれていないキーもデフォルト値になる。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー (全件まとめて返す)
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(CONFIG_FILE_NAME);

        let settings = if config_path.is_file() {
            tracing::debug!(path = %config_path.display(), "Loading configuration");
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str::<Self>(&content)?
        } else {
            tracing::debug!(path = %config_path.display(), "Configuration file not found, using defaults");
            Self::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(settings)
    }
}
