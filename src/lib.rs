//! l10n-json-cache
//!
//! コンパイル済み gettext カタログ (`.mo`) から JSON の翻訳アーティファクトを生成・検証し、
//! ドメインごとの翻訳テーブルから翻訳を返すキャッシュ

pub mod artifact;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod fs;
pub mod hooks;
pub mod registry;
pub mod scanner;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use cache::TranslationCache;
pub use hooks::TextDomainHooks;
pub use registry::DomainRegistry;
