//! 標準環境変数解決実装（std::env を委譲）

use crate::ports::outbound::{EnvResolver, DEFAULT_API_BASE};
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn api_base(&self) -> String {
        api_base_from(env::var("TRELLO_API_BASE").ok())
    }

    fn log_file(&self) -> Option<PathBuf> {
        env::var("MOVES_LOG_FILE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}

fn api_base_from(value: Option<String>) -> String {
    value
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}
