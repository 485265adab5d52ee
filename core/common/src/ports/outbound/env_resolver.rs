//! 環境変数解決 Outbound ポート
//!
//! API の接続先やログファイルの既定値を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use std::path::PathBuf;

/// Trello REST API の既定ベース URL
pub const DEFAULT_API_BASE: &str = "https://api.trello.com/1";

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// API ベース URL
    ///
    /// 優先順位:
    /// 1. TRELLO_API_BASE（空でなければ、末尾の `/` は除く）
    /// 2. DEFAULT_API_BASE
    fn api_base(&self) -> String;

    /// ログファイルのパス（MOVES_LOG_FILE が空でなければ）
    fn log_file(&self) -> Option<PathBuf>;
}
