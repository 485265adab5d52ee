//! 共通ライブラリ
//!
//! `moves` コマンドが使うエラー型・Outbound ポート・標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// Outbound ポート（trait）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
