//! moves コマンドの enum（Command Pattern）
//!
//! ボード一覧表示とレポート作成の分岐を enum で明示する。

use std::path::PathBuf;

use crate::domain::BoardId;

/// API の認証情報（key と token）
///
/// Debug ではトークンを伏せる（ログに出さないため）。
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub token: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("token", &"***")
            .finish()
    }
}

/// moves の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum MovesCommand {
    /// ヘルプ表示
    Help,
    /// ボード ID 未指定: 利用可能なボードを一覧表示して終了
    ListBoards { credentials: Credentials },
    /// ボードの最近の移動を CSV に書き出す
    Report {
        credentials: Credentials,
        board_id: BoardId,
        output_file: PathBuf,
        days: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_token() {
        let c = Credentials::new("my-key", "secret-token");
        let s = format!("{:?}", c);
        assert!(s.contains("my-key"));
        assert!(!s.contains("secret-token"));
    }
}
