//! エラーハンドリング
//!
//! 終了コードは sysexits.h に合わせる（64: 使い方, 66: 入力なし, 69: サービス不可, 70: 内部, 74: I/O）。

/// エラー型
///
/// メッセージと終了コードを 1 つの型で運ぶ。main は `exit_code()` で終了コードを決める。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（使い方の表示対象）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数まわりの不正
    #[error("{0}")]
    Env(String),
    /// 指定 ID のボードが存在しない
    #[error("could not find board with ID: {0}")]
    BoardNotFound(String),
    /// リモートサービス（認証・通信・レート制限など）の失敗
    #[error("{0}")]
    Provider(String),
    /// JSON の解析・生成失敗
    #[error("{0}")]
    Json(String),
    /// ファイル I/O 失敗
    #[error("{0}")]
    Io(String),
    /// 想定外の内部エラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn board_not_found(board_id: impl Into<String>) -> Self {
        Self::BoardNotFound(board_id.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// 使い方を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Json(_) => 65,
            Self::BoardNotFound(_) => 66,
            Self::Provider(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
