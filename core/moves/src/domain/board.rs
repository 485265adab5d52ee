//! ボードとリストのドメイン型

/// ボード ID（ユーザーが指定する識別子。長い ID でも短縮リンクでもよい）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardId(String);

impl BoardId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for BoardId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for BoardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 解決済みのボード（一覧表示・ログ用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSummary {
    pub id: String,
    pub name: Option<String>,
}

/// ボード上のリスト（カードを入れる列）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardList {
    pub id: String,
    pub name: Option<String>,
}

impl BoardList {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }
}
