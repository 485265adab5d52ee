//! カード・ラベルのドメイン型
//!
//! プロバイダから受け取ったままの読み取り専用データ。欠けている属性は None で表す。

use chrono::{DateTime, TimeZone, Utc};

/// カードに付いたラベル（表示名のみ使う）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: Option<String>,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// カード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// プロバイダ上の ID（先頭 8 桁の 16 進数が作成時刻）
    pub id: String,
    pub short_id: Option<u64>,
    pub name: Option<String>,
    /// 表示順のまま
    pub labels: Vec<Label>,
    /// 何らかの変更が最後にあった時刻
    pub last_activity: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
}

impl Card {
    /// ID だけを持つカードを作る。作成時刻は ID から復元する。
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let created = created_at_from_id(&id);
        Self {
            id,
            short_id: None,
            name: None,
            labels: Vec::new(),
            last_activity: None,
            created,
        }
    }

    /// 先頭 2 つのラベル名（3 つ目以降は使わない）
    pub fn label_slots(&self) -> (Option<&str>, Option<&str>) {
        let slot = |i: usize| self.labels.get(i).and_then(|l| l.name.as_deref());
        (slot(0), slot(1))
    }
}

/// ID の先頭 8 桁（16 進数の Unix 秒）から作成時刻を復元する
pub fn created_at_from_id(id: &str) -> Option<DateTime<Utc>> {
    let hex = id.get(..8)?;
    let secs = i64::from_str_radix(hex, 16).ok()?;
    Utc.timestamp_opt(secs, 0).single()
}
