//! カードの移動（リストからリストへの遷移）

use chrono::{DateTime, Utc};

/// 1 回分の移動イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub instant: Option<DateTime<Utc>>,
    pub source_list_name: Option<String>,
    pub destination_list_name: Option<String>,
}

impl Movement {
    pub fn new(
        instant: DateTime<Utc>,
        source_list_name: impl Into<String>,
        destination_list_name: impl Into<String>,
    ) -> Self {
        Self {
            instant: Some(instant),
            source_list_name: Some(source_list_name.into()),
            destination_list_name: Some(destination_list_name.into()),
        }
    }
}

/// 新しい移動が先頭になるよう並べ替える。
///
/// 安定ソートなので同時刻の移動は受け取った順を保つ。時刻の無い移動は末尾。
pub fn sort_most_recent_first(movements: &mut [Movement]) {
    movements.sort_by(|a, b| b.instant.cmp(&a.instant));
}
