//! 時刻取得 Outbound ポート
//!
//! usecase はこの trait 経由でのみ「現在時刻」を得る。集計ウィンドウの基準時刻もここから取る。

use chrono::{DateTime, Utc};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の `FixedClock`。
pub trait Clock: Send + Sync {
    /// 現在時刻（UTC）
    fn now(&self) -> DateTime<Utc>;
}
