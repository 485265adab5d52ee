//! 集計対象期間（現在時刻から N 日さかのぼった時刻を下限とする）

use chrono::{DateTime, Duration, Utc};

/// 既定の期間（日数）
pub const DEFAULT_WINDOW_DAYS: u32 = 8;

/// 集計対象期間。下限時刻ちょうどは対象に含む。
///
/// 実行開始時に一度だけ作り、明示的に渡して使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    cutoff: DateTime<Utc>,
}

impl ActivityWindow {
    /// `now` から `days` 日前を下限にする
    pub fn trailing_days(now: DateTime<Utc>, days: u32) -> Self {
        let cutoff = now
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { cutoff }
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.cutoff
    }
}
