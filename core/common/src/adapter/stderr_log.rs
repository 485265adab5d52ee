//! 人間向けログ（stderr へ要点のみ）と複数 Log への分配

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields の要点だけを短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> Option<String> {
    let fields = record.fields.as_ref().filter(|f| !f.is_empty())?;
    let s = serde_json::to_string(fields).ok()?;
    if s.len() <= FIELDS_SUMMARY_MAX {
        return Some(s);
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    Some(format!("{}... (len={})", truncated, s.len()))
}

/// 1 行に整形する（stderr 出力用）
pub fn format_line(record: &LogRecord) -> String {
    let level = match record.level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
    };
    let mut line = format!("[{}] {}: {}", record.ts, level, record.message);
    if let Some(summary) = fields_summary(record) {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// しきい値以上のレコードを stderr に出す Log 実装（-v / --verbose 用）
#[derive(Debug, Clone)]
pub struct StderrLog {
    max_level: LogLevel,
}

impl StderrLog {
    /// `max_level` より詳細なレコードは捨てる（Debug なら全件）
    pub fn new(max_level: LogLevel) -> Self {
        Self { max_level }
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level <= self.max_level {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}

/// 複数の Log へ同じレコードを流す
///
/// 一部の書き出しに失敗しても残りには流し、最初のエラーを返す。
#[derive(Clone, Default)]
pub struct FanoutLog {
    targets: Vec<Arc<dyn Log>>,
}

impl FanoutLog {
    pub fn new(targets: Vec<Arc<dyn Log>>) -> Self {
        Self { targets }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Log for FanoutLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for target in &self.targets {
            if let Err(e) = target.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
