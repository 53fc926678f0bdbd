//! tracing の出力先をブラウザのコンソールにする
//!
//! 共通ライブラリの `tracing::error!` / `warn!`（取得失敗、不正レコードの読み飛ばし等）を
//! レベルに応じて `console.error` / `console.warn` / `console.info` / `console.debug` へ送る。
//! wasm32 では時刻取得ができないため、タイムスタンプは出さない。

use gloo::console;
use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// コンソールの出力関数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleLevel {
    pub fn from_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleLevel::Error,
            Level::WARN => ConsoleLevel::Warn,
            Level::INFO => ConsoleLevel::Info,
            _ => ConsoleLevel::Debug,
        }
    }
}

/// 1イベント分をバッファし、破棄時にコンソールへ出力する
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    /// 出力する1行（末尾の改行は除く、空なら None）
    pub fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buf);
        let trimmed = text.trim_end();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = self.line() else {
            return;
        };
        match self.level {
            ConsoleLevel::Error => console::error!(line),
            ConsoleLevel::Warn => console::warn!(line),
            ConsoleLevel::Info => console::info!(line),
            ConsoleLevel::Debug => console::debug!(line),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::from_level(meta.level()))
    }
}

/// グローバルsubscriberを設定（INFO以上）
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        console::warn!(format!("tracingの初期化に失敗: {}", e));
    }
}
