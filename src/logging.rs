//! Log output for the browser console.
//!
//! Events are emitted with `tracing` throughout the crate. On wasm32 a fmt
//! subscriber formats each event without timestamps or ANSI colors and hands
//! the line to the `console` method matching its level, so warnings show up
//! as warnings in devtools.

use tracing::level_filters::LevelFilter;
use tracing::Level;

/// Level used until the page asks for another one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Browser console method used for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            Level::DEBUG => Self::Log,
            _ => Self::Debug,
        }
    }
}

/// Parse a level name such as `"debug"` or `"off"`, case-insensitively.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

#[cfg(target_arch = "wasm32")]
pub use console::init;

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::level_filters::LevelFilter;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::reload;
    use tracing_subscriber::util::SubscriberInitExt;
    use wasm_bindgen::JsValue;

    use super::ConsoleMethod;

    thread_local! {
        static RELOAD: std::cell::RefCell<Option<reload::Handle<LevelFilter, tracing_subscriber::Registry>>> =
            const { std::cell::RefCell::new(None) };
    }

    /// Install the console subscriber, or change its level if already installed.
    pub fn init(level: LevelFilter) {
        let updated = RELOAD.with(|slot| {
            slot.borrow()
                .as_ref()
                .map(|handle| handle.modify(|filter| *filter = level).is_ok())
        });
        if updated.is_some() {
            return;
        }

        let (filter, handle) = reload::Layer::new(level);
        let fmt = tracing_subscriber::fmt::layer()
            .with_writer(ConsoleMakeWriter)
            .with_ansi(false)
            .with_level(false)
            .without_time();
        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt)
            .try_init()
            .is_ok();
        if installed {
            RELOAD.with(|slot| *slot.borrow_mut() = Some(handle));
        }
    }

    struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }

    /// Buffers one formatted event and flushes it to the console on drop.
    struct ConsoleWriter {
        method: ConsoleMethod,
        buf: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(level: Level) -> Self {
            Self {
                method: ConsoleMethod::for_level(level),
                buf: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buf);
            let line = JsValue::from_str(text.trim_end());
            match self.method {
                ConsoleMethod::Error => web_sys::console::error_1(&line),
                ConsoleMethod::Warn => web_sys::console::warn_1(&line),
                ConsoleMethod::Info => web_sys::console::info_1(&line),
                ConsoleMethod::Log => web_sys::console::log_1(&line),
                ConsoleMethod::Debug => web_sys::console::debug_1(&line),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" off "), Some(LevelFilter::OFF));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_warnings_use_console_warn() {
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Log);
    }
}
