use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose_mode(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// Installs the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise verbose runs get `debug` for this
/// crate and everything else gets `warn`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "warn,images_compressor=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Severity of a console line written by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Info,
    Verbose,
    Warn,
    Error,
}

impl Console {
    fn prefix(self) -> &'static str {
        match self {
            Console::Info => "",
            Console::Verbose => "🔍 ",
            Console::Warn => "⚠️  ",
            Console::Error => "❌ ",
        }
    }

    /// Errors always print; quiet mode hides the rest, and verbose lines
    /// also need verbose mode.
    pub fn enabled(self) -> bool {
        match self {
            Console::Error => true,
            Console::Verbose => is_verbose() && !is_quiet(),
            Console::Info | Console::Warn => !is_quiet(),
        }
    }
}

/// Console output goes to stderr so stdout stays pure JSON.
pub fn console(kind: Console, args: fmt::Arguments<'_>) {
    if kind.enabled() {
        eprintln!("{}{}", kind.prefix(), args);
    }
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::console($crate::logger::Console::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        $crate::logger::console($crate::logger::Console::Verbose, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::console($crate::logger::Console::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::console($crate::logger::Console::Error, format_args!($($arg)*))
    };
}
