use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Level
///

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, CandidType, Display, Serialize, Deserialize,
)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

impl Level {
    #[must_use]
    pub const fn color(self) -> (&'static str, &'static str) {
        match self {
            Self::Ok => ("\x1b[32m", "\x1b[0m"),
            Self::Info => ("\x1b[34m", "\x1b[0m"),
            Self::Warn => ("\x1b[33m", "\x1b[0m"),
            Self::Error => ("\x1b[31m", "\x1b[0m"),
            Self::Debug => ("", ""),
        }
    }
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Config,
    Registrar,
    Registry,
    Resolver,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some(&$topic.to_string()), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<&str>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let level = $level;
        let topic_opt: Option<&str> = $topic;
        let message = format!($fmt $(, $arg)*);

        $crate::log::__emit(&$crate::log::format_line(level, topic_opt, &message));
    }};
}

/// Render one log line: a centered, colored level label then the message,
/// prefixed with `[topic]` when present.
#[must_use]
pub fn format_line(level: Level, topic: Option<&str>, message: &str) -> String {
    let (color, reset) = level.color();
    let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());

    match topic {
        Some(t) => format!("{label}| [{t}] {message}"),
        None => format!("{label}| {message}"),
    }
}

///
/// Helpers
///

#[doc(hidden)]
pub fn __emit(line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        ic_cdk::println!("{line}");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        println!("{line}");
    }
}

///
/// TESTS
///
