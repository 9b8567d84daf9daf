//! Opt-in diagnostic output on stderr
//!
//! `JSPARENS_DEBUG=1` (or `all`) turns on every topic; a comma-separated list
//! such as `JSPARENS_DEBUG=parens` limits output to those topics.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Set by [`enable_debug`]; overrides the environment
static FORCED: AtomicBool = AtomicBool::new(false);

/// Topics selected through the environment, read once
static ENV_TOPICS: OnceLock<Topics> = OnceLock::new();

enum Topics {
    None,
    All,
    Only(Vec<String>),
}

fn env_topics() -> &'static Topics {
    ENV_TOPICS.get_or_init(|| match std::env::var("JSPARENS_DEBUG") {
        Err(_) => Topics::None,
        Ok(value) => match value.trim() {
            "" | "0" => Topics::None,
            "1" | "all" => Topics::All,
            list => Topics::Only(
                list.split(',')
                    .map(|topic| topic.trim().to_string())
                    .filter(|topic| !topic.is_empty())
                    .collect(),
            ),
        },
    })
}

/// Enable debug output for every topic
pub fn enable_debug() {
    FORCED.store(true, Ordering::Relaxed);
}

/// Check if debug output is enabled for `topic`
pub fn is_debug_enabled(topic: &str) -> bool {
    if FORCED.load(Ordering::Relaxed) {
        return true;
    }
    match env_topics() {
        Topics::None => false,
        Topics::All => true,
        Topics::Only(topics) => topics.iter().any(|t| t == topic),
    }
}

/// Print a `[topic]`-prefixed message only if that topic is enabled
#[macro_export]
macro_rules! debug_println {
    ($topic:literal, $($arg:tt)*) => {
        if $crate::debug::is_debug_enabled($topic) {
            eprintln!("[{}] {}", $topic, format_args!($($arg)*));
        }
    };
}
