use std::str::FromStr;

use tracing::Level;

/// JSON lines for CloudWatch, which stamps each record itself.
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_current_span(false)
        .with_span_list(false)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_line_number(true)
        .init();
}

pub fn parse_level(value: &str) -> Option<Level> {
    Level::from_str(value.trim()).ok()
}
