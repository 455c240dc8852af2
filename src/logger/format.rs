//! Log formatting and output
//!
//! Console lines go to stderr (stdout is reserved for command reports) with
//! colored tag/level columns; long messages wrap at word boundaries under the
//! message column. File lines are plain text with a full timestamp.

use super::file::write_to_file;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, Write};

const TAG_WIDTH: usize = 10;
const LOG_TYPE_WIDTH: usize = 8;

/// "HH:MM:SS " + "[TAG] " + "[LEVEL] "
const PREFIX_WIDTH: usize = 9 + TAG_WIDTH + 3 + LOG_TYPE_WIDTH + 3;

/// Maximum line length before wrapping
const MAX_LINE_LENGTH: usize = 140;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, log_type: &str, message: &str) {
    let now = Local::now();
    let time = now.format("%H:%M:%S").to_string();
    let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();

    let lines = wrap_text(message, MAX_LINE_LENGTH - PREFIX_WIDTH);
    let tag_plain = tag.to_plain_string();

    let mut err = stderr().lock();
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            let _ = writeln!(
                err,
                "{} [{}] [{}] {}",
                time.dimmed(),
                format_tag(&tag),
                format_log_type(log_type),
                line
            );
        } else {
            let _ = writeln!(err, "{}{}", " ".repeat(PREFIX_WIDTH), line);
        }
        write_to_file(&format!("{} [{}] [{}] {}", timestamp, tag_plain, log_type, line));
    }
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::Registry => label.bright_cyan().bold(),
        LogTag::TokenList => label.bright_green().bold(),
        LogTag::Ingest => label.bright_magenta().bold(),
        LogTag::Logo => label.bright_blue().bold(),
        LogTag::Api => label.bright_purple().bold(),
    }
}

fn format_log_type(log_type: &str) -> ColoredString {
    let label = format!("{:<width$}", log_type, width = LOG_TYPE_WIDTH);
    match log_type.to_uppercase().as_str() {
        "ERROR" => label.bright_red().bold(),
        "WARNING" => label.bright_yellow().bold(),
        _ => label.white().bold(),
    }
}

/// Wrap text at word boundaries, respecting existing newlines
///
/// Words longer than `max_width` (URLs, addresses) are split by characters.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(20);
    let mut result = Vec::new();

    for line in text.split('\n') {
        let mut current = String::new();
        for word in line.split_whitespace() {
            let mut word: String = word.to_string();
            while word.chars().count() > max_width {
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
                let head: String = word.chars().take(max_width).collect();
                word = word.chars().skip(max_width).collect();
                result.push(head);
            }
            if current.is_empty() {
                current = word;
            } else if current.chars().count() + 1 + word.chars().count() <= max_width {
                current.push(' ');
                current.push_str(&word);
            } else {
                result.push(std::mem::replace(&mut current, word));
            }
        }
        result.push(current);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_short_lines() {
        assert_eq!(wrap_text("created 0xABC", 80), vec!["created 0xABC"]);
    }

    #[test]
    fn test_wrap_splits_on_words_and_newlines() {
        let lines = wrap_text("aaaa bbbb cccc dddd eeee ffff\nsecond", 20);
        assert_eq!(lines, vec!["aaaa bbbb cccc dddd", "eeee ffff", "second"]);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let address = "0x".to_string() + &"a".repeat(40);
        let lines = wrap_text(&address, 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.concat(), address);
    }
}
