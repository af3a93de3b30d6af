//! Terminal output utilities.
//!
//! Box drawing, entropy figures, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Horizontal rule inside a box.
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// ┌─ Title ───────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {title} ");
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content               │
pub fn box_line(content: &str) {
    println!("{}", pad_line(content));
}

pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {content} │");
    }
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help option row: flag column, then the wrapped description.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 24;
    let desc_col = BOX_WIDTH - 4 - flag_col;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > desc_col {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let mut first = true;
    for line in lines {
        let lead = if first { flag } else { "" };
        box_line(&format!("{lead:<flag_col$}{line}"));
        first = false;
    }
    if first {
        box_line(flag);
    }
}

fn pad_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Password entropy in bits for a uniform draw.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escape_codes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
    }

    #[test]
    fn padded_lines_share_a_width() {
        let a = pad_line("short");
        let b = pad_line(&format!("{BOLD}styled text{RESET}"));
        assert_eq!(console_width(&a), BOX_WIDTH);
        assert_eq!(console_width(&b), BOX_WIDTH);
    }

    #[test]
    fn entropy_bits() {
        assert_eq!(calculate_entropy(8, 0), 0.0);
        assert!((calculate_entropy(8, 26) - 37.6).abs() < 0.1);
        assert!((calculate_entropy(25, 74) - 155.2).abs() < 0.1);
    }

    #[test]
    fn strength_labels() {
        assert_eq!(entropy_strength(18.8), "Weak");
        assert_eq!(entropy_strength(37.6), "Fair");
        assert_eq!(entropy_strength(95.3), "Strong");
        assert_eq!(entropy_strength(155.2), "Very Strong");
    }
}
