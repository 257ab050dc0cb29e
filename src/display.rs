//! Colored console notices.

use colored::Colorize;

/// Print a success notice.
pub fn success(msg: &str) {
    println!("  {}  {}", "✓".green(), msg);
}

/// Print an error notice.
pub fn error(msg: &str) {
    println!("  {}  {}", "✗".red(), msg);
}

/// Print a section header.
pub fn header(msg: &str) {
    println!();
    println!(" {}", msg.cyan().underline());
    println!();
}
