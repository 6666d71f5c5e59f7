//! Text renderers for the pieces of the list screen

use crate::types::User;
use std::fmt::Write as _;

const CARD_WIDTH: usize = 48;

/// Placeholder cards shown while users load
pub fn loading_skeleton(count: usize, message: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "⟳ {message}");
    for _ in 0..count {
        let _ = writeln!(out, "┌{}┐", "─".repeat(CARD_WIDTH));
        let _ = writeln!(out, "│ ░░░░  {:<width$}│", "░".repeat(24), width = CARD_WIDTH - 7);
        let _ = writeln!(out, "│       {:<width$}│", "░".repeat(16), width = CARD_WIDTH - 7);
        let _ = writeln!(out, "└{}┘", "─".repeat(CARD_WIDTH));
    }
    out
}

/// One user
pub fn user_card(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "┌{}┐", "─".repeat(CARD_WIDTH));
    let _ = writeln!(out, "│ {:<width$}│", user.full_name(), width = CARD_WIDTH - 1);
    let _ = writeln!(out, "│ {:<width$}│", user.email, width = CARD_WIDTH - 1);
    let _ = writeln!(out, "│ {:<width$}│", user.avatar, width = CARD_WIDTH - 1);
    let _ = writeln!(out, "└{}┘", "─".repeat(CARD_WIDTH));
    out
}

/// The error view; replaces the list while an error is pending
pub fn error_state(message: &str, retrying: bool) -> String {
    let action = if retrying { "Retrying..." } else { "Try Again" };
    format!("⚠  Oops! Something went wrong\n{message}\n[ {action} ]\n")
}

/// Banner shown once every page has been loaded
pub fn end_of_list(total_users: usize) -> String {
    format!(
        "You've reached the end!\nYou've loaded all {total_users} users. No more users to display.\n"
    )
}

/// Title line of the list
pub fn header(with_tagline: bool) -> String {
    if with_tagline {
        "Users\nDiscover amazing people from around the world\n".to_string()
    } else {
        "Users\n".to_string()
    }
}
