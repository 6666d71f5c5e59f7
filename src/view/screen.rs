//! Chooses what the list screen shows for a given [`ListView`]

use super::components::{end_of_list, error_state, header, loading_skeleton, user_card};
use crate::config::UiConfig;
use crate::pagination::ListView;

/// Layout of the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// An error is pending; the error view replaces the list
    Error,
    /// The first page is loading
    InitialLoading,
    /// Users, plus whatever footer applies
    List,
}

impl Screen {
    /// Pick the layout for a view
    pub fn for_view(view: &ListView) -> Self {
        if view.error.is_some() {
            Self::Error
        } else if !view.initial_load_settled && view.is_loading {
            Self::InitialLoading
        } else {
            Self::List
        }
    }
}

/// What goes under the users: the "more" skeleton and the end banner
pub fn footer(view: &ListView, ui: &UiConfig) -> String {
    let mut out = String::new();
    if view.is_loading && view.initial_load_settled {
        out.push_str(&loading_skeleton(
            ui.more_skeleton_count,
            "Loading more users...",
        ));
    }
    if !view.has_more && !view.items.is_empty() {
        out.push_str(&end_of_list(view.items.len()));
    }
    out
}

/// Render the whole list screen
pub fn render(view: &ListView, ui: &UiConfig) -> String {
    match Screen::for_view(view) {
        Screen::Error => error_state(view.error.as_deref().unwrap_or_default(), view.is_loading),
        Screen::InitialLoading => {
            let mut out = header(false);
            out.push_str(&loading_skeleton(ui.skeleton_count, "Loading users..."));
            out
        }
        Screen::List => {
            let mut out = header(true);
            for user in &view.items {
                out.push_str(&user_card(user));
            }
            out.push_str(&footer(view, ui));
            out
        }
    }
}
