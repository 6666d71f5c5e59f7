//! Tests for the view module

use super::*;
use crate::config::UiConfig;
use crate::pagination::ListView;
use crate::types::User;
use std::time::Duration;

fn user(id: u64) -> User {
    User {
        id,
        email: format!("user{id}@reqres.in"),
        first_name: "Janet".to_string(),
        last_name: "Weaver".to_string(),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
    }
}

fn settled(items: Vec<User>, has_more: bool) -> ListView {
    ListView {
        items,
        is_loading: false,
        error: None,
        has_more,
        initial_load_settled: true,
        current_page: 1,
    }
}

// ============================================================================
// Screen selection
// ============================================================================

#[test]
fn test_error_replaces_list() {
    let view = ListView {
        error: Some("Failed to fetch users".to_string()),
        ..settled(vec![user(1)], true)
    };

    assert_eq!(Screen::for_view(&view), Screen::Error);
    let out = render(&view, &UiConfig::default());
    assert!(out.contains("Oops! Something went wrong"));
    assert!(out.contains("Failed to fetch users"));
    assert!(out.contains("Try Again"));
    assert!(!out.contains("user1@reqres.in"));
}

#[test]
fn test_initial_loading_shows_skeleton() {
    let view = ListView {
        is_loading: true,
        initial_load_settled: false,
        has_more: true,
        ..ListView::default()
    };

    assert_eq!(Screen::for_view(&view), Screen::InitialLoading);
    let out = render(&view, &UiConfig::default());
    assert!(out.contains("Loading users..."));
    assert_eq!(out.matches('┌').count(), 6);
}

#[test]
fn test_loaded_but_unsettled_shows_list() {
    let view = ListView {
        initial_load_settled: false,
        ..settled(vec![user(1)], true)
    };
    assert_eq!(Screen::for_view(&view), Screen::List);
}

#[test]
fn test_loading_more_shows_small_skeleton() {
    let view = ListView {
        is_loading: true,
        ..settled(vec![user(1), user(2)], true)
    };

    let out = render(&view, &UiConfig::default());
    assert!(out.contains("Discover amazing people"));
    assert!(out.contains("Loading more users..."));
    // 2 user cards + 3 placeholders
    assert_eq!(out.matches('┌').count(), 5);
}

#[test]
fn test_end_of_list_when_done() {
    let view = settled(vec![user(1), user(2), user(3)], false);
    let out = render(&view, &UiConfig::default());

    assert!(out.contains("You've reached the end!"));
    assert!(out.contains("You've loaded all 3 users."));
}

#[test]
fn test_no_end_of_list_for_empty_directory() {
    let view = settled(Vec::new(), false);
    assert!(footer(&view, &UiConfig::default()).is_empty());
}

#[test]
fn test_no_end_of_list_while_more_remain() {
    let view = settled(vec![user(1)], true);
    assert!(!render(&view, &UiConfig::default()).contains("reached the end"));
}

// ============================================================================
// Components
// ============================================================================

#[test]
fn test_user_card_fields() {
    let card = user_card(&user(2));
    assert!(card.contains("Janet Weaver"));
    assert!(card.contains("user2@reqres.in"));
    assert!(card.contains("https://reqres.in/img/faces/2-image.jpg"));
}

#[test]
fn test_error_state_retrying() {
    let out = error_state("Network error", true);
    assert!(out.contains("Retrying..."));
    assert!(!out.contains("Try Again"));
}

#[test]
fn test_splash_frames() {
    assert!(splash_frame(0.0).ends_with("  0%"));
    assert!(splash_frame(0.5).ends_with(" 50%"));
    assert!(splash_frame(1.0).ends_with("100%"));
    assert_eq!(splash_frame(2.0), splash_frame(1.0));
}

#[tokio::test]
async fn test_play_splash_writes_progress() {
    let mut out = Vec::new();
    play_splash(&mut out, Duration::from_millis(40)).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("100%"));
    assert!(text.ends_with('\n'));
}

#[tokio::test]
async fn test_play_splash_zero_duration_is_silent() {
    let mut out = Vec::new();
    play_splash(&mut out, Duration::ZERO).await.unwrap();
    assert!(out.is_empty());
}
