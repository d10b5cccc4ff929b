//! Plain-text rendering of the board view.

use std::fmt::Write;

use board_client::{BoardApi, BoardView, Mode};
use board_core::CreatedAt;
use chrono::Local;

pub fn render<A: BoardApi>(view: &BoardView<A>) -> String {
    let mut out = String::new();
    let pager = view.pager();

    let _ = writeln!(
        out,
        "== board: page {}/{} ({} posts, {} per page) ==",
        pager.page(),
        view.page_count(),
        view.posts().len(),
        pager.page_size()
    );

    if view.is_loading() {
        out.push_str("loading...\n");
    } else if view.posts().is_empty() {
        out.push_str("no posts yet\n");
    }

    let editing = match view.mode() {
        Mode::Editing(edit) => Some(edit),
        Mode::Idle => None,
    };

    for (i, post) in view.visible_posts().iter().enumerate() {
        let marker = if editing.is_some_and(|e| e.id == post.id) { "*" } else { " " };
        let _ = writeln!(out, "{marker}{:>3}. {}", i + 1, post.text.replace('\n', "\n      "));
        let _ = writeln!(out, "      {}", posted_at(&post.created_at));
    }

    if let Some(edit) = editing {
        let _ = writeln!(out, "editing: {}", edit.buffer);
        if let Some(error) = edit.error {
            let _ = writeln!(out, "  ! {error}");
        }
    }

    let _ = writeln!(out, "draft: {}", view.draft_counter());
    if let Some(error) = view.draft_error() {
        let _ = writeln!(out, "  ! {error}");
    }
    if let Some(error) = view.remote_error() {
        let _ = writeln!(out, "error: {error}");
    }

    out
}

/// Local time when the stored value is readable, otherwise the raw value.
fn posted_at(created_at: &CreatedAt) -> String {
    match created_at.to_datetime() {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => created_at.as_str().to_string(),
    }
}
