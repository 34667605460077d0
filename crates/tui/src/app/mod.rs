use crate::input::InputState;
use crate::keybinds::Keybinds;
use crate::ui::layout::LayoutState;
use crate::ui::panel::PanelType;
use crate::ui::theme::Theme;
use crate::Config;
use anyhow::Result;
use chrono::{DateTime, Local};
use gr_fields_getresponse::{
    ApiError, CustomField, FieldSource, GetResponseApi, CUSTOM_FIELD_COLUMNS,
};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use ratatui::Frame;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

mod actions;
mod effects;
mod input;
mod render;
mod state;
mod types;

pub use effects::API_KEY_ENV;
pub use state::App;
pub use types::AppAsyncEvent;

impl App {
    pub(super) fn report_error(&mut self, error: &ApiError, api_key: &str) {
        self.error_message = error.user_message().to_string();
        tracing::warn!(
            "Failed to fetch custom fields: {}",
            Self::redact_sensitive(&error.to_string(), api_key)
        );
    }

    pub(super) fn clear_error(&mut self) {
        self.error_message.clear();
    }

    /// Masks bearer headers and whole-token occurrences of `api_key`; a match
    /// that is part of a longer alphanumeric run is left alone.
    fn redact_sensitive(input: &str, api_key: &str) -> String {
        let input = input.replace("Bearer ", "Bearer [REDACTED]");
        if api_key.is_empty() {
            return input;
        }

        let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '-';
        let mut redacted = String::with_capacity(input.len());
        let mut last = 0;
        for (start, matched) in input.match_indices(api_key) {
            if start < last {
                continue;
            }
            let end = start + matched.len();
            let before = input[..start].chars().next_back();
            let after = input[end..].chars().next();
            if before.is_some_and(is_word) || after.is_some_and(is_word) {
                continue;
            }
            redacted.push_str(&input[last..start]);
            redacted.push_str("[REDACTED]");
            last = end;
        }
        redacted.push_str(&input[last..]);
        redacted
    }

    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }
}
