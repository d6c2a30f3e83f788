//! IPC message handler for the injected chrome script.
//!
//! Kept apart from the window code so it can be unit-tested without a web
//! view. `handle_message` parses one JSON message posted through
//! `window.ipc.postMessage()` and dispatches it to the shell controller.

use serde_json::Value;

use crate::app::App;
use crate::managers::gesture_manager::GestureManagerTrait;
use crate::types::shell::{ShellEffect, SwipeDirection};

fn str_param<'a>(msg: &'a Value, key: &str) -> Option<&'a str> {
    msg.get(key).and_then(|v| v.as_str())
}

fn index_param(msg: &Value, key: &str) -> Option<usize> {
    msg.get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| usize::try_from(v).ok())
}

/// At most `max_chars` characters of `body`, cut on a character boundary.
pub fn message_preview(body: &str, max_chars: usize) -> &str {
    body.char_indices()
        .nth(max_chars)
        .map_or(body, |(i, _)| &body[..i])
}

/// Dispatches one IPC message. Malformed or unknown messages yield no effects.
pub fn handle_message(app: &mut App, message: &str) -> Vec<ShellEffect> {
    let msg: Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("[IPC] malformed message: {}", e);
            return Vec::new();
        }
    };
    let Some(cmd) = str_param(&msg, "cmd") else {
        log::debug!("[IPC] message without cmd");
        return Vec::new();
    };

    let controller = &mut app.controller;
    match cmd {
        "ui_ready" => controller.on_ui_ready(),

        "swipe" => {
            let direction = match str_param(&msg, "direction") {
                Some("up") => SwipeDirection::Up,
                Some("down") => SwipeDirection::Down,
                _ => return Vec::new(),
            };
            let touches = msg
                .get("touches")
                .map(|v| v.as_u64().and_then(|n| u32::try_from(n).ok()));
            let touches = match touches {
                None => app.gesture_manager.swipe_touches(),
                Some(Some(n)) => n,
                Some(None) => return Vec::new(),
            };
            match app.gesture_manager.swipe_action(direction, touches) {
                Some(action) => controller.perform(action),
                None => Vec::new(),
            }
        }

        "shortcut" => match str_param(&msg, "keys")
            .and_then(|keys| app.gesture_manager.action_for_keys(keys))
        {
            Some(action) => controller.perform(action),
            None => Vec::new(),
        },

        "submit" => controller.submit(str_param(&msg, "text").unwrap_or("")),

        "dismiss" => controller.dismiss(),

        "select_row" => match (index_param(&msg, "section"), index_param(&msg, "row")) {
            (Some(section), Some(row)) => controller.select_row(section, row),
            _ => Vec::new(),
        },

        "clear_history" => controller.request_clear_history(),

        "confirm_clear" => {
            let confirmed = msg
                .get("confirmed")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            controller.confirm_clear_history(confirmed)
        }

        "keyboard" => {
            let visible = msg.get("visible").and_then(|v| v.as_bool()).unwrap_or(false);
            let height = msg.get("height").and_then(|v| v.as_f64()).unwrap_or(0.0);
            controller.on_keyboard(visible, height)
        }

        "progress" => match msg.get("value").and_then(|v| v.as_f64()) {
            Some(value) => controller.on_progress(value),
            None => Vec::new(),
        },

        "url_changed" => {
            if let Some(url) = str_param(&msg, "url") {
                controller.on_url_changed(url);
            }
            Vec::new()
        }

        "alert_ack" => controller.acknowledge_alert(),

        other => {
            log::debug!("[IPC] unknown cmd {}", other);
            Vec::new()
        }
    }
}
