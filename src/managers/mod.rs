// Foo Screen state managers
// Managers handle stateful operations: recency list, suggestion list, gesture bindings, chrome state.

pub mod gesture_manager;
pub mod history_manager;
pub mod shell_controller;
pub mod suggestion_list;
