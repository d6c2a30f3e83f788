// Foo Screen shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod history;
pub mod settings;
pub mod shell;
pub mod suggestion;
