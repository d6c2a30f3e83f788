// Foo Screen services
// Services wrap host primitives: key-value defaults, settings file, clipboard, network.

pub mod clipboard;
pub mod connectivity_probe;
pub mod defaults_store;
pub mod settings_engine;
