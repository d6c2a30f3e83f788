//! Foo Screen window layer.
//!
//! Uses `wry` for the system web view:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The browser chrome is HTML/CSS/JS injected into every page and talks to
//! the Rust side through wry IPC.

pub mod webview_app;
