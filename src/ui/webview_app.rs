//! Full-screen WebView shell using `wry` + `tao`.
//!
//! Architecture:
//! - One borderless full-screen window, one web view filling it edge to edge.
//! - `with_initialization_script(chrome script)` injects the overlay, gesture
//!   and keyboard listeners on every page. The bundled start page is served
//!   via the `fooscreen://` custom protocol with the script inlined, because
//!   initialization scripts do not run on custom-protocol pages on Windows
//!   WebView2; the script guards against double installation.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; Rust → JS via
//!   `evaluate_script("__fs_render(..)")`.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Fullscreen, Window, WindowBuilder};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::app::App;
use crate::ipc_handler::{handle_message, message_preview};
use crate::managers::gesture_manager::GestureManagerTrait;
use crate::services::connectivity_probe::NetworkService;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::shell::ShellEffect;

#[derive(Debug)]
enum UserEvent {
    Effect(ShellEffect),
    PageLoad { started: bool, url: String },
    LoadFailed(String),
}

struct BrowserState {
    app: App,
}

const CHROME_JS: &str = include_str!("../../resources/ui/chrome.js");
const CHROME_CSS: &str = include_str!("../../resources/ui/chrome.css");
const INDEX_HTML: &str = include_str!("../../resources/index/index.html");

/// Chrome script prefixed with its runtime configuration.
fn chrome_script(app: &App) -> String {
    let settings = app.settings_engine.get_settings();
    let mut shortcuts: Vec<&String> = app.gesture_manager.bindings().keys().collect();
    shortcuts.sort();
    let config = serde_json::json!({
        "swipe_touches": settings.gestures.swipe_touches,
        "swipe_distance": settings.gestures.swipe_distance,
        "shortcuts": shortcuts,
        "css": CHROME_CSS,
    });
    format!("window.__FS_CONFIG={};\n{}", config, CHROME_JS)
}

/// Start page with the chrome script inlined before `</body>`.
fn start_page_html(script: &str) -> String {
    let inline = format!("<script>{}</script></body>", script);
    INDEX_HTML.replacen("</body>", &inline, 1)
}

fn render_script(effect: &ShellEffect) -> Option<String> {
    match effect {
        ShellEffect::Render(chrome) => serde_json::to_string(chrome)
            .ok()
            .map(|json| format!("if(window.__fs_render)__fs_render({})", json)),
        ShellEffect::Feedback(kind) => {
            let pattern = serde_json::to_string(kind.pattern()).unwrap_or_else(|_| "[]".into());
            Some(format!("if(window.__fs_vibrate)__fs_vibrate({})", pattern))
        }
        ShellEffect::StopLoading => Some("window.stop()".to_string()),
        _ => None,
    }
}

fn dispatch(proxy: &EventLoopProxy<UserEvent>, effects: Vec<ShellEffect>) {
    for effect in effects {
        if proxy.send_event(UserEvent::Effect(effect)).is_err() {
            log::debug!("[EVENT] loop closed, dropping effect");
            return;
        }
    }
}

fn apply_effect(
    effect: ShellEffect,
    webview: &WebView,
    window: &Window,
    network: Option<&NetworkService>,
    proxy: &EventLoopProxy<UserEvent>,
    fullscreen: bool,
) {
    if let Some(js) = render_script(&effect) {
        if let Err(e) = webview.evaluate_script(&js) {
            log::warn!("[JS] {}", e);
        }
        return;
    }

    match effect {
        ShellEffect::LoadUrl(url) => {
            log::info!("[LOAD] {}", url);
            if let Err(e) = webview.load_url(&url) {
                log::warn!("[LOAD] {}: {}", url, e);
            }
        }
        ShellEffect::Reload => {
            log::info!("[RELOAD]");
            if let Err(e) = webview.reload() {
                log::warn!("[RELOAD] {}", e);
            }
        }
        ShellEffect::Probe(url) => match network {
            Some(net) => {
                net.spawn_probe(&url);
            }
            None => log::debug!("[PROBE] network unavailable, skipping {}", url),
        },
        ShellEffect::CheckReachability(url) => {
            if let Some(net) = network {
                let failure_proxy = proxy.clone();
                net.spawn_reachability_check(&url, move |failed| {
                    let _ = failure_proxy.send_event(UserEvent::LoadFailed(failed));
                });
            }
        }
        ShellEffect::SetStatusBarHidden(hidden) => {
            if fullscreen {
                window.set_fullscreen(hidden.then(|| Fullscreen::Borderless(None)));
            }
        }
        ShellEffect::Render(_) | ShellEffect::Feedback(_) | ShellEffect::StopLoading => {}
    }
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let app = App::open_default()?;
    let fullscreen = app.settings_engine.get_settings().general.fullscreen;
    let script = chrome_script(&app);
    let state = Arc::new(Mutex::new(BrowserState { app }));

    let network = match NetworkService::new() {
        Ok(net) => Some(net),
        Err(e) => {
            log::warn!("[NET] {}", e);
            None
        }
    };

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let mut window_builder = WindowBuilder::new()
        .with_title("Foo Screen")
        .with_inner_size(tao::dpi::LogicalSize::new(1024.0, 768.0));
    if fullscreen {
        window_builder = window_builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    let window = window_builder.build(&event_loop)?;

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let start_html = start_page_html(&script);

    let builder = WebViewBuilder::new()
        .with_custom_protocol("fooscreen".into(), move |_wv_id, request| {
            let (status, body) = match request.uri().path() {
                "/" | "/index.html" => (200u16, start_html.clone()),
                _ => (404, String::from("Not found")),
            };
            wry::http::Response::builder()
                .status(status)
                .header("Content-Type", "text/html; charset=utf-8")
                .body(body.into_bytes().into())
                .unwrap_or_else(|_| wry::http::Response::new(Vec::new().into()))
        })
        .with_initialization_script(&script)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            log::debug!("[IPC] {}", message_preview(body, 200));
            let effects = match ipc_state.lock() {
                Ok(mut s) => handle_message(&mut s.app, body),
                Err(_) => return,
            };
            dispatch(&ipc_proxy, effects);
        })
        .with_on_page_load_handler(move |event, url| {
            let started = matches!(event, PageLoadEvent::Started);
            let _ = load_proxy.send_event(UserEvent::PageLoad { started, url });
        })
        .with_new_window_req_handler(move |url, _features| {
            log::info!("[NW] {}", url);
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("Failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    let startup_effects = match state.lock() {
        Ok(mut s) => s.app.startup(),
        Err(_) => Vec::new(),
    };
    dispatch(&proxy, startup_effects);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Ok(mut s) = state.lock() {
                    s.app.shutdown();
                }
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => {
                let effects = match user_event {
                    UserEvent::Effect(effect) => {
                        apply_effect(effect, &webview, &window, network.as_ref(), &proxy, fullscreen);
                        return;
                    }
                    UserEvent::PageLoad { started, url } => {
                        log::debug!("[PAGE] {} {}", if started { "started" } else { "finished" }, url);
                        match state.lock() {
                            Ok(mut s) if started => s.app.controller.on_load_started(&url),
                            Ok(mut s) => s.app.controller.on_load_finished(&url),
                            Err(_) => Vec::new(),
                        }
                    }
                    UserEvent::LoadFailed(url) => match state.lock() {
                        Ok(mut s) => s.app.controller.on_load_failed(&url),
                        Err(_) => Vec::new(),
                    },
                };
                for effect in effects {
                    apply_effect(effect, &webview, &window, network.as_ref(), &proxy, fullscreen);
                }
            }

            _ => {}
        }
    })
}
