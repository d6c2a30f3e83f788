//! Property-based tests for address bar input handling.
//!
//! Scheme completion must be idempotent and must never touch input that
//! already carries an http(s) scheme; resolved addresses always parse.

use fooscreen::managers::shell_controller::{complete_scheme, resolve_address};
use fooscreen::services::clipboard::{clipboard_url, looks_like_web_url, MemoryClipboard};
use proptest::prelude::*;

fn arb_host() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{0,12}", prop_oneof![Just(".com"), Just(".io"), Just(".net")])
        .prop_map(|(name, tld)| format!("{}{}", name, tld))
}

fn arb_path() -> impl Strategy<Value = String> {
    proptest::option::of("/[a-z0-9]{1,10}").prop_map(|p| p.unwrap_or_default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn complete_scheme_is_idempotent(input in "[ -~]{0,40}") {
        let once = complete_scheme(&input);
        prop_assert_eq!(complete_scheme(&once), once.clone());
        prop_assert!(looks_like_web_url(&once));
    }

    #[test]
    fn schemed_input_is_untouched(
        scheme in prop_oneof![Just("http://"), Just("https://")],
        host in arb_host(),
        path in arb_path(),
    ) {
        let input = format!("{}{}{}", scheme, host, path);
        prop_assert_eq!(complete_scheme(&input), input.clone());
        prop_assert_eq!(resolve_address(&input), Some(input));
    }

    #[test]
    fn bare_host_gets_http(host in arb_host(), path in arb_path()) {
        let input = format!("{}{}", host, path);
        prop_assert_eq!(resolve_address(&input), Some(format!("http://{}", input)));
    }

    #[test]
    fn resolved_addresses_parse(input in "[ -~]{0,40}") {
        if let Some(resolved) = resolve_address(&input) {
            let parsed = url::Url::parse(&resolved);
            prop_assert!(parsed.is_ok());
            prop_assert!(parsed.unwrap().has_host());
        }
    }

    #[test]
    fn clipboard_gate_matches_prefix(text in "[ -~]{0,40}") {
        let mut clip = MemoryClipboard::new(Some(&text));
        let expected = text.starts_with("http://") || text.starts_with("https://");
        prop_assert_eq!(clipboard_url(&mut clip).is_some(), expected);
    }
}
