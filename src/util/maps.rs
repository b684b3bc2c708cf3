//! Outbound Google Maps navigation links.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only external interface in the app: the assigned-customers view
//! builds a maps search URL from a free-text address and opens it in a new
//! browsing context. No response is consumed.

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

/// Build a Google Maps search URL for a street address.
pub fn maps_search_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode_uri_component(address)
    )
}

/// Percent-encode a query value the way `encodeURIComponent` does:
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )` pass through, everything
/// else (including each UTF-8 continuation byte) is `%XX`-escaped.
pub fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }
    encoded
}

/// Open a URL in a new browsing context. No-op outside the browser.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
