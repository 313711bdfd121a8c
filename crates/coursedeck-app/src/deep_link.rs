//! URL fragment deep links.
//!
//! The fragment identifier mirrors the active lesson id. History entries are
//! replaced, never pushed, so back/forward is not lesson-aware.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

/// Characters escaped when writing a lesson id into a fragment.
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// Decoded fragment of `href`, without the leading `#`.
///
/// Returns `None` for unparsable URLs and empty fragments.
pub fn fragment_of(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    let raw = url.fragment()?;
    if raw.is_empty() {
        return None;
    }
    Some(percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// `href` with its fragment replaced by `lesson_id`.
///
/// Unparsable input is returned as a bare `#lesson_id`, which the history
/// API resolves relative to the current document.
pub fn with_fragment(href: &str, lesson_id: &str) -> String {
    let encoded = utf8_percent_encode(lesson_id, FRAGMENT).to_string();
    match Url::parse(href) {
        Ok(mut url) => {
            url.set_fragment(Some(&encoded));
            url.to_string()
        }
        Err(_) => format!("#{encoded}"),
    }
}
