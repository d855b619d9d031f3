//! XSS scrubbing for free-text form input.

use regex::Regex;
use std::sync::LazyLock;

// `<script>` and `<style>` go with their content, every other tag loses only
// its markup.
static EMBEDDED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("embedded code pattern")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static JS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("scheme pattern"));
static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+=").expect("handler pattern"));

/// Strips markup, `javascript:` schemes and inline `on*=` handlers, then trims.
pub fn sanitize_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let without_code = EMBEDDED_CODE.replace_all(input, "");
    let without_tags = TAG.replace_all(&without_code, "");
    let without_scheme = JS_SCHEME.replace_all(&without_tags, "");
    let cleaned = EVENT_HANDLER.replace_all(&without_scheme, "");

    cleaned.trim().to_string()
}
