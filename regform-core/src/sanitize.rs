//! HTML-metacharacter escaping for free-text input.

/// Trims the input, then escapes `<`, `>`, `"` and `'` in that order.
///
/// `&` is left alone: pre-existing entities survive a second pass, and a
/// literal ampersand passes through unescaped. That is the contract, not an
/// oversight to fix here.
pub fn sanitize_input(input: &str) -> String {
    input
        .trim()
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Content for the sanitization preview panel: `Some(sanitized)` when
/// escaping would change the raw input, `None` when it is already clean and
/// the panel shows its all-clear notice instead.
pub fn sanitize_preview(input: &str) -> Option<String> {
    let sanitized = sanitize_input(input);
    if sanitized == input { None } else { Some(sanitized) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_html_metacharacters() {
        assert_eq!(
            sanitize_input("<script>alert(\"XSS\")</script>"),
            "&lt;script&gt;alert(&quot;XSS&quot;)&lt;/script&gt;"
        );
        assert_eq!(sanitize_input("it's <b>bold</b>"), "it&#39;s &lt;b&gt;bold&lt;/b&gt;");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(sanitize_input("  hello  "), "hello");
        assert_eq!(sanitize_input("\t<a>\n"), "&lt;a&gt;");
    }

    #[test]
    fn test_ampersand_passes_through() {
        assert_eq!(sanitize_input("fish & chips"), "fish & chips");
        // An already-escaped entity is not double-escaped.
        assert_eq!(sanitize_input("&lt;div&gt;"), "&lt;div&gt;");
    }

    #[test]
    fn test_output_has_no_metacharacters() {
        for input in ["<>\"'", "a<b>c\"d'e", "  '\"<>  ", "plain"] {
            let out = sanitize_input(input);
            assert!(!out.contains('<'));
            assert!(!out.contains('>'));
            assert!(!out.contains('"'));
            assert!(!out.contains('\''));
        }
    }

    #[test]
    fn test_idempotent_without_ampersands() {
        for input in ["hello world", "  spaced  ", "no specials at all"] {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once);
        }
    }

    #[test]
    fn test_preview_only_when_input_changes() {
        assert_eq!(sanitize_preview("clean text"), None);
        assert_eq!(
            sanitize_preview("<b>x</b>"),
            Some("&lt;b&gt;x&lt;/b&gt;".to_string())
        );
        // Trimming alone counts as a change.
        assert_eq!(sanitize_preview(" padded "), Some("padded".to_string()));
    }
}
