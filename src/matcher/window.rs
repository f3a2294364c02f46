/// Maximum rendered length of a single-text match context, in chars.
pub const MAX_CONTEXT_CHARS: usize = 500;

/// Maximum rendered length of one sentence inside a match window, in chars.
pub const MAX_SENTENCE_CHARS: usize = 200;

/// Marker inserted into a match window where non-matching sentences between
/// two matched ones were elided.
pub const GAP_MARKER: &str = "[...]";

/// Truncate to at most `max` chars, always on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

/// Render the match window for the sentences at `indices` (ascending).
///
/// Each referenced sentence is truncated to [`MAX_SENTENCE_CHARS`]; a
/// [`GAP_MARKER`] entry is inserted wherever two indices are non-consecutive
/// so the reader can see that intervening sentences were elided.
pub(crate) fn render_window<T: AsRef<str>>(sentences: &[T], indices: &[usize]) -> Vec<String> {
    let mut window = Vec::with_capacity(indices.len());
    let mut prev: Option<usize> = None;

    for &idx in indices {
        if let Some(p) = prev {
            if idx > p + 1 {
                window.push(GAP_MARKER.to_string());
            }
        }
        window.push(truncate_chars(sentences[idx].as_ref(), MAX_SENTENCE_CHARS));
        prev = Some(idx);
    }

    window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("", 3), "");
        // Multi-byte chars: cut by char count, not bytes.
        assert_eq!(truncate_chars("grüße", 3), "grü");
    }

    #[test]
    fn test_window_consecutive() {
        let sentences = ["a", "b", "c"];
        let window = render_window(&sentences, &[0, 1]);
        assert_eq!(window, vec!["a", "b"]);
    }

    #[test]
    fn test_window_single_gap() {
        let sentences = ["s0", "s1", "s2", "s3", "s4", "s5"];
        let window = render_window(&sentences, &[0, 1, 5]);
        assert_eq!(window, vec!["s0", "s1", GAP_MARKER, "s5"]);
        let gaps = window.iter().filter(|s| *s == GAP_MARKER).count();
        assert_eq!(gaps, 1);
    }

    #[test]
    fn test_window_truncates_long_sentences() {
        let long = "x".repeat(MAX_SENTENCE_CHARS + 50);
        let sentences = [long.as_str()];
        let window = render_window(&sentences, &[0]);
        assert_eq!(window[0].chars().count(), MAX_SENTENCE_CHARS);
    }
}
