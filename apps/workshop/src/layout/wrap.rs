//! Greedy word wrap against Helvetica metrics.
//!
//! Words are never split. A word wider than the line gets a line of its own and
//! is the only case where a produced line exceeds `max_width_pt`.

use crate::layout::font_metrics::FontMetricTable;

/// Breaks `text` into lines no wider than `max_width_pt` at `size_pt`.
///
/// Runs of whitespace collapse to a single space; an all-whitespace input
/// produces no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    let space_w = metrics.space_width() * size_pt;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.width_pt(word, size_pt);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width_pt {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{get_metrics, Face};
    use proptest::prelude::*;

    #[test]
    fn test_empty_and_blank_inputs_produce_no_lines() {
        let metrics = get_metrics(Face::Regular);
        assert!(wrap_text("", metrics, 10.0, 100.0).is_empty());
        assert!(wrap_text("   \n\t ", metrics, 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        let metrics = get_metrics(Face::Regular);
        let lines = wrap_text("Define learning in one sentence.", metrics, 10.0, 500.0);
        assert_eq!(lines, vec!["Define learning in one sentence."]);
    }

    #[test]
    fn test_long_text_wraps_at_word_boundaries() {
        let metrics = get_metrics(Face::Regular);
        let text = "Working memory is limited. Extraneous cognitive load reduces the \
                    capacity available for learning.";
        let lines = wrap_text(text, metrics, 13.0, 200.0);
        assert!(lines.len() >= 3, "expected several lines, got {lines:?}");
        for line in &lines {
            assert!(metrics.width_pt(line, 13.0) <= 200.0 + 1e-3, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let metrics = get_metrics(Face::Bold);
        let lines = wrap_text("a Supercalifragilistic b", metrics, 20.0, 40.0);
        assert_eq!(lines, vec!["a", "Supercalifragilistic", "b"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let metrics = get_metrics(Face::Regular);
        let lines = wrap_text("  one\n\ntwo   three ", metrics, 10.0, 1000.0);
        assert_eq!(lines, vec!["one two three"]);
    }

    fn words() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Za-z0-9,.\\-]{1,12}", 0..40)
    }

    proptest! {
        #[test]
        fn prop_rejoined_lines_reproduce_input(words in words(), width in 120.0f32..600.0) {
            let metrics = get_metrics(Face::Regular);
            let text = words.join(" ");
            let lines = wrap_text(&text, metrics, 10.0, width);
            prop_assert_eq!(lines.join(" "), text);
        }

        #[test]
        fn prop_no_line_exceeds_width(words in words(), width in 120.0f32..600.0, bold in any::<bool>()) {
            // 12 characters of the widest glyph at 10pt stay under 120pt, so every word fits.
            let metrics = get_metrics(if bold { Face::Bold } else { Face::Regular });
            let text = words.join(" ");
            for line in wrap_text(&text, metrics, 10.0, width) {
                prop_assert!(metrics.width_pt(&line, 10.0) <= width + 1e-3);
            }
        }
    }
}
