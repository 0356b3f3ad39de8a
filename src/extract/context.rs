//! Context extraction: the bounded word window around a candidate.
//!
//! The radius is word-based rather than character-based, so the window stays
//! equally informative across reports with irregular PDF spacing.

/// Default ± word radius around a candidate offset
pub const DEFAULT_WORD_RADIUS: usize = 10;

/// The ±radius-word window nearest a candidate's character offset
#[derive(Debug, Clone)]
pub struct ContextWindow {
    /// Window text, single-space joined
    pub text: String,

    /// Index of the anchor word within the full tokenization
    pub word_index: usize,

    /// Byte offset of the anchor word within `text`; positional searches in
    /// the structurer are relative to this, not to the window start
    pub anchor: usize,

    /// Byte offset in `text` where the anchor's source line ends. Words past
    /// this point came from later lines, i.e. the next printed row
    pub line_end: usize,
}

/// Tokenize text into whitespace-delimited words with their char offsets.
fn word_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, &text[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push((s, &text[s..]));
    }

    words
}

/// Extract the ±radius-word window nearest `offset`.
///
/// Deterministic and O(text length). Parsing runs once per upload, off any
/// interactive request path, so no index is kept between calls.
#[must_use]
pub fn extract(text: &str, offset: usize, radius: usize) -> ContextWindow {
    let words = word_offsets(text);
    if words.is_empty() {
        return ContextWindow {
            text: String::new(),
            word_index: 0,
            anchor: 0,
            line_end: 0,
        };
    }

    // Nearest word: the last word starting at or before the offset
    let anchor_index = match words.binary_search_by_key(&offset, |&(start, _)| start) {
        Ok(i) => i,
        Err(0) => 0,
        Err(i) => i - 1,
    };

    let lo = anchor_index.saturating_sub(radius);
    let hi = (anchor_index + radius + 1).min(words.len());

    let mut window = String::new();
    let mut anchor = 0;
    let mut line_end = None;
    let mut prev_end = 0;
    for (i, &(start, word)) in words[lo..hi].iter().enumerate() {
        if i > 0 {
            // First newline after the anchor word marks the end of its row
            if line_end.is_none()
                && lo + i > anchor_index
                && text[prev_end..start].contains('\n')
            {
                line_end = Some(window.len());
            }
            window.push(' ');
        }
        if lo + i == anchor_index {
            anchor = window.len();
        }
        window.push_str(word);
        prev_end = start + word.len();
    }

    let line_end = line_end.unwrap_or(window.len());
    ContextWindow {
        text: window,
        word_index: anchor_index,
        anchor,
        line_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centered_on_offset() {
        let text = "a b c d e f g h i j k";
        // Offset of "f"
        let offset = text.find('f').unwrap();
        let window = extract(text, offset, 2);
        assert_eq!(window.text, "d e f g h");
        assert_eq!(window.word_index, 5);
        assert_eq!(&window.text[window.anchor..=window.anchor], "f");
    }

    #[test]
    fn test_window_clamped_at_edges() {
        let text = "one two three";
        let window = extract(text, 0, 5);
        assert_eq!(window.text, "one two three");

        let window = extract(text, text.len() - 1, 5);
        assert_eq!(window.text, "one two three");
    }

    #[test]
    fn test_irregular_spacing_keeps_word_count() {
        let spaced = "alpha    beta\t\tgamma\n\n  delta     epsilon";
        let offset = spaced.find("gamma").unwrap();
        let window = extract(spaced, offset, 1);
        assert_eq!(window.text, "beta gamma delta");
    }

    #[test]
    fn test_offset_inside_word() {
        let text = "Vitamin D: 25 ng/mL";
        // Offset in the middle of "Vitamin"
        let window = extract(text, 3, 1);
        assert_eq!(window.text, "Vitamin D:");
    }

    #[test]
    fn test_line_end_marks_anchor_row() {
        let text = "TSH: 2.1 mIU/L\nFerritin: 12 ng/mL Low";
        let window = extract(text, 0, 10);
        assert_eq!(&window.text[..window.line_end], "TSH: 2.1 mIU/L");
    }

    #[test]
    fn test_line_end_extends_to_window_end_without_newline() {
        let text = "Glucose: 90 mg/dL (Normal: 70-99)";
        let window = extract(text, 0, 10);
        assert_eq!(window.line_end, window.text.len());
    }

    #[test]
    fn test_empty_text() {
        let window = extract("", 0, 5);
        assert_eq!(window.text, "");
        assert_eq!(window.line_end, 0);
    }
}
