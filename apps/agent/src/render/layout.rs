//! Page geometry and line wrapping for the PDF renderer.
//!
//! Character-count metrics are an intentional approximation: an average glyph
//! width per column catches real overflows while tolerating ±1–2% of line
//! width, which is plenty for a report-style document set in one font family.

/// Layout parameters for a rendered roadmap page (US letter, points).
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_pt: f32,
    /// Vertical advance per printed line.
    pub line_height_pt: f32,
    /// Approximate glyph width used to convert usable width into a column budget.
    pub avg_char_width_pt: f32,
    /// A new page starts when the cursor drops below this.
    pub page_break_threshold_pt: f32,
}

impl PageLayout {
    pub fn text_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    /// Column budget for a line starting `indent_pt` right of the margin.
    pub fn wrap_cols(&self, indent_pt: f32) -> usize {
        ((self.text_width_pt() - indent_pt) / self.avg_char_width_pt).max(1.0) as usize
    }
}

/// Returns the default layout: US letter, 40pt margins, 18pt line spacing,
/// Helvetica-sized columns.
pub fn default_page_layout() -> PageLayout {
    PageLayout {
        page_width_pt: 612.0,
        page_height_pt: 792.0,
        margin_pt: 40.0,
        line_height_pt: 18.0,
        avg_char_width_pt: 5.6,
        page_break_threshold_pt: 80.0,
    }
}

/// Greedy word-wrap of `text` into lines of at most `max_cols` characters.
///
/// Words are never split: a single word longer than the budget occupies its own
/// over-long line. Whitespace runs collapse to single spaces.
pub fn wrap_text(text: &str, max_cols: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in words {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() > max_cols {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_empty_text_yields_no_lines() {
        assert!(wrap_text("", 40).is_empty());
        assert!(wrap_text("   \n\t ", 40).is_empty());
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        let lines = wrap_text("Prompt engineering", 40);
        assert_eq!(lines, vec!["Prompt engineering".to_string()]);
    }

    #[test]
    fn test_wrap_respects_column_budget() {
        let text = "Estimate the hours required per activity so that the total \
                    fits within the duration and weekly hours";
        let lines = wrap_text(text, 30);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                line.chars().count() <= 30,
                "line over budget: {line:?} ({} cols)",
                line.chars().count()
            );
        }
    }

    #[test]
    fn test_wrap_preserves_all_words_in_order() {
        let text = "one two three four five six seven eight nine ten";
        let rejoined = wrap_text(text, 12).join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_wrap_keeps_overlong_word_intact() {
        let lines = wrap_text("supercalifragilisticexpialidocious no", 10);
        assert_eq!(lines[0], "supercalifragilisticexpialidocious");
        assert_eq!(lines[1], "no");
    }

    #[test]
    fn test_wrap_collapses_whitespace_runs() {
        let lines = wrap_text("a   b\n\nc", 40);
        assert_eq!(lines, vec!["a b c".to_string()]);
    }

    #[test]
    fn test_default_layout_sanity() {
        let layout = default_page_layout();
        assert!(layout.text_width_pt() > 500.0);
        // Full-width lines should fit roughly 90 characters of Helvetica 11pt.
        let cols = layout.wrap_cols(0.0);
        assert!((80..=110).contains(&cols), "unexpected column budget {cols}");
        // Indentation narrows the budget.
        assert!(layout.wrap_cols(30.0) < cols);
    }
}
