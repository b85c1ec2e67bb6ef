//! Mark-tagged pattern syntax and parse outcomes.
//!
//! The host pattern matcher consumes pattern strings in which a choice
//! branch may be prefixed with `<tag>¦`: when that branch matches, the tag
//! is recorded as the parse mark. The matcher reports a successful match
//! as a [`ParseOutcome`] - a tagged value rather than anything positional,
//! so consumers never re-inspect the pattern string to learn which branch
//! won.

use quill_ir::{ShapeLiteral, Span};

/// Reserved by the matcher: separates a branch's mark tag from its syntax.
pub const MARK_DELIMITER: char = '¦';

/// Reserved by the matcher: separates alternation branches.
pub const CHOICE_DELIMITER: char = '|';

/// Render one branch of a choice group, tagged with its parse mark.
///
/// Appends the alternation delimiter unless this is the last branch.
pub fn marked_branch(tag: u32, fragment: &str, last: bool) -> String {
    let mut branch = format!("{tag}{MARK_DELIMITER}{fragment}");
    if !last {
        branch.push(CHOICE_DELIMITER);
    }
    branch
}

/// A successful match reported by the host pattern matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The mark tag of the branch that matched.
    pub mark: u32,
    /// The raw matched text, for modifier inspection.
    pub text: String,
    /// Where the match sits in the script source.
    pub span: Span,
    /// The shape literal captured by the matched branch, if any.
    pub literal: Option<ShapeLiteral>,
}

impl ParseOutcome {
    /// Create an outcome with no captured literal.
    pub fn new(mark: u32, text: impl Into<String>) -> Self {
        ParseOutcome {
            mark,
            text: text.into(),
            span: Span::DUMMY,
            literal: None,
        }
    }

    /// Attach the source span of the match.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Attach a captured shape literal.
    #[must_use]
    pub fn with_literal(mut self, literal: ShapeLiteral) -> Self {
        self.literal = Some(literal);
        self
    }

    /// Check whether the matched text contains a modifier token.
    ///
    /// Token comparison is by whitespace-separated word, so a modifier
    /// never matches inside another word.
    pub fn has_modifier(&self, token: &str) -> bool {
        self.text.split_whitespace().any(|word| word == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marked_branch_tagging() {
        assert_eq!(marked_branch(2, "[raw] slot", false), "2¦[raw] slot|");
        assert_eq!(
            marked_branch(5, "inventory( |-)action", true),
            "5¦inventory( |-)action"
        );
    }

    #[test]
    fn test_modifier_is_word_boundary() {
        let outcome = ParseOutcome::new(2, "clicked raw slot");
        assert!(outcome.has_modifier("raw"));
        assert!(!outcome.has_modifier("slo"));

        let drawbridge = ParseOutcome::new(2, "clicked drawbridge slot");
        assert!(!drawbridge.has_modifier("raw"));
    }

    #[test]
    fn test_outcome_builders() {
        let outcome = ParseOutcome::new(1, "clicked block").with_span(Span::new(3, 16));
        assert_eq!(outcome.mark, 1);
        assert_eq!(outcome.span, Span::new(3, 16));
        assert_eq!(outcome.literal, None);
    }
}
