//! Line termination classifier
//!
//! Decides, one line at a time, whether a line ends a statement and should be
//! followed by [`TERMINATOR`]. The decision only looks at the line itself: no
//! state is carried between lines.
//!
//! Evaluation order (first match wins):
//!
//! 1. The literal line end is checked against [`StructuralSuffix::ALL`].
//! 2. The trailing whitespace-delimited token is checked against
//!    [`TokenRule::ALL`].
//! 3. Otherwise the line passes through unchanged.

use crate::rules::{StructuralSuffix, TokenRule};
use std::fmt;

/// Statement terminator appended to lines that end a statement
pub const TERMINATOR: char = ';';

/// Why a line was terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The line ends with a structural suffix
    Suffix(StructuralSuffix),
    /// The trailing token matched a token rule
    Token(TokenRule),
}

impl Reason {
    /// Name of the rule that fired
    pub fn name(&self) -> &'static str {
        match self {
            Reason::Suffix(suffix) => suffix.name(),
            Reason::Token(rule) => rule.name(),
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Append the terminator
    Terminate(Reason),
    /// Leave the line unchanged
    PassThrough,
}

impl Decision {
    /// Whether the terminator should be appended
    #[inline]
    pub fn is_terminate(&self) -> bool {
        matches!(self, Decision::Terminate(_))
    }

    /// The rule that fired, if any
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Decision::Terminate(reason) => Some(*reason),
            Decision::PassThrough => None,
        }
    }
}

/// Whitespace set used for token splitting: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`
#[inline]
pub fn is_token_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Last whitespace-delimited word of a line
///
/// Returns `None` for empty and whitespace-only lines.
pub fn trailing_token(line: &str) -> Option<&str> {
    line.split(is_token_separator)
        .rev()
        .find(|word| !word.is_empty())
}

/// Classify a line, reporting which rule fired
pub fn decide(line: &str) -> Decision {
    if let Some(suffix) = StructuralSuffix::find(line) {
        return Decision::Terminate(Reason::Suffix(suffix));
    }

    match trailing_token(line).and_then(TokenRule::find) {
        Some(rule) => Decision::Terminate(Reason::Token(rule)),
        None => Decision::PassThrough,
    }
}

/// Whether the line ends a statement and needs a terminator
#[inline]
pub fn classify(line: &str) -> bool {
    decide(line).is_terminate()
}

/// Unit-struct handle on the classifier for code that wants a value to pass around
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTerminationClassifier;

impl LineTerminationClassifier {
    /// Create a classifier
    pub fn new() -> Self {
        Self
    }

    /// See [`classify`]
    pub fn classify(&self, line: &str) -> bool {
        classify(line)
    }

    /// See [`decide`]
    pub fn decide(&self, line: &str) -> Decision {
        decide(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert!(classify("x := 5"));
        assert!(classify("foo(a, b)"));
        assert!(classify("i++"));
        assert!(!classify("if x > 0 {"));
        assert!(classify("return"));
        assert!(classify("s := \"hello\""));
        assert!(!classify(""));
    }

    #[test]
    fn test_trailing_token() {
        assert_eq!(trailing_token("x := 5"), Some("5"));
        assert_eq!(trailing_token("  value  "), Some("value"));
        assert_eq!(trailing_token("a\tb\x0Bc"), Some("c"));
        assert_eq!(trailing_token(""), None);
        assert_eq!(trailing_token(" \t "), None);
    }

    #[test]
    fn test_blank_lines_pass_through() {
        assert_eq!(decide(""), Decision::PassThrough);
        assert_eq!(decide("    "), Decision::PassThrough);
        assert_eq!(decide("\t\x0C"), Decision::PassThrough);
    }

    #[test]
    fn test_trailing_whitespace_after_token() {
        assert!(classify("x := y   "));
        // Structural suffixes are checked on the untrimmed line
        assert!(!classify("foo()  "));
    }

    #[test]
    fn test_suffix_takes_priority() {
        assert_eq!(
            decide("return f(x)"),
            Decision::Terminate(Reason::Suffix(StructuralSuffix::CloseParen))
        );
        assert_eq!(
            decide("x--"),
            Decision::Terminate(Reason::Suffix(StructuralSuffix::Decrement))
        );
    }

    #[test]
    fn test_reason_reports_token_rule() {
        assert_eq!(
            decide("x = 0x1F").reason(),
            Some(Reason::Token(TokenRule::HexLiteral))
        );
        assert_eq!(
            decide("y = .5").reason(),
            Some(Reason::Token(TokenRule::LeadingDotFloat))
        );
        assert_eq!(
            decide("q := `raw`").reason(),
            Some(Reason::Token(TokenRule::RawString))
        );
        assert_eq!(decide("z := ").reason(), None);
    }

    #[test]
    fn test_operators_and_openers_pass_through() {
        for line in ["a +", "b &&", "func main() {", "x :=", "case 1:", "// comment,"] {
            assert!(!classify(line), "{line:?} should pass through");
        }
    }

    #[test]
    fn test_already_terminated_line_is_left_alone() {
        assert!(!classify("x := 5;"));
        assert!(!classify("foo(a, b);"));
        assert!(!classify("return;"));
    }

    #[test]
    fn test_non_ascii_whitespace_is_not_a_separator() {
        // U+00A0 stays inside the token, so `5\u{a0}` is not an integer
        assert!(!classify("x := 5\u{a0}"));
    }

    #[test]
    fn test_classifier_handle() {
        let classifier = LineTerminationClassifier::new();
        assert!(classifier.classify("break"));
        assert_eq!(classifier.decide("{"), Decision::PassThrough);
    }
}
