//! Rule table for statement-ending lines
//!
//! Two families of rules decide whether a line ends a statement:
//!
//! - [`StructuralSuffix`]: punctuation checked against the literal end of the
//!   line, before any whitespace splitting.
//! - [`TokenRule`]: predicates over the trailing whitespace-delimited token.
//!
//! Both tables are enumerable through their `ALL` constants, listed in the
//! order the classifier evaluates them.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Keywords that end a statement when they are the last token on a line
pub const RESERVED_WORDS: [&str; 4] = ["break", "continue", "fallthrough", "return"];

/// Line endings that terminate a statement regardless of tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralSuffix {
    /// Postfix increment (`++`)
    Increment,
    /// Postfix decrement (`--`)
    Decrement,
    /// Closing parenthesis
    CloseParen,
    /// Closing square bracket
    CloseBracket,
    /// Closing brace
    CloseBrace,
}

impl StructuralSuffix {
    /// All suffixes in evaluation order
    pub const ALL: [StructuralSuffix; 5] = [
        StructuralSuffix::Increment,
        StructuralSuffix::Decrement,
        StructuralSuffix::CloseParen,
        StructuralSuffix::CloseBracket,
        StructuralSuffix::CloseBrace,
    ];

    /// The literal suffix text
    pub fn as_str(&self) -> &'static str {
        match self {
            StructuralSuffix::Increment => "++",
            StructuralSuffix::Decrement => "--",
            StructuralSuffix::CloseParen => ")",
            StructuralSuffix::CloseBracket => "]",
            StructuralSuffix::CloseBrace => "}",
        }
    }

    /// Stable rule name used in statistics and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            StructuralSuffix::Increment => "increment",
            StructuralSuffix::Decrement => "decrement",
            StructuralSuffix::CloseParen => "close-paren",
            StructuralSuffix::CloseBracket => "close-bracket",
            StructuralSuffix::CloseBrace => "close-brace",
        }
    }

    /// Check the untrimmed line against this suffix
    #[inline]
    pub fn matches(&self, line: &str) -> bool {
        line.ends_with(self.as_str())
    }

    /// First suffix that the line ends with, if any
    pub fn find(line: &str) -> Option<StructuralSuffix> {
        Self::ALL.into_iter().find(|suffix| suffix.matches(line))
    }
}

impl fmt::Display for StructuralSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Predicates over the trailing token of a line
///
/// Every rule is a full-token match. Digits and letters are ASCII only.
/// Keywords are checked first: they are also valid identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenRule {
    /// One of [`RESERVED_WORDS`]
    ReservedWord,
    /// Letter or underscore followed by letters, digits or underscores
    Identifier,
    /// Decimal digits with an optional imaginary marker
    Integer,
    /// `0x`/`0X` followed by hex digits
    HexLiteral,
    /// Digits, a dot, optional fraction, exponent and imaginary marker
    DecimalFloat,
    /// Digits with an optional exponent and imaginary marker
    ExponentNumber,
    /// A dot followed by digits, optional exponent and imaginary marker
    LeadingDotFloat,
    /// Token starting and ending with a double quote
    DoubleQuotedString,
    /// Token starting and ending with a backtick
    RawString,
}

static COMPILED_PATTERNS: OnceLock<Vec<Option<Regex>>> = OnceLock::new();

fn compiled_patterns() -> &'static [Option<Regex>] {
    COMPILED_PATTERNS.get_or_init(|| {
        TokenRule::ALL
            .iter()
            .map(|rule| {
                rule.pattern()
                    .map(|p| Regex::new(p).expect("built-in token pattern must compile"))
            })
            .collect()
    })
}

impl TokenRule {
    /// All token rules in evaluation order
    pub const ALL: [TokenRule; 9] = [
        TokenRule::ReservedWord,
        TokenRule::Identifier,
        TokenRule::Integer,
        TokenRule::HexLiteral,
        TokenRule::DecimalFloat,
        TokenRule::ExponentNumber,
        TokenRule::LeadingDotFloat,
        TokenRule::DoubleQuotedString,
        TokenRule::RawString,
    ];

    /// Stable rule name used in statistics and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            TokenRule::Identifier => "identifier",
            TokenRule::Integer => "integer",
            TokenRule::HexLiteral => "hex-literal",
            TokenRule::DecimalFloat => "decimal-float",
            TokenRule::ExponentNumber => "exponent-number",
            TokenRule::LeadingDotFloat => "leading-dot-float",
            TokenRule::DoubleQuotedString => "double-quoted-string",
            TokenRule::RawString => "raw-string",
            TokenRule::ReservedWord => "reserved-word",
        }
    }

    /// Human-readable summary of what the rule accepts
    pub fn description(&self) -> &'static str {
        match self {
            TokenRule::Identifier => "identifier such as `x`, `_tmp` or `value2`",
            TokenRule::Integer => "integer literal, optionally imaginary (`42`, `7i`)",
            TokenRule::HexLiteral => "hexadecimal literal (`0xFF`, `0X1a`)",
            TokenRule::DecimalFloat => "float with a decimal point (`1.`, `3.14e-2i`)",
            TokenRule::ExponentNumber => "number with an exponent (`1e9`, `6E+2i`)",
            TokenRule::LeadingDotFloat => "float starting with a dot (`.5`, `.25e3`)",
            TokenRule::DoubleQuotedString => "double-quoted string (`\"hello\"`)",
            TokenRule::RawString => "backtick raw string (`` `raw` ``)",
            TokenRule::ReservedWord => "break, continue, fallthrough or return",
        }
    }

    /// Anchored pattern for the rules expressed as regular expressions
    fn pattern(&self) -> Option<&'static str> {
        match self {
            TokenRule::Identifier => Some(r"^[A-Za-z_][A-Za-z0-9_]*$"),
            TokenRule::Integer => Some(r"^[0-9]+i?$"),
            TokenRule::HexLiteral => Some(r"^0[xX][0-9a-fA-F]+$"),
            TokenRule::DecimalFloat => Some(r"^[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?i?$"),
            TokenRule::ExponentNumber => Some(r"^[0-9]+([eE][+-]?[0-9]+)?i?$"),
            TokenRule::LeadingDotFloat => Some(r"^\.[0-9]+([eE][+-]?[0-9]+)?i?$"),
            TokenRule::DoubleQuotedString | TokenRule::RawString | TokenRule::ReservedWord => {
                None
            }
        }
    }

    /// Check a trailing token against this rule
    pub fn matches(&self, token: &str) -> bool {
        match self {
            TokenRule::DoubleQuotedString => is_enclosed_by(token, '"'),
            TokenRule::RawString => is_enclosed_by(token, '`'),
            TokenRule::ReservedWord => RESERVED_WORDS.contains(&token),
            _ => compiled_patterns()[*self as usize]
                .as_ref()
                .is_some_and(|re| re.is_match(token)),
        }
    }

    /// First rule accepting the token, if any
    pub fn find(token: &str) -> Option<TokenRule> {
        Self::ALL.into_iter().find(|rule| rule.matches(token))
    }
}

impl fmt::Display for TokenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Needs two characters so a lone quote is not both the opener and the closer.
fn is_enclosed_by(token: &str, quote: char) -> bool {
    token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote)
}
