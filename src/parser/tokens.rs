//! Token types for the format code lexer.

/// A token in a format code string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    EscapedChar(char),
    QuotedString(String),

    // Digit placeholders
    Zero,     // 0
    Hash,     // #
    Question, // ?

    // Separators
    DecimalPoint, // .
    ThousandsSep, // ,
    SectionSep,   // ;

    // Special characters
    Percent,    // %
    At,         // @
    Asterisk,   // *
    Underscore, // _

    // Scientific notation: E+, E-, e+, e-
    Exponent { upper: bool, show_plus: bool },

    // Date/time runs, carrying the run length (`yyyy` is Year(4))
    Year(usize),
    Month(usize),
    Day(usize),
    Hour(usize),
    Second(usize),

    // Everything between `[` and `]`
    Bracket(String),

    // AM/PM markers: AM/PM, am/pm, A/P, a/p
    AmPm(String),

    // The `General` keyword
    General,

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
