//! Lexer for tokenizing format code strings.
//!
//! Handles the cases that need lookahead:
//! - Runs of date/time letters (`yyyy`, `mm`, `hh`) become one token carrying the run length
//! - Quoted strings ("text") become QuotedString tokens
//! - Escaped characters (\$) become EscapedChar tokens
//! - Bracket content ([Red], [>100], [h]) becomes a single Bracket token
//! - `E+`/`e-` become Exponent tokens; a bare `E` is a literal
//! - `General` and AM/PM patterns are detected case-insensitively

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for format code strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        if ch == 'G' || ch == 'g' {
            if let Some(token) = self.try_match_keyword("General", Token::General) {
                return Ok(token);
            }
        }
        if ch == 'A' || ch == 'a' {
            if let Some(token) = self.try_match_am_pm() {
                return Ok(token);
            }
        }

        let token = match ch {
            '"' => self.lex_quoted_string()?,
            '\\' => self.lex_escaped_char()?,
            '[' => self.lex_bracket()?,

            'E' | 'e' => {
                self.advance();
                match self.current_char() {
                    Some(sign @ ('+' | '-')) => {
                        self.advance();
                        Token::Exponent {
                            upper: ch == 'E',
                            show_plus: sign == '+',
                        }
                    }
                    _ => Token::Literal(ch),
                }
            }

            'y' | 'Y' => Token::Year(self.count_run(ch)),
            'm' | 'M' => Token::Month(self.count_run(ch)),
            'd' | 'D' => Token::Day(self.count_run(ch)),
            'h' | 'H' => Token::Hour(self.count_run(ch)),
            's' | 'S' => Token::Second(self.count_run(ch)),

            _ => {
                self.advance();
                match ch {
                    '0' => Token::Zero,
                    '#' => Token::Hash,
                    '?' => Token::Question,
                    '.' => Token::DecimalPoint,
                    ',' => Token::ThousandsSep,
                    ';' => Token::SectionSep,
                    '%' => Token::Percent,
                    '@' => Token::At,
                    '*' => Token::Asterisk,
                    '_' => Token::Underscore,
                    other => Token::Literal(other),
                }
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Consumes a run of `ch` (ignoring ASCII case) and returns its length.
    fn count_run(&mut self, ch: char) -> usize {
        let mut count = 0;
        while let Some(c) = self.current_char() {
            if !c.eq_ignore_ascii_case(&ch) {
                break;
            }
            count += 1;
            self.advance();
        }
        count
    }

    /// Lexes a quoted string ("...").
    fn lex_quoted_string(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance();

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance();
                    return Ok(Token::QuotedString(content));
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(ParseError::UnterminatedString { position: start }),
            }
        }
    }

    /// Lexes an escaped character (\x).
    fn lex_escaped_char(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance();

        match self.current_char() {
            Some(ch) => {
                self.advance();
                Ok(Token::EscapedChar(ch))
            }
            None => Err(ParseError::DanglingEscape { position: start }),
        }
    }

    /// Lexes `[...]` into a Bracket token with the raw content.
    fn lex_bracket(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        let rest = &self.input[start + 1..];
        match rest.find(']') {
            Some(len) => {
                let content = rest[..len].to_string();
                self.position = start + 1 + len + 1;
                Ok(Token::Bracket(content))
            }
            None => Err(ParseError::UnterminatedBracket { position: start }),
        }
    }

    /// Case-insensitive keyword match at the current position.
    fn try_match_keyword(&mut self, keyword: &str, token: Token) -> Option<SpannedToken> {
        let start = self.position;
        let prefix = self.input[start..].get(..keyword.len())?;
        if !prefix.eq_ignore_ascii_case(keyword) {
            return None;
        }
        self.position += keyword.len();
        Some(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Tries to match an AM/PM pattern at the current position.
    fn try_match_am_pm(&mut self) -> Option<SpannedToken> {
        let start = self.position;
        for pattern in ["AM/PM", "A/P"] {
            if let Some(prefix) = self.input[start..].get(..pattern.len()) {
                if prefix.eq_ignore_ascii_case(pattern) {
                    let matched = prefix.to_string();
                    self.position += pattern.len();
                    return Some(SpannedToken {
                        token: Token::AmPm(matched),
                        start,
                        end: self.position,
                    });
                }
            }
        }
        None
    }

    /// Returns all remaining tokens as a vector, ending with `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
