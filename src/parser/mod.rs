//! Parser for ECMA-376 number format codes.

pub mod lexer;
pub mod tokens;

use crate::ast::{
    AmPmStyle, Color, Condition, DatePart, DigitPlaceholder, ElapsedPart, FormatPart, NamedColor,
    NumberFormat, Section,
};
use crate::error::ParseError;
use lexer::Lexer;
use tokens::Token;

/// Parse a format code string into a NumberFormat.
pub fn parse(format_code: &str) -> Result<NumberFormat, ParseError> {
    if format_code.is_empty() {
        return Err(ParseError::EmptyFormat);
    }

    let tokens: Vec<Token> = Lexer::new(format_code)
        .tokenize()?
        .into_iter()
        .map(|t| t.token)
        .collect();

    let sections = tokens
        .split(|t| matches!(t, Token::SectionSep | Token::Eof))
        .take(tokens.iter().filter(|t| matches!(t, Token::SectionSep)).count() + 1)
        .map(parse_section)
        .collect();

    Ok(NumberFormat::from_sections(sections))
}

/// Parse the tokens of a single section.
fn parse_section(tokens: &[Token]) -> Section {
    let mut builder = SectionBuilder::default();
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        match token {
            Token::Bracket(content) => builder.add_bracket(content),

            Token::Zero => builder.add_part(FormatPart::Digit(DigitPlaceholder::Zero)),
            Token::Hash => builder.add_part(FormatPart::Digit(DigitPlaceholder::Hash)),
            Token::Question => builder.add_part(FormatPart::Digit(DigitPlaceholder::Question)),

            Token::DecimalPoint => {
                // `.0`, `.00` right after seconds is a sub-second part
                if builder.last_is_second() {
                    let mut places = 0u8;
                    while matches!(iter.peek(), Some(Token::Zero)) {
                        iter.next();
                        places = places.saturating_add(1);
                    }
                    if places > 0 {
                        builder.add_part(FormatPart::DatePart(DatePart::SubSecond(places)));
                        continue;
                    }
                }
                builder.add_part(FormatPart::DecimalPoint);
            }
            Token::ThousandsSep => builder.add_part(FormatPart::ThousandsSeparator),
            Token::Percent => builder.add_part(FormatPart::Percent),
            Token::At => builder.add_part(FormatPart::TextPlaceholder),

            // The character after `*` or `_` is consumed as its operand
            Token::Asterisk | Token::Underscore => {
                let operand = iter.next().and_then(literal_char);
                if let Some(ch) = operand {
                    builder.add_part(if matches!(token, Token::Asterisk) {
                        FormatPart::Fill(ch)
                    } else {
                        FormatPart::Skip(ch)
                    });
                }
            }

            Token::Exponent { upper, show_plus } => builder.add_part(FormatPart::Scientific {
                upper: *upper,
                show_plus: *show_plus,
            }),

            Token::Year(count) => builder.add_part(FormatPart::DatePart(if *count >= 3 {
                DatePart::Year4
            } else {
                DatePart::Year2
            })),
            Token::Month(count) => builder.add_part(FormatPart::DatePart(match count {
                1 => DatePart::Month,
                2 => DatePart::Month2,
                3 => DatePart::MonthAbbr,
                4 => DatePart::MonthFull,
                _ => DatePart::MonthLetter,
            })),
            Token::Day(count) => builder.add_part(FormatPart::DatePart(match count {
                1 => DatePart::Day,
                2 => DatePart::Day2,
                3 => DatePart::DayAbbr,
                _ => DatePart::DayFull,
            })),
            Token::Hour(count) => builder.add_part(FormatPart::DatePart(if *count >= 2 {
                DatePart::Hour2
            } else {
                DatePart::Hour
            })),
            Token::Second(count) => builder.add_part(FormatPart::DatePart(if *count >= 2 {
                DatePart::Second2
            } else {
                DatePart::Second
            })),

            Token::AmPm(s) => builder.add_part(FormatPart::AmPm(parse_am_pm_style(s))),
            Token::General => builder.add_part(FormatPart::General),

            Token::Literal(ch) | Token::EscapedChar(ch) => builder.add_literal(&ch.to_string()),
            Token::QuotedString(s) => builder.add_literal(s),

            Token::SectionSep | Token::Eof => {}
        }
    }

    builder.build()
}

/// The literal character a token stands for, when used as a `*`/`_` operand.
fn literal_char(token: &Token) -> Option<char> {
    match token {
        Token::Literal(ch) | Token::EscapedChar(ch) => Some(*ch),
        Token::Zero => Some('0'),
        Token::Hash => Some('#'),
        Token::Question => Some('?'),
        Token::DecimalPoint => Some('.'),
        Token::ThousandsSep => Some(','),
        Token::Percent => Some('%'),
        Token::At => Some('@'),
        Token::Asterisk => Some('*'),
        Token::Underscore => Some('_'),
        _ => None,
    }
}

/// Helper struct for building sections.
#[derive(Default)]
struct SectionBuilder {
    condition: Option<Condition>,
    color: Option<Color>,
    parts: Vec<FormatPart>,
}

impl SectionBuilder {
    fn add_part(&mut self, part: FormatPart) {
        self.parts.push(part);
    }

    /// Adds literal text, merging with a preceding literal.
    fn add_literal(&mut self, text: &str) {
        if let Some(FormatPart::Literal(prev)) = self.parts.last_mut() {
            prev.push_str(text);
        } else {
            self.parts.push(FormatPart::Literal(text.to_string()));
        }
    }

    fn last_is_second(&self) -> bool {
        matches!(
            self.parts.last(),
            Some(FormatPart::DatePart(DatePart::Second | DatePart::Second2))
                | Some(FormatPart::Elapsed(ElapsedPart::Seconds))
        )
    }

    /// Interpret bracket content: color, condition, elapsed time or locale.
    /// Unknown content is dropped.
    fn add_bracket(&mut self, content: &str) {
        let content = content.trim();

        if let Some(color) = try_parse_color(content) {
            self.color = Some(color);
        } else if let Some(condition) = try_parse_condition(content) {
            self.condition = Some(condition);
        } else if let Some(elapsed) = try_parse_elapsed(content) {
            self.add_part(FormatPart::Elapsed(elapsed));
        } else if let Some(currency) = try_parse_currency(content) {
            if !currency.is_empty() {
                self.add_part(FormatPart::Currency(currency));
            }
        }
    }

    fn build(self) -> Section {
        Section::new(self.condition, self.color, self.parts)
    }
}

/// Parse AM/PM style from the matched string.
fn parse_am_pm_style(s: &str) -> AmPmStyle {
    let upper = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    match (s.len() <= 3, upper) {
        (true, true) => AmPmStyle::ShortUpper,
        (true, false) => AmPmStyle::ShortLower,
        (false, true) => AmPmStyle::Upper,
        (false, false) => AmPmStyle::Lower,
    }
}

/// Try to parse bracket content as a color.
fn try_parse_color(content: &str) -> Option<Color> {
    if let Ok(named) = content.parse::<NamedColor>() {
        return Some(Color::Named(named));
    }

    // Indexed colors: Color1 through Color56
    let prefix = content.get(..5)?;
    if prefix.eq_ignore_ascii_case("color") {
        if let Ok(index) = content[5..].parse::<u8>() {
            if (1..=56).contains(&index) {
                return Some(Color::Indexed(index));
            }
        }
    }

    None
}

/// Try to parse bracket content as a condition.
fn try_parse_condition(content: &str) -> Option<Condition> {
    // Two-character operators must be tried before their one-character prefixes
    const OPERATORS: [(&str, fn(f64) -> Condition); 6] = [
        (">=", Condition::GreaterOrEqual),
        ("<=", Condition::LessOrEqual),
        ("<>", Condition::NotEqual),
        (">", Condition::GreaterThan),
        ("<", Condition::LessThan),
        ("=", Condition::Equal),
    ];

    OPERATORS.iter().find_map(|(op, make)| {
        let value = content.strip_prefix(op)?.trim().parse::<f64>().ok()?;
        Some(make(value))
    })
}

/// Try to parse bracket content as elapsed time.
fn try_parse_elapsed(content: &str) -> Option<ElapsedPart> {
    let first = content.chars().next()?.to_ascii_lowercase();
    if !content.chars().all(|c| c.to_ascii_lowercase() == first) {
        return None;
    }
    match first {
        'h' => Some(ElapsedPart::Hours),
        'm' => Some(ElapsedPart::Minutes),
        's' => Some(ElapsedPart::Seconds),
        _ => None,
    }
}

/// Try to parse `[$cur-lcid]` and return the currency text.
fn try_parse_currency(content: &str) -> Option<String> {
    let rest = content.strip_prefix('$')?;
    let currency = match rest.find('-') {
        Some(dash) => &rest[..dash],
        None => rest,
    };
    Some(currency.to_string())
}
