//! Parsed form of a format code.

use crate::error::ParseError;
use std::str::FromStr;

/// The eight colors a section may name in brackets, e.g. `[Red]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

const COLOR_NAMES: [(&str, NamedColor); 8] = [
    ("black", NamedColor::Black),
    ("blue", NamedColor::Blue),
    ("cyan", NamedColor::Cyan),
    ("green", NamedColor::Green),
    ("magenta", NamedColor::Magenta),
    ("red", NamedColor::Red),
    ("white", NamedColor::White),
    ("yellow", NamedColor::Yellow),
];

impl FromStr for NamedColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COLOR_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, color)| color)
            .ok_or(())
    }
}

/// Section color, by name or by palette index (`[Color12]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Named(NamedColor),
    Indexed(u8),
}

/// A bracketed comparison such as `[>=100]` that gates a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    GreaterThan(f64),
    LessThan(f64),
    Equal(f64),
    GreaterOrEqual(f64),
    LessOrEqual(f64),
    NotEqual(f64),
}

impl Condition {
    /// Whether `value` satisfies the comparison. Equality is within `f64::EPSILON`.
    pub fn evaluate(&self, value: f64) -> bool {
        let near = |n: f64| (value - n).abs() < f64::EPSILON;
        match *self {
            Condition::GreaterThan(n) => value > n,
            Condition::LessThan(n) => value < n,
            Condition::Equal(n) => near(n),
            Condition::GreaterOrEqual(n) => value >= n,
            Condition::LessOrEqual(n) => value <= n,
            Condition::NotEqual(n) => !near(n),
        }
    }
}

/// How a digit position renders when the value has no digit there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPlaceholder {
    /// `0` pads with zero
    Zero,
    /// `#` drops the position
    Hash,
    /// `?` pads with a space
    Question,
}

impl DigitPlaceholder {
    pub fn is_required(&self) -> bool {
        *self == DigitPlaceholder::Zero
    }

    /// Padding for an unfilled position, if any.
    pub fn empty_char(&self) -> Option<char> {
        match self {
            DigitPlaceholder::Zero => Some('0'),
            DigitPlaceholder::Question => Some(' '),
            DigitPlaceholder::Hash => None,
        }
    }
}

/// Calendar and clock fields. Run lengths follow the code, so `mmm` is
/// [`DatePart::MonthAbbr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Year2,
    Year4,
    Month,
    Month2,
    MonthAbbr,
    MonthFull,
    /// `mmmmm`, the initial of the month name
    MonthLetter,
    Day,
    Day2,
    DayAbbr,
    DayFull,
    Hour,
    Hour2,
    /// `m` resolved as minutes by [`Section::new`]
    Minute,
    Minute2,
    Second,
    Second2,
    /// Fractional seconds with the given number of digits
    SubSecond(u8),
}

impl DatePart {
    fn is_hour(&self) -> bool {
        matches!(self, DatePart::Hour | DatePart::Hour2)
    }

    fn is_second(&self) -> bool {
        matches!(self, DatePart::Second | DatePart::Second2)
    }
}

/// Which meridiem marker a section uses: `AM/PM`, `am/pm`, `A/P` or `a/p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmPmStyle {
    Upper,
    Lower,
    ShortUpper,
    ShortLower,
}

/// Bracketed duration fields: `[h]`, `[m]` and `[s]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedPart {
    Hours,
    Minutes,
    Seconds,
}

/// One element of a parsed section, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatPart {
    /// Text copied to the output: plain characters, quoted runs and escapes
    Literal(String),
    Digit(DigitPlaceholder),
    DecimalPoint,
    /// A comma. Between digits it groups thousands; trailing ones divide by 1000.
    ThousandsSeparator,
    /// Scales the value by 100 and prints `%`
    Percent,
    /// `E+`/`E-`; the `Digit` parts that follow are the exponent
    Scientific { upper: bool, show_plus: bool },
    DatePart(DatePart),
    AmPm(AmPmStyle),
    Elapsed(ElapsedPart),
    /// `@`
    TextPlaceholder,
    /// `*x`. Column width is unknown here, so nothing is emitted.
    Fill(char),
    /// `_x`, emitted as one space
    Skip(char),
    /// Text from a `[$...]` bracket
    Currency(String),
    General,
}

impl FormatPart {
    pub fn is_date_part(&self) -> bool {
        matches!(
            self,
            FormatPart::DatePart(_) | FormatPart::AmPm(_) | FormatPart::Elapsed(_)
        )
    }
}

/// A `;`-separated piece of a format code.
///
/// By position the sections cover positive values, negative values, zero
/// and text. Brackets may attach a condition and a color.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub condition: Option<Condition>,
    pub color: Option<Color>,
    pub parts: Vec<FormatPart>,
}

impl Section {
    /// Build a section, resolving `m`/`mm` runs that denote minutes.
    ///
    /// A month token is a minute when the nearest date part before it is an
    /// hour (or elapsed hour), or the nearest date part after it is a second.
    pub fn new(condition: Option<Condition>, color: Option<Color>, mut parts: Vec<FormatPart>) -> Self {
        let date_positions: Vec<usize> = parts
            .iter()
            .enumerate()
            .filter(|(_, p)| matches!(p, FormatPart::DatePart(_) | FormatPart::Elapsed(_)))
            .map(|(i, _)| i)
            .collect();

        for (k, &pos) in date_positions.iter().enumerate() {
            let is_short_month = matches!(
                parts[pos],
                FormatPart::DatePart(DatePart::Month) | FormatPart::DatePart(DatePart::Month2)
            );
            if !is_short_month {
                continue;
            }
            let after_hour = k > 0
                && match &parts[date_positions[k - 1]] {
                    FormatPart::DatePart(p) => p.is_hour(),
                    FormatPart::Elapsed(ElapsedPart::Hours) => true,
                    _ => false,
                };
            let before_second = date_positions.get(k + 1).is_some_and(|&next| match &parts[next] {
                FormatPart::DatePart(p) => p.is_second(),
                FormatPart::Elapsed(ElapsedPart::Seconds) => true,
                _ => false,
            });
            if after_hour || before_second {
                parts[pos] = match parts[pos] {
                    FormatPart::DatePart(DatePart::Month) => FormatPart::DatePart(DatePart::Minute),
                    _ => FormatPart::DatePart(DatePart::Minute2),
                };
            }
        }

        Section {
            condition,
            color,
            parts,
        }
    }

    pub fn has_date_parts(&self) -> bool {
        self.parts.iter().any(FormatPart::is_date_part)
    }

    pub fn has_text_placeholder(&self) -> bool {
        self.parts.contains(&FormatPart::TextPlaceholder)
    }
}

/// A parsed format code, ready to render any number of values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    sections: Vec<Section>,
}

impl NumberFormat {
    /// Sections past the fourth are dropped.
    pub fn from_sections(mut sections: Vec<Section>) -> Self {
        sections.truncate(4);
        NumberFormat { sections }
    }

    /// The format used when a code cannot be parsed.
    pub fn general() -> Self {
        NumberFormat::from_sections(vec![Section::new(None, None, vec![FormatPart::General])])
    }

    pub fn parse(format_code: &str) -> Result<NumberFormat, ParseError> {
        crate::parser::parse(format_code)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// True when any section renders a date, a time or a duration.
    pub fn is_date_format(&self) -> bool {
        self.sections.iter().any(Section::has_date_parts)
    }
}
