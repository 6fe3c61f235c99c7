//! Rendering of values through a parsed [`NumberFormat`].

mod date;
mod general;
mod number;

pub use general::format_general;
pub use number::format_number;

use crate::ast::{FormatPart, NumberFormat, Section};
use crate::date_serial::to_day_serial;
use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::value::Value;

impl NumberFormat {
    /// Render a number. Values a date section cannot show come out as General.
    pub fn format(&self, value: f64, opts: &FormatOptions) -> String {
        match self.try_format(value, opts) {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!(%err, value, "falling back to General");
                format_general(value)
            }
        }
    }

    /// Render a number, reporting serials outside the calendar as errors.
    pub fn try_format(&self, value: f64, opts: &FormatOptions) -> Result<String, FormatError> {
        if !value.is_finite() {
            return Ok(format_general(value));
        }

        let Some((section, signed)) = self.select_section(value) else {
            return Ok(format_general(value));
        };

        if section.has_date_parts() {
            return date::format_date(value, section, opts);
        }

        Ok(format_number(value, section, signed))
    }

    /// Render any [`Value`]. Booleans and text go through the text section.
    pub fn format_value(&self, value: &Value<'_>, opts: &FormatOptions) -> String {
        match value {
            Value::Number(n) => self.format(*n, opts),
            Value::DateTime(dt) => self.format(to_day_serial(*dt, opts.date_system), opts),
            Value::Text(s) => self.format_text(s, opts),
            Value::Bool(b) => self.format_text(if *b { "TRUE" } else { "FALSE" }, opts),
            Value::Empty => String::new(),
        }
    }

    /// Sections that apply to numbers. A trailing `@` section (or the 4th
    /// section) is reserved for text.
    fn numeric_sections(&self) -> &[Section] {
        let sections = self.sections();
        match sections {
            [head @ .., _] if sections.len() == 4 => head,
            [head @ .., last] if !head.is_empty() && last.has_text_placeholder() => head,
            _ => sections,
        }
    }

    /// Pick the section for `value` and whether it prints a minus sign itself.
    ///
    /// With two sections negatives take the second; a third one takes zero.
    /// Sections chosen by sign or by a matching condition show the magnitude
    /// only, since their literals carry the sign.
    fn select_section(&self, value: f64) -> Option<(&Section, bool)> {
        let sections = self.numeric_sections();

        if sections.iter().any(|s| s.condition.is_some()) {
            for section in sections {
                match section.condition {
                    Some(condition) if condition.evaluate(value) => return Some((section, false)),
                    Some(_) => {}
                    None => return Some((section, true)),
                }
            }
            return sections.last().map(|s| (s, true));
        }

        match sections {
            [] => None,
            [only] => Some((only, true)),
            [positive, negative] => Some(if value < 0.0 {
                (negative, false)
            } else {
                (positive, true)
            }),
            [positive, negative, zero, ..] => Some(if value > 0.0 {
                (positive, true)
            } else if value < 0.0 {
                (negative, false)
            } else {
                (zero, true)
            }),
        }
    }

    /// Render text through the fourth section, or else the first one holding
    /// `@`. Text passes through unchanged when neither exists.
    pub fn format_text(&self, text: &str, _opts: &FormatOptions) -> String {
        let sections = self.sections();
        let Some(section) = sections
            .get(3)
            .or_else(|| sections.iter().find(|s| s.has_text_placeholder()))
        else {
            return text.to_string();
        };

        let mut result = String::new();
        for part in &section.parts {
            match part {
                FormatPart::TextPlaceholder => result.push_str(text),
                FormatPart::Literal(s) | FormatPart::Currency(s) => result.push_str(s),
                FormatPart::Skip(_) => result.push(' '),
                _ => {}
            }
        }
        result
    }
}
