//! Decoding of XML text content as found in spreadsheet XML files.
//!
//! Besides the XML entities, spreadsheet files encode characters that XML
//! can't carry as `_xHHHH_` (`_x000D_` is a carriage return). CDATA sections
//! are copied through untouched.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const CDATA_START: &str = "<![CDATA[";
const CDATA_END: &str = "]]>";

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(?:(quot|apos|gt|lt|amp)|#[xX]([0-9A-Fa-f]+)|#([0-9]+));").expect("entity regex")
    })
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_x([0-9A-Fa-f]{4})_").expect("escape code regex"))
}

/// Decode XML text: entities, numeric references and `_xHHHH_` escapes.
///
/// Anything that doesn't resolve to a character is left as written.
///
/// ```
/// use cellfmt::unescape_xml_text;
///
/// assert_eq!(unescape_xml_text("a&amp;b"), "a&b");
/// assert_eq!(unescape_xml_text("x<![CDATA[&amp;]]>y"), "x&amp;y");
/// assert_eq!(unescape_xml_text("line_x000A_break"), "line\nbreak");
/// ```
pub fn unescape_xml_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(CDATA_START) {
        result.push_str(&decode(&rest[..start]));
        let payload = &rest[start + CDATA_START.len()..];
        match payload.find(CDATA_END) {
            Some(end) => {
                result.push_str(&payload[..end]);
                rest = &payload[end + CDATA_END.len()..];
            }
            None => {
                result.push_str(payload);
                rest = "";
            }
        }
    }

    result.push_str(&decode(rest));
    result
}

fn decode(text: &str) -> String {
    let text = entity_re().replace_all(text, |caps: &Captures<'_>| {
        let decoded = if let Some(name) = caps.get(1) {
            named_entity(name.as_str())
        } else if let Some(hex) = caps.get(2) {
            code_point(hex.as_str(), 16)
        } else {
            caps.get(3).and_then(|dec| code_point(dec.as_str(), 10))
        };
        decoded.map_or_else(|| caps[0].to_string(), String::from)
    });

    code_re()
        .replace_all(&text, |caps: &Captures<'_>| {
            code_point(&caps[1], 16).map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    match name {
        "quot" => Some('"'),
        "apos" => Some('\''),
        "gt" => Some('>'),
        "lt" => Some('<'),
        "amp" => Some('&'),
        _ => None,
    }
}

/// A valid Unicode scalar value; surrogates and out-of-range codes are `None`.
fn code_point(digits: &str, radix: u32) -> Option<char> {
    u32::from_str_radix(digits, radix).ok().and_then(char::from_u32)
}
