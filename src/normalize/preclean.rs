//! Step 1 of the pipeline: strip control characters, unescape HTML
//! entities, remove XML tags, and normalise to Unicode NFC.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Outcome;
use crate::model::ParsedName;

static HTML_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#x?[0-9A-Fa-f]+|[A-Za-z]+);").unwrap());
static XML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").unwrap());

/// Anything outside letters, digits, whitespace, and the punctuation that
/// legitimately appears in scientific names/authorships/citations.
static UNUSUAL_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\p{L}\p{N}\s.,;:&'’"“”\-()\[\]×?/\u{2205}]"#).unwrap());

fn entity_replacement(entity: &str) -> Option<char> {
    let body = &entity[1..entity.len() - 1];
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "times" => Some('×'),
        _ => {
            if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                None
            }
        }
    }
}

pub fn pre_clean(input: &str, out: &mut ParsedName) -> Outcome<String> {
    let stripped: String = input
        .chars()
        .filter(|c| !c.is_control() || *c == ' ' || *c == '\t')
        .collect();

    let mut saw_entity = false;
    let unescaped = HTML_ENTITY_RE.replace_all(&stripped, |caps: &regex::Captures| {
        let whole = &caps[0];
        match entity_replacement(whole) {
            Some(c) => {
                saw_entity = true;
                c.to_string()
            }
            None => whole.to_string(),
        }
    });
    if saw_entity {
        out.add_warning(crate::error::Warning::HtmlEntities);
    }

    let mut saw_tag = false;
    let de_tagged = XML_TAG_RE.replace_all(&unescaped, |_: &regex::Captures| {
        saw_tag = true;
        " "
    });
    if saw_tag {
        out.add_warning(crate::error::Warning::XmlTags);
    }

    let normalized = de_tagged.nfc().collect::<String>();
    if UNUSUAL_CHAR_RE.is_match(&normalized) {
        out.add_warning(crate::error::Warning::UnusualCharacters);
    }

    Ok(normalized)
}
