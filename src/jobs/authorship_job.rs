//! The authorship-parsing job: a specialisation that expects no
//! epithets, applied to free-standing authorship strings such as
//! `"(Cleve, 1899) Jørgensen, 1905"`.

use unicode_normalization::UnicodeNormalization;

use crate::error::UnparsableAuthorship;
use crate::model::{Authorship, ParseState};
use crate::regexes::AUTHORSHIP_RE;

use super::authorship_extract::{extract, extract_sanctioning};

/// The two authorships plus bookkeeping, mirroring [`ParsedName`]'s
/// authorship-related fields for a standalone authorship string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedAuthorship {
    pub basionym: Option<Authorship>,
    pub combination: Option<Authorship>,
    pub basionym_sanctioning_author: Option<String>,
    pub combination_sanctioning_author: Option<String>,
    pub state: ParseState,
    pub unparsed: Vec<String>,
}

pub fn parse(text: &str) -> Result<ParsedAuthorship, UnparsableAuthorship> {
    let normalized: String = text.nfc().collect::<String>().trim().to_string();
    if normalized.is_empty() {
        return Err(UnparsableAuthorship {
            input: text.to_string(),
        });
    }

    let caps = AUTHORSHIP_RE
        .captures(&normalized)
        .ok_or_else(|| UnparsableAuthorship {
            input: text.to_string(),
        })?;

    let basionym = extract(&caps, "bas");
    let combination = extract(&caps, "comb");

    if basionym.is_none() && combination.is_none() {
        return Err(UnparsableAuthorship {
            input: text.to_string(),
        });
    }

    let tail = caps.name("tail").map(|m| m.as_str().trim()).unwrap_or("");
    let (state, unparsed) = if tail.is_empty() {
        (ParseState::Complete, Vec::new())
    } else {
        (ParseState::Partial, vec![tail.to_string()])
    };

    Ok(ParsedAuthorship {
        basionym_sanctioning_author: extract_sanctioning(&caps, "bas"),
        combination_sanctioning_author: extract_sanctioning(&caps, "comb"),
        basionym,
        combination,
        state,
        unparsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basionym_and_combination() {
        let res = parse("(Cleve, 1899) Jørgensen, 1905").unwrap();
        let bas = res.basionym.unwrap();
        assert_eq!(bas.authors, vec!["Cleve".to_string()]);
        assert_eq!(bas.year.as_deref(), Some("1899"));
        let comb = res.combination.unwrap();
        assert_eq!(comb.authors, vec!["Jørgensen".to_string()]);
        assert_eq!(comb.year.as_deref(), Some("1905"));
        assert_eq!(res.state, ParseState::Complete);
    }

    #[test]
    fn empty_string_is_unparsable() {
        assert!(parse("").is_err());
    }

    #[test]
    fn combination_only() {
        let res = parse("Mill.").unwrap();
        assert!(res.basionym.is_none());
        assert_eq!(res.combination.unwrap().authors, vec!["Mill.".to_string()]);
    }
}
