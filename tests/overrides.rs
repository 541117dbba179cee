//! Per-instance override maps: exact-string overrides consulted
//! before normalisation and before the harness is touched at all.

use sciname_parser::{Authorship, NameParser, NameType, ParsedAuthorship, ParsedName, Rank};

#[test]
fn name_override_bypasses_normalisation_entirely() {
    let parser = NameParser::default();
    let mut expected = ParsedName::empty(NameType::Scientific);
    expected.genus = Some("Overridden".into());

    parser
        .configs()
        .set_name("garbled $$$ input that would never parse", expected.clone());

    let parsed = parser
        .parse("garbled $$$ input that would never parse", Rank::Unranked, None)
        .unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn name_override_takes_precedence_over_a_name_that_would_otherwise_parse() {
    let parser = NameParser::default();
    let mut overridden = ParsedName::empty(NameType::Scientific);
    overridden.genus = Some("NotAbies".into());
    parser.configs().set_name("Abies alba Mill.", overridden.clone());

    let parsed = parser.parse("Abies alba Mill.", Rank::Unranked, None).unwrap();
    assert_eq!(parsed.genus.as_deref(), Some("NotAbies"));
}

#[test]
fn removing_a_name_override_restores_normal_parsing() {
    let parser = NameParser::default();
    let overridden = ParsedName::empty(NameType::Placeholder);
    parser.configs().set_name("Abies alba Mill.", overridden);
    parser.configs().remove_name("Abies alba Mill.");

    let parsed = parser.parse("Abies alba Mill.", Rank::Unranked, None).unwrap();
    assert_eq!(parsed.genus.as_deref(), Some("Abies"));
}

#[test]
fn authorship_override_round_trips() {
    let parser = NameParser::default();
    let expected = ParsedAuthorship {
        combination: Some(Authorship {
            authors: vec!["Mill.".into()],
            ex_authors: vec![],
            year: None,
        }),
        ..Default::default()
    };
    parser.configs().set_authorship("???", expected.clone());

    let parsed = parser.parse_authorship("???").unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn overrides_are_keyed_on_the_exact_input_string() {
    let parser = NameParser::default();
    let overridden = ParsedName::empty(NameType::Placeholder);
    parser.configs().set_name("Abies alba Mill.", overridden);

    // A different string, even one that normalises the same way, is not
    // affected by the override.
    let parsed = parser.parse("Abies  alba  Mill.", Rank::Unranked, None).unwrap();
    assert_eq!(parsed.genus.as_deref(), Some("Abies"));
}
