//! End-to-end scientific-name parsing through the public `NameParser` facade.

use rstest::rstest;
use sciname_parser::{NameParser, NameType, Notho, ParseState, Rank, Warning};

#[rstest]
#[case("Abies alba Mill.", "Abies", "alba")]
#[case("Picea abies (L.) H.Karst.", "Picea", "abies")]
#[case("Quercus robur L.", "Quercus", "robur")]
fn parses_simple_binomials(#[case] input: &str, #[case] genus: &str, #[case] epithet: &str) {
    let parser = NameParser::default();
    let parsed = parser.parse(input, Rank::Unranked, None).unwrap();
    assert_eq!(parsed.genus.as_deref(), Some(genus));
    assert_eq!(parsed.specific_epithet.as_deref(), Some(epithet));
    assert_eq!(parsed.name_type, NameType::Scientific);
}

#[test]
fn basionym_and_combination_authorship_both_captured() {
    let parser = NameParser::default();
    let parsed = parser
        .parse("Picea abies (L.) H.Karst.", Rank::Unranked, None)
        .unwrap();
    assert_eq!(parsed.basionym_authorship.unwrap().authors, vec!["L.".to_string()]);
    assert_eq!(
        parsed.combination_authorship.unwrap().authors,
        vec!["H.Karst.".to_string()]
    );
}

#[test]
fn trinomial_carries_infraspecific_epithet_and_rank() {
    let parser = NameParser::default();
    let parsed = parser
        .parse("Abies alba subsp. alpina Mill.", Rank::Unranked, None)
        .unwrap();
    assert_eq!(parsed.genus.as_deref(), Some("Abies"));
    assert_eq!(parsed.specific_epithet.as_deref(), Some("alba"));
    assert_eq!(parsed.infraspecific_epithet.as_deref(), Some("alpina"));
    assert_eq!(parsed.rank, Rank::Subspecies);
}

#[test]
fn hybrid_genus_sets_notho_generic() {
    let parser = NameParser::default();
    let parsed = parser.parse("×Abies Mill.", Rank::Unranked, None).unwrap();
    assert_eq!(parsed.uninomial.as_deref(), Some("Abies"));
    assert_eq!(parsed.notho, Some(Notho::Generic));
}

#[test]
fn indetermined_species_is_flagged_not_rejected() {
    let parser = NameParser::default();
    let parsed = parser.parse("Abies sp.", Rank::Unranked, None).unwrap();
    assert_eq!(parsed.genus.as_deref(), Some("Abies"));
    assert!(parsed.warnings.contains(&Warning::Indetermined));
}

#[test]
fn genus_rank_hint_prefers_uninomial_over_binomial() {
    let parser = NameParser::default();
    let parsed = parser.parse("Abies Mill.", Rank::Genus, None).unwrap();
    assert_eq!(parsed.uninomial.as_deref(), Some("Abies"));
    assert!(parsed.specific_epithet.is_none());
}

#[test]
fn cultivar_name_is_classified_and_coded() {
    let parser = NameParser::default();
    let parsed = parser
        .parse("Rosa 'New Dawn'", Rank::Unranked, None)
        .unwrap();
    assert_eq!(parsed.genus.as_deref(), Some("Rosa"));
    assert_eq!(parsed.cultivar_epithet.as_deref(), Some("New Dawn"));
    assert_eq!(parsed.rank, Rank::Cultivar);
}

#[test]
fn nomenclatural_status_phrase_is_extracted() {
    let parser = NameParser::default();
    let parsed = parser
        .parse("Abies alba Mill., nom. nud.", Rank::Unranked, None)
        .unwrap();
    assert_eq!(parsed.nomenclatural_note.as_deref(), Some("nom. nud."));
}

#[test]
fn trailing_reference_becomes_published_in() {
    let parser = NameParser::default();
    let parsed = parser
        .parse("Abies alba Mill. in Jones, Flora 12:3. 1880", Rank::Unranked, None)
        .unwrap();
    assert_eq!(
        parsed.published_in.as_deref(),
        Some("Jones, Flora 12:3. 1880")
    );
}

#[rstest]
#[case("BOLD:AAX3687", NameType::Otu)]
#[case("Pinus alba × Abies picea Mill.", NameType::HybridFormula)]
#[case("Tobacco mosaic virus", NameType::Virus)]
#[case("incertae sedis", NameType::Placeholder)]
fn rejects_non_scientific_inputs(#[case] input: &str, #[case] expected: NameType) {
    let parser = NameParser::default();
    let err = parser.parse(input, Rank::Unranked, None).unwrap_err();
    assert_eq!(err.name_type, expected);
}

/// spec.md §8 testable property 3, idempotence-under-round-trip: for any
/// successfully parsed name with `state=Complete`, serialising `ParsedName`
/// back to a canonical string and re-parsing it yields an equal `ParsedName`.
#[rstest]
#[case("Abies alba Mill.")]
#[case("Picea abies (L.) H.Karst.")]
#[case("Abies alba subsp. alpina Mill.")]
#[case("Quercus robur L.")]
fn round_trips_through_its_own_canonical_string(#[case] input: &str) {
    let parser = NameParser::default();
    let parsed = parser.parse(input, Rank::Unranked, None).unwrap();
    assert_eq!(parsed.state, ParseState::Complete);

    let canonical = parsed
        .to_canonical_string()
        .expect("a complete scientific name always canonicalises");
    let reparsed = parser.parse(&canonical, Rank::Unranked, None).unwrap();

    assert_eq!(parsed, reparsed);
}

#[test]
fn html_entities_and_xml_tags_are_cleaned_with_warnings() {
    let parser = NameParser::default();
    let parsed = parser
        .parse("<i>Abies alba</i> Mill. &amp; Picea", Rank::Unranked, None)
        .unwrap();
    assert!(parsed.warnings.contains(&Warning::XmlTags));
    assert!(parsed.warnings.contains(&Warning::HtmlEntities));
}
