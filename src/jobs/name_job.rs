//! The name-parsing job: runs the normalisation pipeline, tries
//! the top-level patterns in order, fills a [`ParsedName`], and hands
//! authorship groups to [`super::authorship_extract`].

use regex::Captures;

use crate::error::{UnparsableName, Warning};
use crate::model::{NameType, NomCode, Notho, ParseState, ParsedName, Rank};
use crate::normalize;
use crate::regexes::{
    BINOMIAL_RE, CULTIVAR_RE, INDETERMINATE_RE, LC_MONOMIAL_RE, PHRASE_RE, STRAIN_RE,
    TRINOMIAL_RE, UNINOMIAL_RE,
};
use crate::vocab::{EPITHET_BLACKLIST, is_valid_marker_for_code, rank_marker_for};

use super::authorship_extract::{extract, extract_sanctioning};
use super::classify::classify_unmatched;

pub fn parse(
    raw: &str,
    rank_hint: Rank,
    code_hint: Option<NomCode>,
) -> Result<ParsedName, UnparsableName> {
    let mut out = ParsedName::empty(NameType::Scientific);
    out.code = code_hint;

    let text = normalize::run(raw, &mut out).map_err(|u| raw_preserving(u.into(), raw))?;

    if let Some(caps) = INDETERMINATE_RE.captures(&text) {
        let token = caps.name("token").unwrap().as_str();
        let bare = token.trim_end_matches('.');
        if EPITHET_BLACKLIST.contains(bare) {
            populate_indeterminate(&caps, &mut out, rank_hint);
            return Ok(finish(out));
        }
    }

    if let Some(caps) = CULTIVAR_RE.captures(&text) {
        populate_cultivar(&caps, &mut out);
        return Ok(finish(out));
    }

    if let Some(caps) = STRAIN_RE.captures(&text) {
        populate_strain(&caps, &mut out);
        return Ok(finish(out));
    }

    if let Some(caps) = TRINOMIAL_RE.captures(&text) {
        populate_trinomial(&caps, &mut out, rank_hint);
        return Ok(finish(out));
    }

    // Tie-break: a two-token capitalised-lower-case pair with a
    // GENUS rank hint reads as genus + authorship particle, not a binomial,
    // so a genus-level hint tries the uninomial pattern first.
    if rank_hint <= Rank::Genus && rank_hint != Rank::Unranked {
        if let Some(caps) = UNINOMIAL_RE.captures(&text) {
            populate_uninomial(&caps, &mut out, rank_hint);
            return Ok(finish(out));
        }
    }

    if let Some(caps) = BINOMIAL_RE.captures(&text) {
        if epithet_is_blacklisted(&caps, "specific") {
            // falls through to classification below
        } else {
            populate_binomial(&caps, &mut out, rank_hint);
            return Ok(finish(out));
        }
    }

    if let Some(caps) = PHRASE_RE.captures(&text) {
        populate_phrase(&caps, &mut out);
        return Ok(finish(out));
    }

    if let Some(caps) = UNINOMIAL_RE.captures(&text) {
        populate_uninomial(&caps, &mut out, rank_hint);
        return Ok(finish(out));
    }

    // Last resort: the *entire* (already-normalised) input is a single
    // lower-case token where a uninomial would go (missing its capital,
    // e.g. OCR'd or hand-typed input) — deliberately narrow so arbitrary
    // multi-word lower-case garbage still falls through to the classifier.
    if let Some(caps) = LC_MONOMIAL_RE.captures(&text) {
        let word = caps.name("word").unwrap().as_str();
        let tail_empty = caps.name("tail").map(|m| m.as_str().trim().is_empty()).unwrap_or(true);
        if tail_empty && !EPITHET_BLACKLIST.contains(word.trim_end_matches('.')) {
            populate_lc_monomial(&caps, &mut out, rank_hint);
            return Ok(finish(out));
        }
    }

    let name_type = classify_unmatched(&text);
    Err(UnparsableName {
        name_type,
        input: raw.to_string(),
    })
}

fn raw_preserving(mut err: UnparsableName, raw: &str) -> UnparsableName {
    err.input = raw.to_string();
    err
}

fn epithet_is_blacklisted(caps: &Captures, group: &str) -> bool {
    caps.name(group)
        .map(|m| EPITHET_BLACKLIST.contains(m.as_str().trim_end_matches('.')))
        .unwrap_or(false)
}

fn finish(mut out: ParsedName) -> ParsedName {
    debug_assert!(
        out.check_invariants().is_ok(),
        "ParsedName invariant violated: {:?}",
        out
    );
    if out.state != ParseState::None && out.unparsed.is_empty() {
        out.state = ParseState::Complete;
    }
    if out.warnings.contains(&Warning::QuestionMarksRemoved) {
        out.doubtful = true;
    }
    out
}

fn set_tail(caps: &Captures, out: &mut ParsedName) {
    let tail = caps.name("tail").map(|m| m.as_str().trim()).unwrap_or("");
    if tail.is_empty() {
        out.state = ParseState::Complete;
    } else {
        out.state = ParseState::Partial;
        out.unparsed.push(tail.to_string());
    }
}

fn set_authorship(caps: &Captures, out: &mut ParsedName) {
    out.basionym_authorship = extract(caps, "bas");
    out.combination_authorship = extract(caps, "comb");
    out.sanctioning_author = extract_sanctioning(caps, "bas").or_else(|| extract_sanctioning(caps, "comb"));
}

fn notho_present(caps: &Captures, group: &str) -> bool {
    caps.name(group).map(|m| !m.as_str().is_empty()).unwrap_or(false)
}

fn resolve_rank(marker: Option<Rank>, default: Rank, hint: Rank, out: &mut ParsedName) -> Rank {
    let resolved = marker.unwrap_or(default);
    if hint != Rank::Unranked && hint != resolved {
        out.add_warning(Warning::RankMismatch);
    }
    resolved
}

fn populate_uninomial(caps: &Captures, out: &mut ParsedName, rank_hint: Rank) {
    out.uninomial = Some(caps.name("uninomial").unwrap().as_str().to_string());
    if notho_present(caps, "notho") {
        out.notho = Some(Notho::Generic);
    }
    if rank_hint.is_species_or_below() {
        // A single uninomial token was supplied, but the hint expected a
        // genus to already be present at or below species rank.
        out.add_warning(Warning::MissingGenus);
    }
    out.rank = if rank_hint != Rank::Unranked {
        rank_hint
    } else {
        Rank::Unranked
    };
    set_authorship(caps, out);
    set_tail(caps, out);
}

fn populate_binomial(caps: &Captures, out: &mut ParsedName, rank_hint: Rank) {
    out.genus = Some(caps.name("genus").unwrap().as_str().to_string());
    if let Some(m) = caps.name("infrageneric") {
        out.infrageneric_epithet = Some(m.as_str().to_string());
    }
    out.specific_epithet = Some(caps.name("specific").unwrap().as_str().to_string());
    if notho_present(caps, "notho") {
        out.notho = Some(Notho::Specific);
    }
    if rank_hint != Rank::Unranked && rank_hint < Rank::Genus {
        // A binomial shape was matched, but the caller hinted a rank above
        // genus (family, order, …) — the more specific cousin of
        // RANK_MISMATCH for exactly this binomial/higher-rank combination.
        out.add_warning(Warning::HigherRankBinomial);
    }
    out.rank = resolve_rank(None, Rank::Species, rank_hint, out);
    set_authorship(caps, out);
    set_tail(caps, out);
}

fn populate_trinomial(caps: &Captures, out: &mut ParsedName, rank_hint: Rank) {
    out.genus = Some(caps.name("genus").unwrap().as_str().to_string());
    if let Some(m) = caps.name("infrageneric") {
        out.infrageneric_epithet = Some(m.as_str().to_string());
    }
    out.specific_epithet = Some(caps.name("specific").unwrap().as_str().to_string());
    out.infraspecific_epithet = Some(caps.name("infraspecific").unwrap().as_str().to_string());
    if notho_present(caps, "infranotho") {
        out.notho = Some(Notho::Infraspecific);
    }
    let marker_token = caps.name("rank_marker").map(|m| m.as_str());
    // `out.code` may already be set from a code hint passed to `parse`, or
    // inferred upstream (e.g. a `Candidatus` prefix biases it to
    // `Bacterial`) — either way it filters which marker tokens the code's
    // own rules recognise (spec §4.4: "code biases rank-marker
    // resolution"). ICZN doesn't regulate infrasubspecific ranks below
    // subspecies the way ICN does; ICNP recognises only `subsp.`.
    let marker = marker_token.and_then(|token| {
        let rank = rank_marker_for(token)?;
        match out.code {
            Some(code) if !is_valid_marker_for_code(token, code) => None,
            _ => Some(rank),
        }
    });
    match (marker_token.is_some(), marker.is_some()) {
        (false, _) => {
            // No explicit rank marker between the specific and infraspecific
            // epithets — subspecies rank is assigned by default, not observed.
            out.add_warning(Warning::SubspeciesAssigned);
        }
        (true, false) => {
            // A marker was present in the text but the hinted/inferred code
            // doesn't recognise it at this rank.
            out.add_warning(Warning::RankMismatch);
        }
        (true, true) => {}
    }
    out.rank = resolve_rank(marker, Rank::Subspecies, rank_hint, out);
    set_authorship(caps, out);
    set_tail(caps, out);
}

fn populate_cultivar(caps: &Captures, out: &mut ParsedName) {
    out.genus = Some(caps.name("genus").unwrap().as_str().to_string());
    if let Some(m) = caps.name("specific") {
        out.specific_epithet = Some(m.as_str().to_string());
    }
    let cultivar = caps.name("cultivar").unwrap().as_str().trim().to_string();
    if cultivar.is_empty() {
        out.add_warning(Warning::NullEpithet);
    }
    out.cultivar_epithet = Some(cultivar);
    out.rank = Rank::Cultivar;
    out.code = Some(NomCode::Cultivars);
    set_tail(caps, out);
}

fn populate_strain(caps: &Captures, out: &mut ParsedName) {
    out.genus = Some(caps.name("genus").unwrap().as_str().to_string());
    if let Some(m) = caps.name("specific") {
        out.specific_epithet = Some(m.as_str().to_string());
    }
    out.strain = Some(caps.name("strain").unwrap().as_str().to_string());
    out.rank = Rank::Strain;
    set_tail(caps, out);
}

fn populate_phrase(caps: &Captures, out: &mut ParsedName) {
    out.genus = Some(caps.name("genus").unwrap().as_str().to_string());
    out.phrase = Some(caps.name("phrase").unwrap().as_str().trim().to_string());
    out.name_type = NameType::Informal;
    out.rank = Rank::Species;
    out.state = ParseState::Complete;
}

fn populate_lc_monomial(caps: &Captures, out: &mut ParsedName, rank_hint: Rank) {
    let word = caps.name("word").unwrap().as_str();
    out.uninomial = Some(capitalize(word));
    out.add_warning(Warning::LcMonomial);
    out.rank = if rank_hint != Rank::Unranked {
        rank_hint
    } else {
        Rank::Unranked
    };
    set_tail(caps, out);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn populate_indeterminate(caps: &Captures, out: &mut ParsedName, rank_hint: Rank) {
    out.genus = Some(caps.name("genus").unwrap().as_str().to_string());
    out.add_warning(Warning::BlacklistedEpithet);
    if let Some(phrase) = caps.name("phrase") {
        out.phrase = Some(phrase.as_str().to_string());
    }
    out.rank = if rank_hint.is_species_or_below() {
        rank_hint
    } else {
        Rank::Species
    };
    out.add_warning(Warning::Indetermined);
    set_tail(caps, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_binomial() {
        let p = parse("Abies alba Mill.", Rank::Unranked, None).unwrap();
        assert_eq!(p.genus.as_deref(), Some("Abies"));
        assert_eq!(p.specific_epithet.as_deref(), Some("alba"));
        assert_eq!(p.rank, Rank::Species);
        assert_eq!(
            p.combination_authorship.unwrap().authors,
            vec!["Mill.".to_string()]
        );
        assert_eq!(p.name_type, NameType::Scientific);
        assert_eq!(p.state, ParseState::Complete);
    }

    #[test]
    fn parses_basionym_and_combination_authorship() {
        let p = parse("Picea abies (L.) H.Karst.", Rank::Unranked, None).unwrap();
        assert_eq!(p.genus.as_deref(), Some("Picea"));
        assert_eq!(p.specific_epithet.as_deref(), Some("abies"));
        assert_eq!(
            p.basionym_authorship.as_ref().unwrap().authors,
            vec!["L.".to_string()]
        );
        assert_eq!(
            p.combination_authorship.as_ref().unwrap().authors,
            vec!["H.Karst.".to_string()]
        );
    }

    #[test]
    fn parses_hybrid_genus() {
        let p = parse("×Abies Mill.", Rank::Unranked, None).unwrap();
        assert_eq!(p.uninomial.as_deref(), Some("Abies"));
        assert_eq!(p.notho, Some(Notho::Generic));
        assert_eq!(
            p.combination_authorship.unwrap().authors,
            vec!["Mill.".to_string()]
        );
    }

    #[test]
    fn parses_indetermined_species() {
        let p = parse("Abies sp.", Rank::Unranked, None).unwrap();
        assert_eq!(p.genus.as_deref(), Some("Abies"));
        assert_eq!(p.rank, Rank::Species);
        assert!(p.warnings.contains(&Warning::Indetermined));
    }

    #[test]
    fn rejects_otu_identifiers() {
        let err = parse("BOLD:AAX3687", Rank::Unranked, None).unwrap_err();
        assert_eq!(err.name_type, NameType::Otu);
        assert_eq!(err.input, "BOLD:AAX3687");
    }

    #[test]
    fn rejects_hybrid_formula() {
        let err = parse("Pinus alba × Abies picea Mill.", Rank::Unranked, None).unwrap_err();
        assert_eq!(err.name_type, NameType::HybridFormula);
    }

    #[test]
    fn lower_case_uninomial_is_capitalised_and_flagged() {
        let p = parse("abies", Rank::Unranked, None).unwrap();
        assert_eq!(p.uninomial.as_deref(), Some("Abies"));
        assert!(p.warnings.contains(&Warning::LcMonomial));
    }

    #[test]
    fn multi_word_lower_case_garbage_is_not_treated_as_lc_monomial() {
        let err = parse("ab ab ab ab", Rank::Unranked, None).unwrap_err();
        assert_eq!(err.name_type, NameType::NoName);
    }

    #[test]
    fn trinomial_without_rank_marker_flags_subspecies_assigned() {
        let p = parse("Abies alba alpina Mill.", Rank::Unranked, None).unwrap();
        assert_eq!(p.rank, Rank::Subspecies);
        assert!(p.warnings.contains(&Warning::SubspeciesAssigned));
    }

    #[test]
    fn candidatus_prefix_sets_flag_and_bacterial_code() {
        let p = parse("Candidatus Phytoplasma asteris", Rank::Unranked, None).unwrap();
        assert!(p.candidatus);
        assert_eq!(p.code, Some(NomCode::Bacterial));
        assert_eq!(p.genus.as_deref(), Some("Phytoplasma"));
        assert_eq!(p.specific_epithet.as_deref(), Some("asteris"));
    }

    #[test]
    fn botanical_code_accepts_variety_marker() {
        let p = parse(
            "Abies alba var. alpina Mill.",
            Rank::Unranked,
            Some(NomCode::Botanical),
        )
        .unwrap();
        assert_eq!(p.rank, Rank::Variety);
        assert!(!p.warnings.contains(&Warning::RankMismatch));
    }

    #[test]
    fn zoological_code_rejects_variety_marker_and_falls_back_to_subspecies_default() {
        let p = parse(
            "Abies alba var. alpina Mill.",
            Rank::Unranked,
            Some(NomCode::Zoological),
        )
        .unwrap();
        assert_eq!(p.rank, Rank::Subspecies);
        assert!(p.warnings.contains(&Warning::RankMismatch));
    }

    #[test]
    fn bacterial_code_accepts_subspecies_marker() {
        let p = parse(
            "Abies alba subsp. alpina Mill.",
            Rank::Unranked,
            Some(NomCode::Bacterial),
        )
        .unwrap();
        assert_eq!(p.rank, Rank::Subspecies);
        assert!(!p.warnings.contains(&Warning::RankMismatch));
    }
}
