//! Nomenclatural status phrases (`nom. nud.`, `comb. nov.`, …).

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

pub static NOM_STATUS_PHRASES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "nom. illeg.",
        "nom. illegit.",
        "nom. inval.",
        "nom. nud.",
        "nom. rejic.",
        "nom. cons.",
        "nom. cons. prop.",
        "nom. ambig.",
        "nom. dub.",
        "nom. obl.",
        "nom. prot.",
        "nom. supprim.",
        "nom. superfl.",
        "nom. alternativ.",
        "nom. nov.",
        "nom. altern.",
        "comb. nov.",
        "comb. nud.",
        "comb. illeg.",
        "comb. inval.",
        "sp. nov.",
        "spec. nov.",
        "gen. nov.",
        "fam. nov.",
        "stat. nov.",
        "stat. rev.",
        "ined.",
        "in ed.",
        "orth. cons.",
        "orth. var.",
        "pro syn.",
        "pro parte",
        "sensu lato",
        "sensu stricto",
        "incertae sedis",
    ]
    .into_iter()
    .collect()
});
