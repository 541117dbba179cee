//! Epithet blacklist: tokens that look like epithets but are not.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

pub static EPITHET_BLACKLIST: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "sp", "spp", "spec", "species", "ssp", "subsp", "indet", "indeterminate", "cf", "cf.",
        "aff", "aff.", "nr", "nr.", "undet", "undetermined", "unknown", "unnamed", "incertae",
        "nov", "undescribed", "sensu",
    ]
    .into_iter()
    .collect()
});
