//! Placeholder tokens used in lieu of a real name (`incertae sedis`, …).

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

pub static PLACEHOLDER_TOKENS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "incertae sedis",
        "unknown",
        "unassigned",
        "unplaced",
        "not assigned",
        "no name",
        "?",
        "\u{2205}",
    ]
    .into_iter()
    .collect()
});
