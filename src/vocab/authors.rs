//! Author abbreviations and name particles.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Well-known truncated author abbreviations. Not exhaustive — mainly used
/// by the classifier to bias ambiguous matches, not to validate authorship.
pub static AUTHOR_ABBREVIATIONS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "L.", "Mill.", "DC.", "Pers.", "Fr.", "Nees", "Juss.", "Benth.", "Hook.f.", "Hook.",
        "A.Gray", "Gray", "Torr.", "Willd.", "Lam.", "Sm.", "Raf.", "Steud.", "Kunth", "Spreng.",
        "Griseb.", "Schltr.", "Rchb.", "Rchb.f.", "Boiss.", "Engl.", "Harms", "Bunge", "Ledeb.",
        "Turcz.", "Maxim.", "Franch.", "H.Karst.", "auct.", "hort.", "auct. non",
    ]
    .into_iter()
    .collect()
});

/// Particles that can appear inside a surname without ending the author
/// token (`von`, `de`, `van der`, …).
pub static NAME_PARTICLES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "von", "van", "der", "van der", "van den", "de", "del", "della", "des", "di", "da",
        "dos", "du", "le", "ter", "ten", "zu", "zur", "af", "ibn", "el",
    ]
    .into_iter()
    .collect()
});
