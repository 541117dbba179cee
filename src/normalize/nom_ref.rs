//! Step 2: detect and excise a bibliographic citation (`in Jones, Flora
//! 12:3. 1880`) into `published_in`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Outcome, Warning};
use crate::model::ParsedName;

static NOM_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?x)
        \s+ in \s+
        (?P<ref>
            [A-ZÀ-Þ][\w.,:&'’\-\s]*
            \d{4}
            [a-z]?
        )
        \.?
        \s*$
    ")
    .unwrap()
});

pub fn preparse_nom_ref(input: &str, out: &mut ParsedName) -> Outcome<String> {
    if let Some(caps) = NOM_REF_RE.captures(input) {
        let whole = caps.get(0).unwrap();
        let reference = caps.name("ref").unwrap().as_str().trim().to_string();
        out.published_in = Some(reference);
        out.add_warning(Warning::NomenclaturalReference);
        let mut text = input.to_string();
        text.replace_range(whole.start()..whole.end(), "");
        return Ok(text);
    }
    Ok(input.to_string())
}
