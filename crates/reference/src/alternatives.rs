//! Alternative namings: colloquial, former and abbreviated country names

use crate::countries::{self, Country};
use crate::{LookupError, LookupResult};
use std::collections::BTreeMap;

/// Alternative name → canonical name, both lower-case
pub const ALTERNATIVE_NAMINGS: &[(&str, &str)] = &[
    ("america", "united states"),
    ("burma", "myanmar"),
    ("cape verde", "cabo verde"),
    ("congo-brazzaville", "congo"),
    ("congo-kinshasa", "democratic republic of the congo"),
    ("cote d'ivoire", "ivory coast"),
    ("czech republic", "czechia"),
    ("dprk", "north korea"),
    ("drc", "democratic republic of the congo"),
    ("east timor", "timor-leste"),
    ("england", "united kingdom"),
    ("federated states of micronesia", "micronesia"),
    ("great britain", "united kingdom"),
    ("holland", "netherlands"),
    ("holy see", "vatican city"),
    ("korea", "south korea"),
    ("macedonia", "north macedonia"),
    ("northern ireland", "united kingdom"),
    ("persia", "iran"),
    ("republic of korea", "south korea"),
    ("republic of the congo", "congo"),
    ("russian federation", "russia"),
    ("scotland", "united kingdom"),
    ("st kitts and nevis", "saint kitts and nevis"),
    ("st lucia", "saint lucia"),
    ("st vincent and the grenadines", "saint vincent and the grenadines"),
    ("swaziland", "eswatini"),
    ("the bahamas", "bahamas"),
    ("the gambia", "gambia"),
    ("turkiye", "turkey"),
    ("uae", "united arab emirates"),
    ("uk", "united kingdom"),
    ("united states of america", "united states"),
    ("us", "united states"),
    ("usa", "united states"),
    ("vatican", "vatican city"),
    ("viet nam", "vietnam"),
    ("wales", "united kingdom"),
    ("zaire", "democratic republic of the congo"),
];

/// Alternative name → canonical lower-case name
pub fn alternative_namings() -> BTreeMap<&'static str, &'static str> {
    ALTERNATIVE_NAMINGS.iter().copied().collect()
}

/// Resolve user input to a country, accepting canonical and alternative names.
pub fn resolve(input: &str) -> LookupResult<&'static Country> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(LookupError::Empty);
    }

    if let Some(country) = countries::find(&normalized) {
        return Ok(country);
    }

    ALTERNATIVE_NAMINGS
        .iter()
        .find(|(alternative, _)| *alternative == normalized)
        .and_then(|(_, canonical)| countries::find(canonical))
        .ok_or(LookupError::UnknownCountry(normalized))
}
