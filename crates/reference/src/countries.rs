//! Country table: display names and ISO 3166-1 alpha-2 codes
//!
//! The list, display-name map and code map served by the API are all derived
//! from [`COUNTRIES`], so the three views can never disagree.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Display name, as shown to players
    pub name: &'static str,
    /// Upper-case ISO 3166-1 alpha-2 code (`XK` for Kosovo)
    pub code: &'static str,
}

const fn country(name: &'static str, code: &'static str) -> Country {
    Country { name, code }
}

/// Every country accepted by the game, sorted by display name
pub const COUNTRIES: &[Country] = &[
    country("Afghanistan", "AF"),
    country("Albania", "AL"),
    country("Algeria", "DZ"),
    country("Andorra", "AD"),
    country("Angola", "AO"),
    country("Antigua and Barbuda", "AG"),
    country("Argentina", "AR"),
    country("Armenia", "AM"),
    country("Australia", "AU"),
    country("Austria", "AT"),
    country("Azerbaijan", "AZ"),
    country("Bahamas", "BS"),
    country("Bahrain", "BH"),
    country("Bangladesh", "BD"),
    country("Barbados", "BB"),
    country("Belarus", "BY"),
    country("Belgium", "BE"),
    country("Belize", "BZ"),
    country("Benin", "BJ"),
    country("Bhutan", "BT"),
    country("Bolivia", "BO"),
    country("Bosnia and Herzegovina", "BA"),
    country("Botswana", "BW"),
    country("Brazil", "BR"),
    country("Brunei", "BN"),
    country("Bulgaria", "BG"),
    country("Burkina Faso", "BF"),
    country("Burundi", "BI"),
    country("Cabo Verde", "CV"),
    country("Cambodia", "KH"),
    country("Cameroon", "CM"),
    country("Canada", "CA"),
    country("Central African Republic", "CF"),
    country("Chad", "TD"),
    country("Chile", "CL"),
    country("China", "CN"),
    country("Colombia", "CO"),
    country("Comoros", "KM"),
    country("Congo", "CG"),
    country("Costa Rica", "CR"),
    country("Croatia", "HR"),
    country("Cuba", "CU"),
    country("Cyprus", "CY"),
    country("Czechia", "CZ"),
    country("Democratic Republic of the Congo", "CD"),
    country("Denmark", "DK"),
    country("Djibouti", "DJ"),
    country("Dominica", "DM"),
    country("Dominican Republic", "DO"),
    country("Ecuador", "EC"),
    country("Egypt", "EG"),
    country("El Salvador", "SV"),
    country("Equatorial Guinea", "GQ"),
    country("Eritrea", "ER"),
    country("Estonia", "EE"),
    country("Eswatini", "SZ"),
    country("Ethiopia", "ET"),
    country("Fiji", "FJ"),
    country("Finland", "FI"),
    country("France", "FR"),
    country("Gabon", "GA"),
    country("Gambia", "GM"),
    country("Georgia", "GE"),
    country("Germany", "DE"),
    country("Ghana", "GH"),
    country("Greece", "GR"),
    country("Grenada", "GD"),
    country("Guatemala", "GT"),
    country("Guinea", "GN"),
    country("Guinea-Bissau", "GW"),
    country("Guyana", "GY"),
    country("Haiti", "HT"),
    country("Honduras", "HN"),
    country("Hungary", "HU"),
    country("Iceland", "IS"),
    country("India", "IN"),
    country("Indonesia", "ID"),
    country("Iran", "IR"),
    country("Iraq", "IQ"),
    country("Ireland", "IE"),
    country("Israel", "IL"),
    country("Italy", "IT"),
    country("Ivory Coast", "CI"),
    country("Jamaica", "JM"),
    country("Japan", "JP"),
    country("Jordan", "JO"),
    country("Kazakhstan", "KZ"),
    country("Kenya", "KE"),
    country("Kiribati", "KI"),
    country("Kosovo", "XK"),
    country("Kuwait", "KW"),
    country("Kyrgyzstan", "KG"),
    country("Laos", "LA"),
    country("Latvia", "LV"),
    country("Lebanon", "LB"),
    country("Lesotho", "LS"),
    country("Liberia", "LR"),
    country("Libya", "LY"),
    country("Liechtenstein", "LI"),
    country("Lithuania", "LT"),
    country("Luxembourg", "LU"),
    country("Madagascar", "MG"),
    country("Malawi", "MW"),
    country("Malaysia", "MY"),
    country("Maldives", "MV"),
    country("Mali", "ML"),
    country("Malta", "MT"),
    country("Marshall Islands", "MH"),
    country("Mauritania", "MR"),
    country("Mauritius", "MU"),
    country("Mexico", "MX"),
    country("Micronesia", "FM"),
    country("Moldova", "MD"),
    country("Monaco", "MC"),
    country("Mongolia", "MN"),
    country("Montenegro", "ME"),
    country("Morocco", "MA"),
    country("Mozambique", "MZ"),
    country("Myanmar", "MM"),
    country("Namibia", "NA"),
    country("Nauru", "NR"),
    country("Nepal", "NP"),
    country("Netherlands", "NL"),
    country("New Zealand", "NZ"),
    country("Nicaragua", "NI"),
    country("Niger", "NE"),
    country("Nigeria", "NG"),
    country("North Korea", "KP"),
    country("North Macedonia", "MK"),
    country("Norway", "NO"),
    country("Oman", "OM"),
    country("Pakistan", "PK"),
    country("Palau", "PW"),
    country("Palestine", "PS"),
    country("Panama", "PA"),
    country("Papua New Guinea", "PG"),
    country("Paraguay", "PY"),
    country("Peru", "PE"),
    country("Philippines", "PH"),
    country("Poland", "PL"),
    country("Portugal", "PT"),
    country("Qatar", "QA"),
    country("Romania", "RO"),
    country("Russia", "RU"),
    country("Rwanda", "RW"),
    country("Saint Kitts and Nevis", "KN"),
    country("Saint Lucia", "LC"),
    country("Saint Vincent and the Grenadines", "VC"),
    country("Samoa", "WS"),
    country("San Marino", "SM"),
    country("Sao Tome and Principe", "ST"),
    country("Saudi Arabia", "SA"),
    country("Senegal", "SN"),
    country("Serbia", "RS"),
    country("Seychelles", "SC"),
    country("Sierra Leone", "SL"),
    country("Singapore", "SG"),
    country("Slovakia", "SK"),
    country("Slovenia", "SI"),
    country("Solomon Islands", "SB"),
    country("Somalia", "SO"),
    country("South Africa", "ZA"),
    country("South Korea", "KR"),
    country("South Sudan", "SS"),
    country("Spain", "ES"),
    country("Sri Lanka", "LK"),
    country("Sudan", "SD"),
    country("Suriname", "SR"),
    country("Sweden", "SE"),
    country("Switzerland", "CH"),
    country("Syria", "SY"),
    country("Taiwan", "TW"),
    country("Tajikistan", "TJ"),
    country("Tanzania", "TZ"),
    country("Thailand", "TH"),
    country("Timor-Leste", "TL"),
    country("Togo", "TG"),
    country("Tonga", "TO"),
    country("Trinidad and Tobago", "TT"),
    country("Tunisia", "TN"),
    country("Turkey", "TR"),
    country("Turkmenistan", "TM"),
    country("Tuvalu", "TV"),
    country("Uganda", "UG"),
    country("Ukraine", "UA"),
    country("United Arab Emirates", "AE"),
    country("United Kingdom", "GB"),
    country("United States", "US"),
    country("Uruguay", "UY"),
    country("Uzbekistan", "UZ"),
    country("Vanuatu", "VU"),
    country("Vatican City", "VA"),
    country("Venezuela", "VE"),
    country("Vietnam", "VN"),
    country("Yemen", "YE"),
    country("Zambia", "ZM"),
    country("Zimbabwe", "ZW"),
];

/// Look up a country by its canonical name, ignoring case and surrounding whitespace
pub fn find(name: &str) -> Option<&'static Country> {
    let wanted = name.trim();
    COUNTRIES
        .iter()
        .find(|country| country.name.eq_ignore_ascii_case(wanted))
}

/// Lower-case country names, sorted
pub fn country_names() -> Vec<String> {
    let mut names: Vec<String> = COUNTRIES.iter().map(|c| c.name.to_lowercase()).collect();
    names.sort();
    names
}

/// Lower-case name → display name
pub fn country_map() -> BTreeMap<String, &'static str> {
    COUNTRIES
        .iter()
        .map(|c| (c.name.to_lowercase(), c.name))
        .collect()
}

/// Display name → lower-case ISO code (the form flag-icon sets use)
pub fn country_codes() -> BTreeMap<&'static str, String> {
    COUNTRIES
        .iter()
        .map(|c| (c.name, c.code.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_sorted_and_unique() {
        let names: Vec<&str> = COUNTRIES.iter().map(|c| c.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_codes_are_unique_two_letter_upper() {
        let mut seen = HashSet::new();
        for c in COUNTRIES {
            assert_eq!(c.code.len(), 2, "{}", c.name);
            assert!(c.code.chars().all(|ch| ch.is_ascii_uppercase()), "{}", c.name);
            assert!(seen.insert(c.code), "duplicate code {}", c.code);
        }
    }

    #[test]
    fn test_derived_views_agree() {
        let names = country_names();
        let map = country_map();
        let codes = country_codes();

        assert_eq!(names.len(), COUNTRIES.len());
        assert_eq!(map.len(), COUNTRIES.len());
        assert_eq!(codes.len(), COUNTRIES.len());

        for name in &names {
            let display = map[name];
            assert!(codes.contains_key(display));
        }
        assert_eq!(map["united kingdom"], "United Kingdom");
        assert_eq!(codes["Norway"], "no");
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("  new zealand ").map(|c| c.code), Some("NZ"));
        assert_eq!(find("GUINEA-BISSAU").map(|c| c.code), Some("GW"));
        assert!(find("atlantis").is_none());
    }
}
