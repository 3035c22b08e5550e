//! ISO 3780 country assignments by the first two WMI characters.

use crate::core::Vin;

/// Order of the second WMI character within a country range.
const SECOND_CHAR_ORDER: &str = "ABCDEFGHJKLMNPRSTUVWXYZ1234567890";

/// `(first char, second char from, second char to, country)`, ranges inclusive.
static COUNTRY_RANGES: &[(char, char, char, &str)] = &[
    ('A', 'A', 'H', "South Africa"),
    ('A', 'J', 'N', "Ivory Coast"),
    ('B', 'A', 'E', "Angola"),
    ('B', 'F', 'K', "Kenya"),
    ('B', 'L', 'R', "Tanzania"),
    ('C', 'A', 'E', "Benin"),
    ('C', 'F', 'K', "Madagascar"),
    ('C', 'L', 'R', "Tunisia"),
    ('D', 'A', 'E', "Egypt"),
    ('D', 'F', 'K', "Morocco"),
    ('D', 'L', 'R', "Zambia"),
    ('E', 'A', 'E', "Ethiopia"),
    ('E', 'F', 'K', "Mozambique"),
    ('F', 'A', 'E', "Ghana"),
    ('F', 'F', 'K', "Nigeria"),
    ('J', 'A', '0', "Japan"),
    ('K', 'A', 'E', "Sri Lanka"),
    ('K', 'F', 'K', "Israel"),
    ('K', 'L', 'R', "South Korea"),
    ('K', 'S', '0', "Kazakhstan"),
    ('L', 'A', '0', "China"),
    ('M', 'A', 'E', "India"),
    ('M', 'F', 'K', "Indonesia"),
    ('M', 'L', 'R', "Thailand"),
    ('N', 'A', 'E', "Iran"),
    ('N', 'F', 'K', "Pakistan"),
    ('N', 'L', 'R', "Turkey"),
    ('P', 'A', 'E', "Philippines"),
    ('P', 'F', 'K', "Singapore"),
    ('P', 'L', 'R', "Malaysia"),
    ('R', 'A', 'E', "United Arab Emirates"),
    ('R', 'F', 'K', "Taiwan"),
    ('R', 'L', 'R', "Vietnam"),
    ('R', 'S', '0', "Saudi Arabia"),
    ('S', 'A', 'M', "United Kingdom"),
    ('S', 'N', 'T', "Germany"),
    ('S', 'U', 'Z', "Poland"),
    ('S', '1', '4', "Latvia"),
    ('T', 'A', 'H', "Switzerland"),
    ('T', 'J', 'P', "Czech Republic"),
    ('T', 'R', 'V', "Hungary"),
    ('T', 'W', '1', "Portugal"),
    ('U', 'H', 'M', "Denmark"),
    ('U', 'N', 'T', "Ireland"),
    ('U', 'U', 'Z', "Romania"),
    ('U', '5', '7', "Slovakia"),
    ('V', 'A', 'E', "Austria"),
    ('V', 'F', 'R', "France"),
    ('V', 'S', 'W', "Spain"),
    ('V', 'X', '2', "Serbia"),
    ('V', '3', '5', "Croatia"),
    ('V', '6', '0', "Estonia"),
    ('W', 'A', '0', "Germany"),
    ('X', 'A', 'E', "Bulgaria"),
    ('X', 'F', 'K', "Greece"),
    ('X', 'L', 'R', "Netherlands"),
    ('X', 'S', 'W', "Russia"),
    ('X', 'X', '2', "Luxembourg"),
    ('X', '3', '0', "Russia"),
    ('Y', 'A', 'E', "Belgium"),
    ('Y', 'F', 'K', "Finland"),
    ('Y', 'L', 'R', "Malta"),
    ('Y', 'S', 'W', "Sweden"),
    ('Y', 'X', '2', "Norway"),
    ('Y', '3', '5', "Belarus"),
    ('Y', '6', '0', "Ukraine"),
    ('Z', 'A', 'R', "Italy"),
    ('Z', 'X', '2', "Slovenia"),
    ('Z', '3', '5', "Lithuania"),
    ('1', 'A', '0', "United States"),
    ('2', 'A', '0', "Canada"),
    ('3', 'A', 'W', "Mexico"),
    ('3', 'X', '7', "Costa Rica"),
    ('3', '8', '9', "Cayman Islands"),
    ('4', 'A', '0', "United States"),
    ('5', 'A', '0', "United States"),
    ('6', 'A', 'W', "Australia"),
    ('7', 'A', 'E', "New Zealand"),
    ('8', 'A', 'E', "Argentina"),
    ('8', 'F', 'K', "Chile"),
    ('8', 'L', 'R', "Ecuador"),
    ('8', 'S', 'W', "Peru"),
    ('8', 'X', '2', "Venezuela"),
    ('9', 'A', 'E', "Brazil"),
    ('9', 'F', 'K', "Colombia"),
    ('9', 'L', 'R', "Paraguay"),
    ('9', 'S', 'W', "Uruguay"),
    ('9', 'X', '2', "Trinidad and Tobago"),
    ('9', '3', '9', "Brazil"),
];

fn rank(c: char) -> Option<usize> {
    SECOND_CHAR_ORDER.find(c)
}

fn in_range(pos: usize, from: char, to: char) -> bool {
    match (rank(from), rank(to)) {
        (Some(lo), Some(hi)) => lo <= pos && pos <= hi,
        _ => false,
    }
}

/// Country lookup on the first two characters of a WMI.
pub(crate) fn country_for_code(first: char, second: char) -> Option<&'static str> {
    let pos = rank(second)?;
    COUNTRY_RANGES
        .iter()
        .find(|&&(f, from, to, _)| f == first && in_range(pos, from, to))
        .map(|&(_, _, _, name)| name)
}

/// Country of manufacture of `vin`, if the code range is assigned.
pub fn country(vin: &Vin) -> Option<&'static str> {
    country_for_code(vin.char_at(1), vin.char_at(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries() {
        assert_eq!(country_for_code('1', 'H'), Some("United States"));
        assert_eq!(country_for_code('2', 'T'), Some("Canada"));
        assert_eq!(country_for_code('3', 'V'), Some("Mexico"));
        assert_eq!(country_for_code('J', 'H'), Some("Japan"));
        assert_eq!(country_for_code('K', 'M'), Some("South Korea"));
        assert_eq!(country_for_code('W', 'B'), Some("Germany"));
        assert_eq!(country_for_code('S', 'C'), Some("United Kingdom"));
        assert_eq!(country_for_code('Z', 'F'), Some("Italy"));
        assert_eq!(country_for_code('V', 'F'), Some("France"));
        assert_eq!(country_for_code('Y', 'V'), Some("Sweden"));
    }

    #[test]
    fn range_bounds_follow_iso_order() {
        // Digits sort after letters, and 0 is last.
        assert_eq!(country_for_code('3', 'W'), Some("Mexico"));
        assert_eq!(country_for_code('3', 'X'), Some("Costa Rica"));
        assert_eq!(country_for_code('3', '7'), Some("Costa Rica"));
        assert_eq!(country_for_code('3', '8'), Some("Cayman Islands"));
        assert_eq!(country_for_code('W', '0'), Some("Germany"));
        assert_eq!(country_for_code('9', '3'), Some("Brazil"));
    }

    #[test]
    fn unassigned_ranges() {
        assert_eq!(country_for_code('3', '0'), None);
        assert_eq!(country_for_code('Z', 'S'), None);
        assert_eq!(country_for_code('0', 'A'), None);
    }

    #[test]
    fn ranges_are_well_formed() {
        for &(first, from, to, name) in COUNTRY_RANGES {
            let (lo, hi) = (rank(from).unwrap(), rank(to).unwrap());
            assert!(lo <= hi, "{first}{from}-{first}{to} ({name}) is reversed");
        }
    }

    #[test]
    fn ranges_do_not_overlap() {
        for (i, a) in COUNTRY_RANGES.iter().enumerate() {
            for b in &COUNTRY_RANGES[i + 1..] {
                if a.0 != b.0 {
                    continue;
                }
                let (a_lo, a_hi) = (rank(a.1).unwrap(), rank(a.2).unwrap());
                let (b_lo, b_hi) = (rank(b.1).unwrap(), rank(b.2).unwrap());
                assert!(a_hi < b_lo || b_hi < a_lo, "{} overlaps {}", a.3, b.3);
            }
        }
    }
}
