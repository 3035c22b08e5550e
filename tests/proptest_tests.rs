//! Property-based tests for validation and the `Vin` value object.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use vinlib::core::*;

const ALPHABET: &str = "0123456789ABCDEFGHJKLMNPRSTUVWXYZ";
const CHECK_CHARS: &str = "0123456789X";

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_legal_char() -> impl Strategy<Value = char> {
    prop::sample::select(ALPHABET.chars().collect::<Vec<_>>())
}

/// 17 legal characters; position 9 is arbitrary from the alphabet.
fn arb_vin_shaped() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_legal_char(), 17)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A valid VIN: a VIN-shaped string with its check digit filled in.
fn arb_valid_vin() -> impl Strategy<Value = String> {
    arb_vin_shaped().prop_map(|raw| {
        let check = compute_check_digit(&raw).unwrap();
        with_check_char(&raw, check)
    })
}

fn with_check_char(raw: &str, check: char) -> String {
    raw.chars()
        .enumerate()
        .map(|(i, c)| {
            if i == CHECK_DIGIT_POSITION - 1 {
                check
            } else {
                c
            }
        })
        .collect()
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wrong_length_always_invalid_length(s in ".{0,40}") {
        let len = s.chars().count();
        prop_assume!(len != VIN_LENGTH);
        prop_assert_eq!(validate(&s), Err(VinError::InvalidLength { length: len }));
    }

    #[test]
    fn illegal_character_wins_over_checksum(
        raw in arb_valid_vin(),
        pos in 0usize..17,
        bad in prop::sample::select(vec!['I', 'O', 'Q', 'a', 'z', ' ', '-', '#', 'é']),
    ) {
        let tampered: String = raw
            .chars()
            .enumerate()
            .map(|(i, c)| if i == pos { bad } else { c })
            .collect();
        prop_assert_eq!(
            validate(&tampered),
            Err(VinError::IllegalCharacter { character: bad, position: pos + 1 })
        );
    }

    #[test]
    fn non_check_char_in_position_9(
        raw in arb_vin_shaped(),
        c in arb_legal_char(),
    ) {
        prop_assume!(!CHECK_CHARS.contains(c));
        let candidate = with_check_char(&raw, c);
        prop_assert_eq!(
            validate(&candidate),
            Err(VinError::IllegalChecksumCharacter { character: c })
        );
    }

    #[test]
    fn computed_check_char_validates(raw in arb_valid_vin()) {
        prop_assert!(validate(&raw).is_ok());
    }

    #[test]
    fn any_other_check_char_fails(
        raw in arb_valid_vin(),
        c in prop::sample::select(CHECK_CHARS.chars().collect::<Vec<_>>()),
    ) {
        let expected = compute_check_digit(&raw).unwrap();
        prop_assume!(c != expected);
        let candidate = with_check_char(&raw, c);
        prop_assert_eq!(
            validate(&candidate),
            Err(VinError::InvalidChecksum { expected, found: c })
        );
    }

    #[test]
    fn validate_is_idempotent(s in ".{0,20}") {
        prop_assert_eq!(validate(&s), validate(&s));
    }

    #[test]
    fn validate_is_idempotent_on_vin_shaped_input(raw in arb_vin_shaped()) {
        let first = validate(&raw);
        prop_assert_eq!(first, validate(&raw));
        prop_assert_eq!(first, validate(&raw.clone()));
    }

    #[test]
    fn sections_decompose_full(raw in arb_valid_vin()) {
        let vin = Vin::parse(&raw).unwrap();
        prop_assert_eq!(vin.wmi().len(), 3);
        prop_assert_eq!(vin.vds().len(), 6);
        prop_assert_eq!(vin.vis().len(), 8);
        prop_assert_eq!(format!("{}{}{}", vin.wmi(), vin.vds(), vin.vis()), raw.clone());
        prop_assert_eq!(vin.as_str(), raw.as_str());
    }

    #[test]
    fn lenient_parse_accepts_lowercase(raw in arb_valid_vin()) {
        let lower = raw.to_ascii_lowercase();
        let vin = Vin::parse_lenient(&lower).unwrap();
        prop_assert_eq!(vin.as_str(), raw.as_str());
    }

    #[test]
    fn never_panics(s in "\\PC*") {
        let _ = validate(&s);
        let _ = Vin::parse_lenient(&s);
        let _ = compute_check_digit(&s);
    }
}
