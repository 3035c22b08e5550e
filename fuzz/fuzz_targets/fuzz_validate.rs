#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let strict = vinlib::validate(s);
        let _ = vinlib::compute_check_digit(s);
        if let Ok(vin) = vinlib::Vin::parse(s) {
            assert!(strict.is_ok());
            assert_eq!(format!("{}{}{}", vin.wmi(), vin.vds(), vin.vis()), s);
        }
        let _ = vinlib::Vin::parse_lenient(s);
    }
});
