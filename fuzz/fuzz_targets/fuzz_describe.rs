#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(vin) = vinlib::Vin::parse_lenient(s) {
            let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            let _ = vinlib::decode::describe(&vin, reference).to_string();
        }
    }
});
