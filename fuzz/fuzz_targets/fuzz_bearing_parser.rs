#![no_main]

use libfuzzer_sys::fuzz_target;
use polygonzug_rechner::{format_bearing, parse_bearing, parse_bearing_strict};

fuzz_target!(|data: &[u8]| {
    if let Ok(token) = std::str::from_utf8(data) {
        if let Ok(azimuth) = parse_bearing(token) {
            let _ = format_bearing(azimuth);
        }
        let _ = parse_bearing_strict(token);
    }
});
