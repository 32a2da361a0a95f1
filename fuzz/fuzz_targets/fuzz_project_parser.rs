#![no_main]

use libfuzzer_sys::fuzz_target;
use polygonzug_rechner::{parse_project, solve, Traverse};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(project) = parse_project(content) {
            if let Ok(traverse) = Traverse::from_observations(&project.observations(), false) {
                let _ = solve(&traverse);
            }
        }
    }
});
