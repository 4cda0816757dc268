#![no_main]

use fwdspec_core::{parse, render};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Every accepted input must render back to itself
        if let Ok(fwd) = parse(text) {
            assert_eq!(render(&fwd), text);
        }
    }
});
