#![no_main]

use fwdspec::config::ConfigLoader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        // We don't care about the result, just that it doesn't panic
        let _ = ConfigLoader::with_defaults().load_from_str(yaml_str);
    }
});
