#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = cadastro::cpf::validate(s);
        let _ = cadastro::cpf::format(s);
        let _ = cadastro::voter::validate(s);
        let _ = cadastro::voter::region_of(s);
        let _ = cadastro::validate_any(s);
    }
});
