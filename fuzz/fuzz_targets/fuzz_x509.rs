#![no_main]
use berwalk::ber::{Mode, Options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = berwalk::x509::summarize(data);
    let _ = berwalk::x509::summarize_with(data, Options::default().with_mode(Mode::Der));
});
