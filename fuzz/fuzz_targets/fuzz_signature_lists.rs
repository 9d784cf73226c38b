#![no_main]
use berwalk::efi::{signature_lists, SignatureKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for list in signature_lists(data) {
        let Ok(list) = list else { break };
        for sig in list.signatures() {
            if list.kind() == SignatureKind::X509 {
                let _ = berwalk::x509::summarize(sig.data);
            }
        }
    }
});
