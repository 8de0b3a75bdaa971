#![no_main]

use flate2::read::MultiGzDecoder;
use libfuzzer_sys::fuzz_target;
use std::io::Read;

fuzz_target!(|data: &[u8]| {
    if data.len() > 2_000_000 {
        return;
    }

    let member = match mgz::deflate(data, 6) {
        Ok(member) => member,
        Err(_) => return,
    };

    let mut decoded = Vec::new();
    MultiGzDecoder::new(&member[..])
        .read_to_end(&mut decoded)
        .expect("a member produced by deflate() must itself decode");
    assert_eq!(decoded, data, "deflate() must round-trip its input exactly");
});
