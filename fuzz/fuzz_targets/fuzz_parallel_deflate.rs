#![no_main]

use arbitrary::Arbitrary;
use flate2::read::MultiGzDecoder;
use libfuzzer_sys::fuzz_target;
use std::io::Read;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    data: Vec<u8>,
    block_size: u64,
}

fuzz_target!(|input: FuzzInput| {
    if input.data.len() > 2_000_000 {
        return;
    }

    let bundle = match mgz::parallel_deflate(&input.data, 6, input.block_size, true) {
        Ok(bundle) => bundle,
        Err(_) => return,
    };

    let mut decoded = Vec::new();
    MultiGzDecoder::new(&bundle.archive[..])
        .read_to_end(&mut decoded)
        .expect("the concatenated archive must itself decode as one gzip stream");
    assert_eq!(decoded, input.data);

    if let Some(lookup) = &bundle.lookup {
        assert_eq!(lookup[0], 0);
        assert_eq!(*lookup.last().unwrap(), bundle.archive.len() as u64);
        for window in lookup.windows(2) {
            assert!(window[0] <= window[1], "lookup table must be non-decreasing");
        }
    }
});
