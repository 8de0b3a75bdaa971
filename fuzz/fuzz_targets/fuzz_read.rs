#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    data: Vec<u8>,
    offset: u64,
    len: u16,
}

fuzz_target!(|input: FuzzInput| {
    if input.data.is_empty() || input.data.len() > 1_000_000 {
        return;
    }

    let mut archive = Vec::new();
    let mut sidecar = Vec::new();
    if mgz::parallel_create(&input.data, 6, 16384, &mut archive, Some(&mut sidecar)).is_err() {
        return;
    }

    let mut buf = vec![0u8; input.len as usize];
    let n = mgz::read(
        &mut buf,
        input.offset,
        &mut Cursor::new(&archive),
        &mut Cursor::new(&sidecar),
    );

    if n == 0 {
        return;
    }
    assert_eq!(n, buf.len());

    let offset = input.offset as usize;
    let expected = &input.data[offset..offset + buf.len()];
    assert_eq!(buf, expected, "read() must return exactly the requested range");
});
