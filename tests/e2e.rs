//! End-to-end tests driving the public API through real files on disk,
//! exercising the full write -> reopen -> random-access-read path.

use mgz::{read, MgzArchive};
use std::fs::File;
use std::io::Read as _;

fn write_archive(dir: &std::path::Path, name: &str, data: &[u8], block_size: u64) -> (std::path::PathBuf, std::path::PathBuf) {
    let archive_path = dir.join(format!("{name}.mgz"));
    let sidecar_path = dir.join(format!("{name}.mgz.idx"));
    let archive_file = File::create(&archive_path).unwrap();
    let sidecar_file = File::create(&sidecar_path).unwrap();
    mgz::parallel_create(data, 6, block_size, archive_file, Some(sidecar_file)).unwrap();
    (archive_path, sidecar_path)
}

#[test]
fn e2e_archive_decodes_with_a_standard_gzip_decoder() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<u8> = (0..500_000u32).map(|i| (i % 197) as u8).collect();
    let (archive_path, _sidecar_path) = write_archive(dir.path(), "plain_decode", &data, 65536);

    // Any RFC 1952 decoder should read the whole concatenated archive back
    // as one stream, oblivious to the block boundaries inside it.
    let archive_file = File::open(&archive_path).unwrap();
    let mut decoder = flate2::read::MultiGzDecoder::new(archive_file);
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn e2e_random_access_reader_matches_raw_read_over_files() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<u8> = (0..200_000u32).map(|i| ((i * 7) % 251) as u8).collect();
    let (archive_path, sidecar_path) = write_archive(dir.path(), "random_access", &data, 16384);

    let reader = MgzArchive::open(&archive_path, &sidecar_path).unwrap();
    assert_eq!(reader.archive_len(), std::fs::metadata(&archive_path).unwrap().len());

    for &(offset, len) in &[(0usize, 100), (16383, 2), (16384, 5000), (150_000, 49_999)] {
        let mut via_mmap = vec![0u8; len];
        assert_eq!(reader.read_at(&mut via_mmap, offset as u64), len);

        let mut archive_file = File::open(&archive_path).unwrap();
        let mut sidecar_file = File::open(&sidecar_path).unwrap();
        let mut via_raw = vec![0u8; len];
        assert_eq!(
            read(&mut via_raw, offset as u64, &mut archive_file, &mut sidecar_file),
            len
        );

        assert_eq!(via_mmap, via_raw);
        assert_eq!(via_mmap, data[offset..offset + len]);
    }
}

#[test]
fn e2e_over_range_read_fails_cleanly_on_files() {
    let dir = tempfile::tempdir().unwrap();
    let data = vec![7u8; 1000];
    let (archive_path, sidecar_path) = write_archive(dir.path(), "short", &data, 16384);

    let reader = MgzArchive::open(&archive_path, &sidecar_path).unwrap();
    let mut buf = vec![0u8; 2000];
    assert_eq!(reader.read_at(&mut buf, 0), 0);
}

#[test]
fn e2e_empty_input_produces_no_files_worth_reading() {
    let dir = tempfile::tempdir().unwrap();
    let archive_path = dir.path().join("empty.mgz");
    let sidecar_path = dir.path().join("empty.mgz.idx");
    let archive_file = File::create(&archive_path).unwrap();
    let sidecar_file = File::create(&sidecar_path).unwrap();

    let written = mgz::parallel_create(&[], 6, 16384, archive_file, Some(sidecar_file)).unwrap();
    assert_eq!(written, 0);
    assert_eq!(std::fs::metadata(&archive_path).unwrap().len(), 0);
    assert_eq!(std::fs::metadata(&sidecar_path).unwrap().len(), 0);
}
