use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// How far into a file the classifier looks before giving up.
const SCAN_CAP: usize = 8000;

/// Null run length that marks a file as binary.
const DEFAULT_NUL_THRESHOLD: usize = 1;

/// Decide whether a file's content is safe to treat as text.
///
/// Reads at most the first 8000 bytes and reports binary as soon as a
/// run of consecutive null bytes reaches the threshold. Template
/// sources never contain a null, so a single one is a strong binary
/// signal. A large file with a clean head is treated as text; template
/// files are expected to be small, so the cap is acceptable.
pub fn is_binary(path: &Path) -> io::Result<bool> {
    is_binary_with_threshold(path, DEFAULT_NUL_THRESHOLD)
}

pub fn is_binary_with_threshold(path: &Path, required_consecutive_nuls: usize) -> io::Result<bool> {
    let file = File::open(path)?;
    let mut reader = file.take(SCAN_CAP as u64);

    let mut buf = [0u8; 4096];
    let mut run = 0usize;
    loop {
        let read = reader.read(&mut buf)?;
        if read == 0 {
            return Ok(false);
        }
        for &byte in &buf[..read] {
            if byte == 0 {
                run += 1;
                if run >= required_consecutive_nuls {
                    return Ok(true);
                }
            } else {
                run = 0;
            }
        }
    }
}
