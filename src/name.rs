use std::ffi::OsString;
use std::io;

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// Number of random bytes behind every generated name.
pub const RANDOM_BYTES: usize = 64;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex of `RANDOM_BYTES` bytes from the OS random generator.
pub fn random_suffix() -> Result<String> {
    let mut buf = [0u8; RANDOM_BYTES];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|err| Error::Random(io::Error::other(err)))?;

    Ok(encode_hex(&buf))
}

/// `prefix` followed by a fresh random suffix, suitable as a single path
/// segment.
pub fn random_name(prefix: &str) -> Result<OsString> {
    let suffix = random_suffix()?;

    let mut name = OsString::with_capacity(prefix.len() + suffix.len());
    name.push(prefix);
    name.push(suffix);

    Ok(name)
}

fn encode_hex(input: &[u8]) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(HEX_CHARS[(byte >> 4) as usize] as char);
        output.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }

    output
}
