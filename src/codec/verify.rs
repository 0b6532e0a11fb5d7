//! Round-trip checks used by `--verify` and `--self-test`.

use tracing::info;

use super::decoder::decode;
use super::encoder::encode;
use crate::error::{Error, Result};
use crate::format::{pack, unpack};
use crate::CodecStats;

/// Reference pairs checked by the self-test, covering both field extremes
pub const PACKING_SAMPLES: [(usize, usize); 4] = [(4096, 16), (2600, 16), (1, 1), (34, 16)];

/// Decode `container` and compare it with `original`
pub fn verify_roundtrip(original: &[u8], container: &[u8]) -> Result<()> {
    let restored = decode(container)?;
    match first_difference(original, &restored) {
        None => Ok(()),
        Some(offset) => Err(Error::RoundTripMismatch { offset }),
    }
}

/// Offset of the first differing byte, or the shorter length if one is a
/// prefix of the other
fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(offset) => Some(offset),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}

/// Check pack/unpack on [`PACKING_SAMPLES`], then compress and restore
/// `sample` in memory
pub fn self_test(sample: &[u8]) -> Result<CodecStats> {
    for (distance, length) in PACKING_SAMPLES {
        let [b0, b1] = pack(distance, length);
        let unpacked = unpack(b0, b1);
        if unpacked != (distance, length) {
            return Err(Error::Internal(format!(
                "pack/unpack mismatch: ({distance}, {length}) -> [{b0:#04x}, {b1:#04x}] -> {unpacked:?}"
            )));
        }
    }

    let stream = encode(sample);
    let container = stream.to_container();
    verify_roundtrip(sample, &container)?;

    info!(input_bytes = sample.len(), output_bytes = container.len(), "self-test passed");
    Ok(CodecStats {
        input_bytes: sample.len() as u64,
        output_bytes: container.len() as u64,
        literals: stream.literals() as u64,
        references: stream.references() as u64,
        header_bytes: stream.headers().len() as u64,
    })
}
