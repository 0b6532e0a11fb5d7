#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decompression may fail on invalid input - that's OK
    // We're looking for panics/crashes, not errors
    let _ = lzss::decompress(data);
});
