#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let container = lzss::compress(data);
    let restored = lzss::decompress(&container).expect("own container must decode");
    assert_eq!(restored, data);
});
