//! LZSS compression with a 4 KiB sliding window.
//!
//! Input is encoded in a single pass into a stream of tokens, each either a
//! literal byte or a back-reference of 3-16 bytes reaching up to 4096 bytes
//! back. Tokens are serialized into a container holding a one-bit-per-token
//! header bitmap followed by the token data.
//!
//! ```
//! let container = lzss::compress(b"ababababab");
//! assert_eq!(lzss::decompress(&container).unwrap(), b"ababababab");
//! ```

pub mod bits;
pub mod codec;
pub mod error;
pub mod format;
pub mod matcher;

pub use codec::{
    compress_file, compress_files, container_path, decompress_file, self_test, Compressor,
    Decoder, Decompressor, Encoder,
};
pub use error::{Corruption, Error, Result};
pub use format::{pack, try_pack, unpack, Container, Token, TokenStream};
pub use matcher::{Match, MatchFinder, Window};

use std::io::{Read, Write};

/// Encode `input` into a serialized container
pub fn compress(input: &[u8]) -> Vec<u8> {
    codec::encode(input).to_container()
}

/// Restore the original bytes from a serialized container
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    codec::decode(container)
}

/// Configuration for the I/O envelope around the codec.
///
/// The format itself has no knobs: window, lookahead and field widths are
/// fixed constants in [`format`].
#[derive(Clone, Debug)]
pub struct CodecConfig {
    /// Buffer size for I/O operations
    pub buffer_size: usize,
    /// Decode each container in memory and compare before writing it
    pub verify: bool,
    /// Number of threads for batch jobs (0 = auto, 1 = sequential)
    pub num_threads: usize,
    /// Extension appended to compressed file names
    pub suffix: String,
}

impl CodecConfig {
    /// Worker count for batch jobs
    pub fn effective_threads(&self) -> usize {
        match self.num_threads {
            0 => num_cpus::get().clamp(1, 32),
            n => n.clamp(1, 32),
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { buffer_size: 128 * 1024, verify: false, num_threads: 0, suffix: "lzss".to_string() }
    }
}

/// Statistics from a compression or decompression run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub literals: u64,
    pub references: u64,
    /// Size of the header bitmap
    pub header_bytes: u64,
}

impl CodecStats {
    /// Compressed size relative to uncompressed size, from the perspective
    /// of the run (output over input)
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64
    }
}

/// A whole-buffer transformation from a reader to a writer
pub trait Codec {
    /// Read all of `input`, transform it, and write the result to `output`.
    /// Nothing is written if the transformation fails.
    fn run<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CodecStats>;
}
