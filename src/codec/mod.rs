pub mod batch;
pub mod compressor;
pub mod decoder;
pub mod decompressor;
pub mod encoder;
pub mod files;
pub mod verify;

pub use batch::compress_files;
pub use compressor::Compressor;
pub use decoder::{decode, Decoder};
pub use decompressor::Decompressor;
pub use encoder::{encode, Encoder, EncoderState};
pub use files::{compress_file, container_path, decompress_file};
pub use verify::{self_test, verify_roundtrip};
