use std::io::{BufReader, BufWriter, Read, Write};

use super::encoder::encode;
use super::verify::verify_roundtrip;
use crate::error::{Error, Result};
use crate::{Codec, CodecConfig, CodecStats};

/// Reads the whole input, encodes it and writes one container
pub struct Compressor {
    config: CodecConfig,
}

impl Compressor {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl Codec for Compressor {
    fn run<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CodecStats> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(Error::InputRead)?;

        let stream = encode(&data);

        if self.config.verify {
            verify_roundtrip(&data, &stream.to_container())?;
        }

        // Nothing is written until the stream is complete (and verified)
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, output);
        stream.write_to(&mut writer).map_err(Error::OutputWrite)?;
        writer.flush().map_err(Error::OutputWrite)?;

        Ok(CodecStats {
            input_bytes: data.len() as u64,
            output_bytes: stream.container_len() as u64,
            literals: stream.literals() as u64,
            references: stream.references() as u64,
            header_bytes: stream.headers().len() as u64,
        })
    }
}
