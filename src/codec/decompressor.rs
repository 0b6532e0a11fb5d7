use std::io::{BufReader, BufWriter, Read, Write};

use super::decoder::Decoder;
use crate::error::{Error, Result};
use crate::format::Container;
use crate::{Codec, CodecConfig, CodecStats};

/// Reads a whole container, decodes it and writes the restored bytes
pub struct Decompressor {
    config: CodecConfig,
}

impl Decompressor {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl Codec for Decompressor {
    fn run<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CodecStats> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(Error::InputRead)?;

        let container = Container::parse(&bytes)?;
        let mut decoder = Decoder::with_capacity(container.data().len().saturating_mul(2));
        decoder.decode_container(&container)?;

        let stats = CodecStats {
            input_bytes: bytes.len() as u64,
            output_bytes: decoder.output().len() as u64,
            literals: decoder.literals() as u64,
            references: decoder.references() as u64,
            header_bytes: container.headers().len() as u64,
        };

        let mut writer = BufWriter::with_capacity(self.config.buffer_size, output);
        writer.write_all(decoder.output()).map_err(Error::OutputWrite)?;
        writer.flush().map_err(Error::OutputWrite)?;

        Ok(stats)
    }
}
