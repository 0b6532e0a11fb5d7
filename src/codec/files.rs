//! One-shot file transfers: the whole source is read, transformed in
//! memory, and only then is the destination created.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::compressor::Compressor;
use super::decompressor::Decompressor;
use crate::error::{Error, Result};
use crate::{Codec, CodecConfig, CodecStats};

/// Container path for `src`: `<src>.<suffix>`
pub fn container_path(src: &Path, suffix: &str) -> PathBuf {
    let mut name = src.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Compress `src` into a container at `dst`
pub fn compress_file(src: &Path, dst: &Path, config: &CodecConfig) -> Result<CodecStats> {
    let input = File::open(src).map_err(Error::InputRead)?;
    let mut container = Vec::new();
    let stats = Compressor::new(config.clone()).run(input, &mut container)?;
    write_file(dst, &container, config)?;

    debug!(src = %src.display(), dst = %dst.display(), "compressed file");
    Ok(stats)
}

/// Restore the container at `src` into `dst`
pub fn decompress_file(src: &Path, dst: &Path, config: &CodecConfig) -> Result<CodecStats> {
    let input = File::open(src).map_err(Error::InputRead)?;
    let mut restored = Vec::new();
    let stats = Decompressor::new(config.clone()).run(input, &mut restored)?;
    write_file(dst, &restored, config)?;

    debug!(src = %src.display(), dst = %dst.display(), "decompressed file");
    Ok(stats)
}

fn write_file(dst: &Path, bytes: &[u8], config: &CodecConfig) -> Result<()> {
    let file = File::create(dst).map_err(Error::OutputWrite)?;
    let mut writer = BufWriter::with_capacity(config.buffer_size, file);

    writer.write_all(bytes).and_then(|()| writer.flush()).map_err(|e| {
        // Only a file this call created is removed; a partial one is useless
        if let Err(remove_err) = fs::remove_file(dst) {
            warn!(dst = %dst.display(), error = %remove_err, "could not remove partial output");
        }
        Error::OutputWrite(e)
    })
}
