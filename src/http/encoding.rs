use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

/// Compresses `body` with gzip at the default compression level.
pub fn gzip(body: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}
