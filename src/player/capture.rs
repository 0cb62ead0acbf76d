use std::io::{self, Read};

/// Output read from a child process, cut at a fixed byte limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub bytes: Vec<u8>,
    /// More output was available past the limit and was dropped.
    pub truncated: bool,
}

impl Capture {
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Read at most `limit` bytes from `reader`.
///
/// One extra byte is requested so that output of exactly `limit` bytes is not
/// reported as truncated.
pub fn capture_bounded<R: Read>(reader: R, limit: usize) -> io::Result<Capture> {
    let mut bytes = Vec::with_capacity(limit.min(8 * 1024));
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut bytes)?;

    let truncated = bytes.len() > limit;
    bytes.truncate(limit);
    Ok(Capture { bytes, truncated })
}
