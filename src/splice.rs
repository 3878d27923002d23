use memchr::memmem;
use thiserror::Error;

pub const START_MARKER: &str = "<!-- steam-box start -->";
pub const END_MARKER: &str = "<!-- steam-box end -->";
pub const ATTRIBUTION: &str = "<!-- Powered by https://github.com/NaiHeeeee/steam-box . -->";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub title: String,
    pub body: String,
    pub attribution: &'static str,
}

impl RenderedBlock {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            attribution: ATTRIBUTION,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("marker `{marker}` not found")]
    MarkerNotFound { marker: &'static str },
    #[error("end marker at byte {end} precedes start marker at byte {start}")]
    MarkerOrder { start: usize, end: usize },
}

/// Replaces the region between the start and end markers with `block`.
///
/// Both markers are located by their first occurrence in the original
/// document. Bytes up to and including the start marker, and from the end
/// marker onward, are copied unchanged.
pub fn splice(document: &[u8], block: &RenderedBlock) -> Result<Vec<u8>, SpliceError> {
    let start = memmem::find(document, START_MARKER.as_bytes()).ok_or(
        SpliceError::MarkerNotFound {
            marker: START_MARKER,
        },
    )?;
    let end = memmem::find(document, END_MARKER.as_bytes())
        .ok_or(SpliceError::MarkerNotFound { marker: END_MARKER })?;

    let before_end = start + START_MARKER.len();
    if end < before_end {
        return Err(SpliceError::MarkerOrder { start, end });
    }

    let before = &document[..before_end];
    let after = &document[end..];

    let mut out = Vec::with_capacity(
        before.len() + block.title.len() + block.body.len() + block.attribution.len() + after.len() + 4,
    );
    out.extend_from_slice(before);
    out.push(b'\n');
    out.extend_from_slice(block.title.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(block.body.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(block.attribution.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(after);
    Ok(out)
}
