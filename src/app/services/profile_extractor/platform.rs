//! Platform identifier decoding
//!
//! Platform ids arrive as fixed-width character sequences padded with
//! spaces, or occasionally as numeric codes already formatted by the
//! source layer. Some files carry no usable id at all; for those the
//! filename almost always embeds the WMO float number, so identity falls
//! back to the first 7-8 digit run in the filename, then to the filename
//! stem. The result is never empty.

use crate::constants::{PLATFORM_ID_PATTERN, PLATFORM_ID_SENTINEL};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn digit_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PLATFORM_ID_PATTERN).expect("platform id pattern is valid"))
}

/// Decode a platform identifier, falling back to the source filename
///
/// Embedded space characters are dropped (fixed-width padding appears in
/// the middle of some encodings, not only at the ends). An empty decode
/// or the literal sentinel `"None"` triggers the filename fallback.
pub fn decode_platform_id(raw: &str, source_path: &Path) -> String {
    let decoded: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if decoded.is_empty() || decoded == PLATFORM_ID_SENTINEL {
        fallback_from_filename(source_path)
    } else {
        decoded
    }
}

/// Identity from the filename: first 7-8 digit run, else the stem
fn fallback_from_filename(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    if let Some(captures) = digit_run().captures(&file_name) {
        return captures[1].to_string();
    }

    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or(file_name)
}
