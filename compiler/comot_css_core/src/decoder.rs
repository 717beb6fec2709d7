//! Byte-to-scalar decoding front end.
//!
//! Turns raw stylesheet bytes into a flat sequence of [`DecodedEntry`] values,
//! each pairing a Unicode scalar value with the byte offset it came from. The
//! tokenizer never looks at bytes again after this point.
//!
//! # Pipeline
//!
//! 1. Cap the input at [`DecodeLimits::max_input_len`] bytes.
//! 2. Detect the encoding: BOM, then the caller's charset hint, then an
//!    `@charset "..."` rule in the first [`DecodeLimits::charset_scan_len`]
//!    bytes, then UTF-8.
//! 3. Sniff the first [`DecodeLimits::sniff_len`] bytes after the BOM for
//!    adversarial patterns (long NUL runs, stacked `FF`/`FE` bytes). A hit
//!    aborts decoding with an empty result.
//! 4. Decode UTF-8 or UTF-16, replacing every malformed sequence with U+FFFD.
//! 5. Normalize: NUL to U+FFFD, CR / CRLF / FF to a single LF.
//!
//! Failure is never an `Err`: a [`Decoded`] with no entries and an
//! [`issue`](Decoded::issue) tells the caller tokenizer creation must fail.

use std::fmt;

use tracing::{debug, warn};

/// U+FFFD REPLACEMENT CHARACTER as a scalar value.
pub const REPLACEMENT: u32 = 0xFFFD;

const LINE_FEED: u32 = 0x0A;
const FORM_FEED: u32 = 0x0C;
const CARRIAGE_RETURN: u32 = 0x0D;

/// Longest charset label accepted from an `@charset` rule.
const MAX_CHARSET_LABEL_LEN: usize = 32;

/// Source encodings the decoder understands.
///
/// Detected once per input; a stream never switches encoding midway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    /// Resolve a charset label supplied by the caller (e.g. an HTTP
    /// `Content-Type` parameter). Matching is ASCII case-insensitive and
    /// ignores surrounding whitespace. Unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim_matches(|c: char| c.is_ascii_whitespace());
        let matches = |name: &str| label.eq_ignore_ascii_case(name);
        if matches("utf-8") || matches("utf8") || matches("unicode-1-1-utf-8") {
            Some(Encoding::Utf8)
        } else if matches("utf-16le") || matches("utf-16") {
            Some(Encoding::Utf16Le)
        } else if matches("utf-16be") {
            Some(Encoding::Utf16Be)
        } else {
            None
        }
    }

    /// Canonical label.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded scalar value and where it started in the raw input.
///
/// After normalization a CRLF pair is a single LF entry whose `byte_offset`
/// points at the CR; the next entry's offset therefore still marks the end of
/// its byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodedEntry {
    pub scalar: u32,
    pub byte_offset: u32,
}

impl DecodedEntry {
    pub const fn new(scalar: u32, byte_offset: u32) -> Self {
        DecodedEntry {
            scalar,
            byte_offset,
        }
    }

    /// The scalar value as a `char`.
    ///
    /// Every scalar the decoder produces is a valid `char`; the fallback only
    /// matters for hand-built entries.
    #[inline]
    pub fn as_char(self) -> char {
        char::from_u32(self.scalar).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Hard ceilings applied while decoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecodeLimits {
    /// Bytes beyond this are dropped before decoding.
    pub max_input_len: usize,
    /// Decoding stops once this many entries exist. Zero makes every decode fail.
    pub max_output_len: usize,
    /// How far into the input an `@charset` rule is searched for.
    pub charset_scan_len: usize,
    /// How many bytes after the BOM the adversarial-pattern sniff inspects.
    pub sniff_len: usize,
    /// More NUL bytes than this inside the sniff window aborts decoding.
    pub max_sniffed_nulls: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        DecodeLimits {
            max_input_len: 1 << 20,
            max_output_len: 1 << 19,
            charset_scan_len: 1024,
            sniff_len: 1024,
            max_sniffed_nulls: 800,
        }
    }
}

/// Why decoding produced no entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeIssue {
    /// The input had no bytes.
    EmptyInput,
    /// The output capacity was zero.
    ZeroCapacity,
    /// The sniff window held more NUL bytes than allowed.
    SuspiciousNulls { count: usize },
    /// A `FF`/`FE` byte directly followed another one at byte `pos`.
    RepeatedBomBytes { pos: u32 },
}

impl fmt::Display for DecodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeIssue::EmptyInput => write!(f, "input is empty"),
            DecodeIssue::ZeroCapacity => write!(f, "decoded output capacity is zero"),
            DecodeIssue::SuspiciousNulls { count } => {
                write!(f, "input starts with {count} NUL bytes")
            }
            DecodeIssue::RepeatedBomBytes { pos } => {
                write!(f, "repeated byte-order-mark bytes at byte {pos}")
            }
        }
    }
}

/// Result of [`decode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    entries: Vec<DecodedEntry>,
    encoding: Encoding,
    bom_len: u32,
    byte_end: u32,
    truncated: bool,
    issue: Option<DecodeIssue>,
}

impl Decoded {
    fn rejected(issue: DecodeIssue, encoding: Encoding) -> Self {
        Decoded {
            entries: Vec::new(),
            encoding,
            bom_len: 0,
            byte_end: 0,
            truncated: false,
            issue: Some(issue),
        }
    }

    /// Decoded, normalized entries.
    pub fn entries(&self) -> &[DecodedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Length of the byte order mark skipped at the start of the input.
    pub fn bom_len(&self) -> u32 {
        self.bom_len
    }

    /// Byte offset just past the last decoded byte.
    ///
    /// Together with each entry's `byte_offset` this closes the byte range of
    /// the final entry.
    pub fn byte_end(&self) -> u32 {
        self.byte_end
    }

    /// `true` if input bytes were dropped by either ceiling.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Set when decoding was refused outright.
    pub fn issue(&self) -> Option<DecodeIssue> {
        self.issue
    }
}

/// Decode raw stylesheet bytes.
///
/// See the [module documentation](self) for the pipeline.
#[tracing::instrument(level = "debug", skip_all, fields(len = raw.len()))]
#[allow(
    clippy::cast_possible_truncation,
    reason = "input is capped to u32::MAX bytes before any offset is taken"
)]
pub fn decode(raw: &[u8], charset_hint: Option<&str>, limits: &DecodeLimits) -> Decoded {
    if raw.is_empty() {
        return Decoded::rejected(DecodeIssue::EmptyInput, Encoding::Utf8);
    }
    if limits.max_output_len == 0 {
        return Decoded::rejected(DecodeIssue::ZeroCapacity, Encoding::Utf8);
    }

    let max_input_len = limits.max_input_len.min(u32::MAX as usize);
    let input = &raw[..raw.len().min(max_input_len)];
    let mut truncated = input.len() < raw.len();
    if truncated {
        warn!(
            original = raw.len(),
            kept = input.len(),
            "input exceeds size ceiling; truncating"
        );
    }

    let (encoding, bom_len) = detect_encoding(input, charset_hint, limits.charset_scan_len);
    let body = &input[bom_len..];

    if let Some(issue) = sniff(body, bom_len as u32, limits) {
        warn!(%issue, "rejecting malformed input");
        return Decoded::rejected(issue, encoding);
    }

    let mut entries = Vec::with_capacity(body.len().min(limits.max_output_len));
    let base = bom_len as u32;
    let consumed = match encoding {
        Encoding::Utf8 => decode_utf8(body, base, limits.max_output_len, &mut entries),
        Encoding::Utf16Le => decode_utf16(body, base, limits.max_output_len, true, &mut entries),
        Encoding::Utf16Be => {
            decode_utf16(body, base, limits.max_output_len, false, &mut entries)
        }
    };
    if consumed < body.len() {
        warn!(
            entries = entries.len(),
            "decoded output ceiling reached; dropping remaining input"
        );
        truncated = true;
    }

    normalize(&mut entries);
    debug!(%encoding, bom_len, entries = entries.len(), "decoded input");

    Decoded {
        entries,
        encoding,
        bom_len: base,
        byte_end: base + consumed as u32,
        truncated,
        issue: None,
    }
}

/// Pick the encoding for `data` and report how many BOM bytes to skip.
///
/// A BOM always wins. Without one, a recognized `charset_hint` wins, then an
/// `@charset` rule naming UTF-8; everything else falls back to UTF-8.
pub fn detect_encoding(
    data: &[u8],
    charset_hint: Option<&str>,
    charset_scan_len: usize,
) -> (Encoding, usize) {
    match data {
        [0xFF, 0xFE, ..] => return (Encoding::Utf16Le, 2),
        [0xFE, 0xFF, ..] => return (Encoding::Utf16Be, 2),
        [0xEF, 0xBB, 0xBF, ..] => return (Encoding::Utf8, 3),
        _ => {}
    }

    if let Some(hint) = charset_hint {
        if let Some(encoding) = Encoding::from_label(hint) {
            return (encoding, 0);
        }
        debug!(hint, "ignoring unrecognized charset hint");
    }

    let window = &data[..data.len().min(charset_scan_len)];
    if let Some(label) = extract_charset(window) {
        if !label.eq_ignore_ascii_case(b"utf-8") {
            debug!(
                label = %String::from_utf8_lossy(label),
                "ignoring @charset that does not name utf-8"
            );
        }
    }

    (Encoding::Utf8, 0)
}

/// Find the label of the first `@charset "<label>"` rule in `window`.
///
/// Labels of [`MAX_CHARSET_LABEL_LEN`] bytes or more are skipped and the
/// search continues after them.
pub fn extract_charset(window: &[u8]) -> Option<&[u8]> {
    const PREFIX: &[u8] = b"@charset \"";

    let mut from = 0;
    while let Some(found) = memchr::memchr(b'@', &window[from..]) {
        let start = from + found;
        if window[start..].starts_with(PREFIX) {
            let label_start = start + PREFIX.len();
            if let Some(len) = memchr::memchr(b'"', &window[label_start..]) {
                if len < MAX_CHARSET_LABEL_LEN {
                    return Some(&window[label_start..label_start + len]);
                }
            }
        }
        from = start + 1;
    }
    None
}

/// Inspect the start of the body for patterns that only adversarial input has.
///
/// The `FF`/`FE` pair check is byte-level, so it also rejects genuine UTF-16
/// text whose adjacent code units put two such bytes side by side: an inner
/// U+FEFF, or `！ヾ` in UTF-16LE (`01 FF FE 30`).
#[allow(
    clippy::cast_possible_truncation,
    reason = "sniff window is at most the capped input length"
)]
fn sniff(body: &[u8], base: u32, limits: &DecodeLimits) -> Option<DecodeIssue> {
    let window = &body[..body.len().min(limits.sniff_len)];

    let nulls = memchr::memchr_iter(0, window).count();
    if nulls > limits.max_sniffed_nulls {
        return Some(DecodeIssue::SuspiciousNulls { count: nulls });
    }

    let is_bom_byte = |b: u8| b == 0xFF || b == 0xFE;
    window
        .windows(2)
        .position(|pair| is_bom_byte(pair[0]) && is_bom_byte(pair[1]))
        .map(|i| DecodeIssue::RepeatedBomBytes {
            pos: base + i as u32 + 1,
        })
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode one UTF-8 sequence from the front of `bytes` (non-empty).
///
/// Returns the scalar value and the number of bytes it spans. A lead byte
/// without its continuation bytes spans exactly one byte so the next
/// attempt starts right after it.
fn utf8_sequence(bytes: &[u8]) -> (u32, usize) {
    let lead = bytes[0];
    let cont = |n: usize| bytes.get(n).is_some_and(|&b| is_continuation(b));
    let tail = |n: usize| u32::from(bytes[n] & 0x3F);

    if lead < 0x80 {
        (u32::from(lead), 1)
    } else if lead & 0xE0 == 0xC0 && cont(1) {
        let cp = (u32::from(lead & 0x1F) << 6) | tail(1);
        (if cp < 0x80 { REPLACEMENT } else { cp }, 2)
    } else if lead & 0xF0 == 0xE0 && cont(1) && cont(2) {
        let cp = (u32::from(lead & 0x0F) << 12) | (tail(1) << 6) | tail(2);
        let invalid = cp < 0x800 || (0xD800..=0xDFFF).contains(&cp);
        (if invalid { REPLACEMENT } else { cp }, 3)
    } else if lead & 0xF8 == 0xF0 && cont(1) && cont(2) && cont(3) {
        let cp = (u32::from(lead & 0x07) << 18) | (tail(1) << 12) | (tail(2) << 6) | tail(3);
        let invalid = !(0x1_0000..=0x10_FFFF).contains(&cp);
        (if invalid { REPLACEMENT } else { cp }, 4)
    } else {
        (REPLACEMENT, 1)
    }
}

/// Decode UTF-8 into `out`, stopping at `cap` entries. Returns bytes consumed.
#[allow(
    clippy::cast_possible_truncation,
    reason = "input is capped to u32::MAX bytes by decode()"
)]
fn decode_utf8(bytes: &[u8], base: u32, cap: usize, out: &mut Vec<DecodedEntry>) -> usize {
    let mut i = 0;
    while i < bytes.len() && out.len() < cap {
        let (scalar, width) = utf8_sequence(&bytes[i..]);
        out.push(DecodedEntry::new(scalar, base + i as u32));
        i += width;
    }
    i
}

/// Decode UTF-16 into `out`, stopping at `cap` entries. Returns bytes consumed.
///
/// Surrogate pairs combine into one scalar; unpaired halves of either kind
/// and a dangling odd byte become U+FFFD.
#[allow(
    clippy::cast_possible_truncation,
    reason = "input is capped to u32::MAX bytes by decode()"
)]
fn decode_utf16(
    bytes: &[u8],
    base: u32,
    cap: usize,
    little_endian: bool,
    out: &mut Vec<DecodedEntry>,
) -> usize {
    let word = |i: usize| -> Option<u16> {
        let pair = bytes.get(i..i + 2)?;
        Some(if little_endian {
            u16::from_le_bytes([pair[0], pair[1]])
        } else {
            u16::from_be_bytes([pair[0], pair[1]])
        })
    };

    let mut i = 0;
    while i < bytes.len() && out.len() < cap {
        let offset = base + i as u32;
        let Some(high) = word(i) else {
            out.push(DecodedEntry::new(REPLACEMENT, offset));
            return bytes.len();
        };
        let (scalar, width) = match high {
            0xD800..=0xDBFF => match word(i + 2) {
                Some(low @ 0xDC00..=0xDFFF) => {
                    let cp = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                    (cp, 4)
                }
                _ => (REPLACEMENT, 2),
            },
            0xDC00..=0xDFFF => (REPLACEMENT, 2),
            _ => (u32::from(high), 2),
        };
        out.push(DecodedEntry::new(scalar, offset));
        i += width;
    }
    i
}

/// Apply CSS input preprocessing in place.
///
/// NUL becomes U+FFFD; CR, FF and CRLF each become one LF. A collapsed CRLF
/// keeps the CR's byte offset.
pub fn normalize(entries: &mut Vec<DecodedEntry>) {
    let mut write = 0;
    let mut read = 0;
    while read < entries.len() {
        let mut entry = entries[read];
        match entry.scalar {
            0x00 => entry.scalar = REPLACEMENT,
            CARRIAGE_RETURN => {
                entry.scalar = LINE_FEED;
                if entries
                    .get(read + 1)
                    .is_some_and(|next| next.scalar == LINE_FEED)
                {
                    read += 1;
                }
            }
            FORM_FEED => entry.scalar = LINE_FEED,
            _ => {}
        }
        entries[write] = entry;
        write += 1;
        read += 1;
    }
    entries.truncate(write);
}

#[cfg(test)]
mod tests;
