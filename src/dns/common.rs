use thiserror::Error;

/// Failures while decoding a DNS wire-format message.
///
/// Never surfaced to AR's callers directly: per §7, a parse failure becomes an
/// empty `Response` delivered to the query's callback, not a public `Result`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid DNS header")]
    InvalidHeader,
    #[error("invalid domain name label")]
    InvalidLabel,
    #[error("label compression pointer loop or out-of-range offset")]
    CompressionLoop,
    #[error("invalid question section")]
    InvalidQuestionSection,
    #[error("invalid resource record")]
    InvalidResourceRecord,
    #[error("unexpected end of packet")]
    UnexpectedEof,
}

/// Guards against pointer loops in a malformed or adversarial reply.
const MAX_POINTER_HOPS: usize = 32;

fn take_u8(packet: &[u8], pos: &mut usize) -> Result<u8, ParseError> {
    let b = *packet.get(*pos).ok_or(ParseError::UnexpectedEof)?;
    *pos += 1;
    Ok(b)
}

fn take_u16(packet: &[u8], pos: &mut usize) -> Result<u16, ParseError> {
    let hi = take_u8(packet, pos)? as u16;
    let lo = take_u8(packet, pos)? as u16;
    Ok((hi << 8) | lo)
}

fn take_u32(packet: &[u8], pos: &mut usize) -> Result<u32, ParseError> {
    let hi = take_u16(packet, pos)? as u32;
    let lo = take_u16(packet, pos)? as u32;
    Ok((hi << 16) | lo)
}

pub(crate) fn read_u16(packet: &[u8], pos: &mut usize) -> Result<u16, ParseError> {
    take_u16(packet, pos)
}

pub(crate) fn read_u32(packet: &[u8], pos: &mut usize) -> Result<u32, ParseError> {
    take_u32(packet, pos)
}

pub(crate) fn read_bytes<'a>(
    packet: &'a [u8],
    pos: &mut usize,
    len: usize,
) -> Result<&'a [u8], ParseError> {
    let end = pos.checked_add(len).ok_or(ParseError::UnexpectedEof)?;
    let slice = packet.get(*pos..end).ok_or(ParseError::UnexpectedEof)?;
    *pos = end;
    Ok(slice)
}

/// Reads a (possibly compressed) domain name starting at `*pos`, advancing
/// `*pos` past the name as it appears in the stream (a single two-byte pointer
/// counts as the whole name; the jump itself does not move `*pos` further,
/// mirroring RFC 1035 §4.1.4).
///
/// This is the idiomatic-Rust replacement for the legacy prototype's
/// `partlen == 0xc0` pointer check: the original single-direction bit reader
/// can't jump backward, so decoding here works directly against the full packet
/// slice instead.
pub fn read_name(packet: &[u8], pos: &mut usize) -> Result<Vec<String>, ParseError> {
    let mut labels = Vec::new();
    let mut cursor = *pos;
    let mut end_of_name: Option<usize> = None;
    let mut hops = 0usize;

    loop {
        let len = take_u8(packet, &mut cursor)?;
        if len == 0 {
            if end_of_name.is_none() {
                end_of_name = Some(cursor);
            }
            break;
        } else if len & 0xC0 == 0xC0 {
            if hops >= MAX_POINTER_HOPS {
                return Err(ParseError::CompressionLoop);
            }
            hops += 1;
            let lo = take_u8(packet, &mut cursor)?;
            if end_of_name.is_none() {
                end_of_name = Some(cursor);
            }
            let offset = (((len & 0x3F) as usize) << 8) | lo as usize;
            if offset >= packet.len() {
                return Err(ParseError::CompressionLoop);
            }
            cursor = offset;
        } else {
            let label_len = len as usize;
            if label_len > 63 {
                return Err(ParseError::InvalidLabel);
            }
            let bytes = read_bytes(packet, &mut cursor, label_len)?;
            let label =
                String::from_utf8(bytes.to_vec()).map_err(|_| ParseError::InvalidLabel)?;
            labels.push(label);
        }
    }

    *pos = end_of_name.unwrap_or(cursor);
    Ok(labels)
}

/// Writes a domain name in plain (uncompressed) label form. AR only ever
/// constructs small, single-question outgoing queries, so omitting compression
/// on the write side costs at most a few bytes and keeps the encoder trivial.
pub fn write_name(out: &mut Vec<u8>, labels: &[impl AsRef<str>]) {
    for label in labels {
        let bytes = label.as_ref().as_bytes();
        debug_assert!(bytes.len() <= 63, "DNS label exceeds 63 bytes");
        out.push(bytes.len() as u8);
        out.extend_from_slice(bytes);
    }
    out.push(0);
}

pub(crate) fn write_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

pub(crate) fn write_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

/// Splits `labels` on `.` into the owned per-label strings DNS wire encoding
/// expects, e.g. `"example.com"` -> `["example", "com"]`.
pub fn labels_from_hostname(hostname: &str) -> Vec<String> {
    hostname.split('.').map(|s| s.to_string()).collect()
}

pub fn hostname_from_labels(labels: &[String]) -> String {
    labels.join(".")
}
