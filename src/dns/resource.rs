use std::net::Ipv4Addr;

use super::common::{ParseError, read_bytes, read_name, read_u16, read_u32};
use super::enums::{RecordClass, RecordType};

/// The decoded RDATA this crate understands. Anything else is kept as raw bytes
/// so a reply mixing record types we don't care about (e.g. an OPT pseudo-record
/// tacked onto the additional section) still decodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Ns(Vec<String>),
    Other(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsResourceRecord {
    pub name: Vec<String>,
    pub rtype: RecordType,
    pub rclass: RecordClass,
    pub ttl: u32,
    pub rdata: RData,
}

impl DnsResourceRecord {
    pub fn read(packet: &[u8], pos: &mut usize) -> Result<Self, ParseError> {
        let name = read_name(packet, pos)?;
        let rtype: RecordType = read_u16(packet, pos)?.into();
        let rclass: RecordClass = read_u16(packet, pos)?.into();
        let ttl = read_u32(packet, pos)?;
        let rdlength = read_u16(packet, pos)? as usize;
        let rdata_start = *pos;
        let rdata = match rtype {
            RecordType::A => {
                let bytes = read_bytes(packet, pos, rdlength)?;
                if bytes.len() != 4 {
                    return Err(ParseError::InvalidResourceRecord);
                }
                RData::A(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]))
            }
            RecordType::Ns => {
                // NS RDATA is itself a (possibly compressed) name, so it must be
                // decoded relative to the whole packet rather than treated as an
                // opaque byte run.
                let mut ns_pos = rdata_start;
                let labels = read_name(packet, &mut ns_pos)?;
                *pos = rdata_start + rdlength;
                RData::Ns(labels)
            }
            RecordType::Other(_) => {
                let bytes = read_bytes(packet, pos, rdlength)?;
                RData::Other(bytes.to_vec())
            }
        };

        Ok(Self {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        })
    }
}
