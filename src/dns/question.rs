use super::common::{ParseError, read_name, read_u16, write_name, write_u16};
use super::enums::{RecordClass, RecordType};

/// The single question AR ever sends: one name, one type, the `IN` class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Vec<String>,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl DnsQuestion {
    pub fn write(&self, out: &mut Vec<u8>) {
        write_name(out, &self.name);
        write_u16(out, self.qtype.into());
        write_u16(out, self.qclass.into());
    }

    pub fn read(packet: &[u8], pos: &mut usize) -> Result<Self, ParseError> {
        let name = read_name(packet, pos)?;
        let qtype = read_u16(packet, pos)?.into();
        let qclass = read_u16(packet, pos)?.into();
        Ok(Self {
            name,
            qtype,
            qclass,
        })
    }
}
