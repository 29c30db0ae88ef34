use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use super::common::ParseError;

/// The fixed 12-byte DNS message header (RFC 1035 §4.1.1).
///
/// Bit-packed fields (`qr`/`opcode`/.../`rcode` share two bytes) are encoded and
/// decoded with `bitstream_io`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DnsHeader {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl DnsHeader {
    pub const WIRE_LEN: usize = 12;

    pub fn write(&self, out: &mut Vec<u8>) {
        let mut writer = BitWriter::endian(out, BigEndian);
        writer.write_var::<u16>(16, self.id).unwrap();
        writer.write_var::<u8>(1, self.qr as u8).unwrap();
        writer.write_var::<u8>(4, self.opcode).unwrap();
        writer.write_var::<u8>(1, self.aa as u8).unwrap();
        writer.write_var::<u8>(1, self.tc as u8).unwrap();
        writer.write_var::<u8>(1, self.rd as u8).unwrap();
        writer.write_var::<u8>(1, self.ra as u8).unwrap();
        writer.write_var::<u8>(3, self.z).unwrap();
        writer.write_var::<u8>(4, self.rcode).unwrap();
        writer.write_var::<u16>(16, self.qdcount).unwrap();
        writer.write_var::<u16>(16, self.ancount).unwrap();
        writer.write_var::<u16>(16, self.nscount).unwrap();
        writer.write_var::<u16>(16, self.arcount).unwrap();
    }

    pub fn read(buf: &[u8]) -> Result<Self, ParseError> {
        if buf.len() < Self::WIRE_LEN {
            return Err(ParseError::InvalidHeader);
        }
        let mut reader = BitReader::endian(&buf[..Self::WIRE_LEN], BigEndian);
        let map_err = |_| ParseError::InvalidHeader;

        let id = reader.read_var::<u16>(16).map_err(map_err)?;
        let qr = reader.read_var::<u8>(1).map_err(map_err)? == 1;
        let opcode = reader.read_var::<u8>(4).map_err(map_err)?;
        let aa = reader.read_var::<u8>(1).map_err(map_err)? == 1;
        let tc = reader.read_var::<u8>(1).map_err(map_err)? == 1;
        let rd = reader.read_var::<u8>(1).map_err(map_err)? == 1;
        let ra = reader.read_var::<u8>(1).map_err(map_err)? == 1;
        let z = reader.read_var::<u8>(3).map_err(map_err)?;
        let rcode = reader.read_var::<u8>(4).map_err(map_err)?;
        let qdcount = reader.read_var::<u16>(16).map_err(map_err)?;
        let ancount = reader.read_var::<u16>(16).map_err(map_err)?;
        let nscount = reader.read_var::<u16>(16).map_err(map_err)?;
        let arcount = reader.read_var::<u16>(16).map_err(map_err)?;

        Ok(Self {
            id,
            qr,
            opcode,
            aa,
            tc,
            rd,
            ra,
            z,
            rcode,
            qdcount,
            ancount,
            nscount,
            arcount,
        })
    }
}
