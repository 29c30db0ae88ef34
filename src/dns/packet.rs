use super::common::{ParseError, labels_from_hostname};
use super::enums::{RecordClass, RecordType};
use super::header::DnsHeader;
use super::question::DnsQuestion;
use super::resource::DnsResourceRecord;

/// A full DNS message: header plus the four sections (RFC 1035 §4.1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DnsPacket {
    pub header: DnsHeader,
    pub questions: Vec<DnsQuestion>,
    pub answers: Vec<DnsResourceRecord>,
    pub authorities: Vec<DnsResourceRecord>,
    pub additionals: Vec<DnsResourceRecord>,
}

impl DnsPacket {
    /// Builds a standard recursive query for a single name and record type.
    fn query(id: u16, hostname: &str, qtype: RecordType) -> Self {
        let question = DnsQuestion {
            name: labels_from_hostname(hostname),
            qtype,
            qclass: RecordClass::In,
        };
        Self {
            header: DnsHeader {
                id,
                rd: true,
                qdcount: 1,
                ..Default::default()
            },
            questions: vec![question],
            ..Default::default()
        }
    }

    pub fn query_a(id: u16, hostname: &str) -> Self {
        Self::query(id, hostname, RecordType::A)
    }

    pub fn query_ns(id: u16, hostname: &str) -> Self {
        Self::query(id, hostname, RecordType::Ns)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64);
        self.header.write(&mut out);
        for q in &self.questions {
            q.write(&mut out);
        }
        // AR never builds answer/authority/additional sections of its own
        // outgoing queries; only replies carry those, and replies are decoded,
        // never re-encoded.
        out
    }

    pub fn decode(buf: &[u8]) -> Result<Self, ParseError> {
        let header = DnsHeader::read(buf)?;
        let mut pos = DnsHeader::WIRE_LEN;

        let mut questions = Vec::with_capacity(header.qdcount as usize);
        for _ in 0..header.qdcount {
            questions.push(DnsQuestion::read(buf, &mut pos)?);
        }

        let mut answers = Vec::with_capacity(header.ancount as usize);
        for _ in 0..header.ancount {
            answers.push(DnsResourceRecord::read(buf, &mut pos)?);
        }

        let mut authorities = Vec::with_capacity(header.nscount as usize);
        for _ in 0..header.nscount {
            authorities.push(DnsResourceRecord::read(buf, &mut pos)?);
        }

        let mut additionals = Vec::with_capacity(header.arcount as usize);
        for _ in 0..header.arcount {
            additionals.push(DnsResourceRecord::read(buf, &mut pos)?);
        }

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}
