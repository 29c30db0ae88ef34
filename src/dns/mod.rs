pub mod common;
pub mod enums;
pub mod header;
pub mod packet;
pub mod question;
pub mod resource;

pub use common::ParseError;
pub use enums::{RecordClass, RecordType};
pub use header::DnsHeader;
pub use packet::DnsPacket;
pub use question::DnsQuestion;
pub use resource::{DnsResourceRecord, RData};
