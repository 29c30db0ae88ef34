/// DNS resource record type.
///
/// Only A and NS lookups are ever issued; every other wire value decodes to
/// `Other` instead of failing the parse, so a reply that happens to carry an
/// unrelated additional record still parses successfully.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecordType {
    #[default]
    Other(u16),
    A,
    Ns,
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::Ns,
            other => RecordType::Other(other),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::A => 1,
            RecordType::Ns => 2,
            RecordType::Other(v) => v,
        }
    }
}

/// DNS resource record class. Only `In` (Internet) is meaningful for A/NS
/// lookups issued by a web crawler; anything else is preserved verbatim.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecordClass {
    #[default]
    Other(u16),
    In,
}

impl From<u16> for RecordClass {
    fn from(value: u16) -> Self {
        match value {
            1 => RecordClass::In,
            other => RecordClass::Other(other),
        }
    }
}

impl From<RecordClass> for u16 {
    fn from(value: RecordClass) -> Self {
        match value {
            RecordClass::In => 1,
            RecordClass::Other(v) => v,
        }
    }
}
