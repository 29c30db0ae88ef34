use argus::dns::{DnsPacket, RData, RecordType};

// Captured query for google.com (A record), transaction id 0x1234.
const GOOGLE_COM_QUERY: &[u8] = &[
    0x12, 0x34, // Transaction ID
    0x01, 0x00, // Flags: standard query, recursion desired
    0x00, 0x01, // Questions: 1
    0x00, 0x00, // Answer RRs: 0
    0x00, 0x00, // Authority RRs: 0
    0x00, 0x00, // Additional RRs: 0
    0x06, b'g', b'o', b'o', b'g', b'l', b'e', // "google"
    0x03, b'c', b'o', b'm', // "com"
    0x00, // root label
    0x00, 0x01, // Type: A
    0x00, 0x01, // Class: IN
];

#[test]
fn decodes_a_captured_a_query() {
    let packet = DnsPacket::decode(GOOGLE_COM_QUERY).expect("valid packet");

    assert_eq!(packet.header.id, 0x1234);
    assert!(!packet.header.qr);
    assert!(packet.header.rd);
    assert_eq!(packet.header.qdcount, 1);
    assert_eq!(packet.questions.len(), 1);
    assert_eq!(packet.questions[0].name, vec!["google", "com"]);
    assert_eq!(packet.questions[0].qtype, RecordType::A);
}

#[test]
fn query_a_round_trips_through_encode_decode() {
    let original = DnsPacket::query_a(0xBEEF, "example.invalid");
    let decoded = DnsPacket::decode(&original.encode()).expect("valid packet");
    assert_eq!(decoded, original);
}

#[test]
fn query_ns_round_trips_through_encode_decode() {
    let original = DnsPacket::query_ns(7, "example.com");
    let decoded = DnsPacket::decode(&original.encode()).expect("valid packet");
    assert_eq!(decoded.questions[0].qtype, RecordType::Ns);
    assert_eq!(decoded, original);
}

#[test]
fn unknown_record_types_preserve_additional_section() {
    // One question, one additional record of an unrelated type (41 == OPT)
    // that this crate doesn't otherwise model.
    let query = DnsPacket::query_a(1, "example.com");
    let mut header = query.header.clone();
    header.arcount = 1;

    let mut full = Vec::new();
    header.write(&mut full);
    query.questions[0].write(&mut full);

    full.push(0x00); // root name
    full.extend_from_slice(&41u16.to_be_bytes()); // type
    full.extend_from_slice(&0u16.to_be_bytes()); // class
    full.extend_from_slice(&0u32.to_be_bytes()); // ttl
    full.extend_from_slice(&0u16.to_be_bytes()); // rdlength

    let decoded = DnsPacket::decode(&full).expect("valid packet");
    assert_eq!(decoded.additionals.len(), 1);
    assert!(matches!(decoded.additionals[0].rdata, RData::Other(ref b) if b.is_empty()));
}

#[test]
fn truncated_packet_is_rejected_not_panicking() {
    assert!(DnsPacket::decode(&[0x00, 0x01]).is_err());
    assert!(DnsPacket::decode(&[]).is_err());
}
