use argus::dns::DnsPacket;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_query_encode(c: &mut Criterion) {
    c.bench_function("encode a-record query", |b| {
        b.iter(|| {
            let packet = DnsPacket::query_a(black_box(1), black_box("example.com"));
            black_box(packet.encode());
        });
    });
}

fn bench_reply_decode(c: &mut Criterion) {
    let query = DnsPacket::query_a(1, "example.com");
    let bytes = query.encode();

    c.bench_function("decode query packet", |b| {
        b.iter(|| {
            black_box(DnsPacket::decode(black_box(&bytes)).unwrap());
        });
    });
}

criterion_group!(benches, bench_query_encode, bench_reply_decode);
criterion_main!(benches);
