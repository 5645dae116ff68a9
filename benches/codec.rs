use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use snmp_text::agent::Agent;
use snmp_text::protocol::{ErrorStatus, decode, encode_error, encode_get_request, encode_response};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    group.bench_function("encode_get_request", |b| {
        b.iter(|| {
            black_box(encode_get_request(
                black_box("1.3.6.1.2.1.1.5"),
                black_box(42),
                "1",
                "public",
            ));
        });
    });

    // Value sized like a long hostname
    let value = "x".repeat(255);
    group.throughput(Throughput::Bytes(value.len() as u64));
    group.bench_function("encode_response_255b", |b| {
        b.iter(|| {
            black_box(encode_response("1", black_box(&value), 42, "1", "public"));
        });
    });

    group.bench_function("encode_error", |b| {
        b.iter(|| {
            black_box(encode_error(
                "9",
                "Unknown OID",
                42,
                "1",
                "public",
                ErrorStatus::NoSuchName,
                1,
            ));
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let request = encode_get_request("1", 42, "1", "public");
    group.bench_function("decode_get_request", |b| {
        b.iter(|| {
            black_box(decode(black_box(&request)));
        });
    });

    let response = encode_response("1", &"x".repeat(255), 42, "1", "public");
    group.throughput(Throughput::Bytes(response.len() as u64));
    group.bench_function("decode_response_255b", |b| {
        b.iter(|| {
            black_box(decode(black_box(&response)));
        });
    });

    group.finish();
}

fn bench_handle_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("agent");

    let agent = Agent::standard();
    let uptime = encode_get_request("2", 42, "1", "public");
    group.bench_function("handle_uptime", |b| {
        b.iter(|| {
            black_box(agent.handle_message(black_box(&uptime)));
        });
    });

    let unknown = encode_get_request("99", 42, "1", "public");
    group.bench_function("handle_unknown_oid", |b| {
        b.iter(|| {
            black_box(agent.handle_message(black_box(&unknown)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_handle_message);
criterion_main!(benches);
