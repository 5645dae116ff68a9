//! Loopback GET round-trip benchmarks
//!
//! Measures one manager request against a live agent on 127.0.0.1.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use snmp_text::agent::{Agent, AgentConfig};
use snmp_text::manager::{Manager, ManagerConfig};

fn bench_round_trip(c: &mut Criterion) {
    let config = AgentConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        poll_interval: Duration::from_millis(50),
        ..AgentConfig::default()
    };
    let mut server = Agent::standard().bind(&config).unwrap();
    let port = server.local_addr().unwrap().port();
    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    let handle = thread::spawn(move || server.serve(&flag));

    let manager = Manager::new(ManagerConfig {
        timeout: Duration::from_secs(1),
        ..ManagerConfig::default()
    });

    let mut group = c.benchmark_group("round_trip");
    group.bench_function("get_uptime", |b| {
        b.iter(|| {
            black_box(manager.send_get_request("2", "127.0.0.1", port).unwrap());
        });
    });
    group.bench_function("get_unknown_oid", |b| {
        b.iter(|| {
            black_box(manager.send_get_request("99", "127.0.0.1", port).unwrap_err());
        });
    });
    group.finish();

    shutdown.store(true, Ordering::Relaxed);
    handle.join().unwrap();
}

criterion_group!(benches, bench_round_trip);
criterion_main!(benches);
