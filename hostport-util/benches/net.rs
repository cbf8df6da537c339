/*
 *     Copyright 2026 The Hostport Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hostport_util::net::{join_host_port, split_host_port, split_host_port_owned};

// Names covering every shape the splitter distinguishes.
const NAMES: [(&str, &str); 5] = [
    ("hostname", "host.example.com:80"),
    ("ipv4", "192.168.1.1:8080"),
    ("bracketed ipv6", "[2001:db8::1]:443"),
    ("bare ipv6", "2001:db8::1"),
    ("bracketed ipv6 without port", "[::1]"),
];

pub fn split(c: &mut Criterion) {
    let mut group = c.benchmark_group("Split Host Port");

    for (id, name) in NAMES {
        group.bench_with_input(BenchmarkId::new("Split Host Port", id), name, |b, name| {
            b.iter(|| split_host_port(black_box(name)))
        });
    }

    group.finish();
}

pub fn split_owned(c: &mut Criterion) {
    let mut group = c.benchmark_group("Split Host Port Owned");

    for (id, name) in NAMES {
        group.bench_with_input(
            BenchmarkId::new("Split Host Port Owned", id),
            name,
            |b, name| b.iter(|| split_host_port_owned(black_box(name))),
        );
    }

    group.finish();
}

pub fn join(c: &mut Criterion) {
    let mut group = c.benchmark_group("Join Host Port");

    for (id, host) in [("hostname", "host.example.com"), ("ipv6", "2001:db8::1")] {
        group.bench_with_input(BenchmarkId::new("Join Host Port", id), host, |b, host| {
            b.iter(|| join_host_port(black_box(host), black_box(8080)))
        });
    }

    group.finish();
}

criterion_group!(benches, split, split_owned, join);
criterion_main!(benches);
