use criterion::{Criterion, black_box, criterion_group, criterion_main};

use facturation::flow::*;
use facturation::territory::*;

/// Mix of territory pairs resembling a real invoice batch: mostly
/// domestic, some DROM-COM, some foreign.
const PAIRS: &[(&str, &str, Option<&str>)] = &[
    ("FR", "FR", Some("FR32123456789")),
    ("FR", "FR", None),
    ("FR", "GP", Some("FR32123456789")),
    ("FR", "DE", Some("DE123456789")),
    ("FR", "GF", Some("FR32123456789")),
    ("FR", "NC", None),
    ("GP", "MQ", Some("FR32123456789")),
    ("FR", "US", Some("US-EIN")),
];

fn bench_territory_kind(c: &mut Criterion) {
    c.bench_function("territory_kind", |b| {
        b.iter(|| {
            for (seller, buyer, _) in PAIRS {
                black_box(territory_kind(black_box(seller)));
                black_box(territory_kind(black_box(buyer)));
            }
        })
    });
}

fn bench_flow_scope(c: &mut Criterion) {
    c.bench_function("transaction_flow_scope", |b| {
        b.iter(|| {
            for (seller, buyer, vat) in PAIRS {
                black_box(transaction_flow_scope(
                    black_box(seller),
                    black_box(buyer),
                    black_box(*vat),
                ));
            }
        })
    });
}

fn bench_ppf_mapping(c: &mut Criterion) {
    c.bench_function("ppf_country_code", |b| {
        b.iter(|| {
            for (seller, buyer, _) in PAIRS {
                black_box(ppf_country_code(black_box(seller)));
                black_box(ppf_country_code(black_box(buyer)));
            }
        })
    });
}

criterion_group!(benches, bench_territory_kind, bench_flow_scope, bench_ppf_mapping);
criterion_main!(benches);
