use atomcss_parser::parse_class_token;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn parse_plain_token(c: &mut Criterion) {
    c.bench_function("parse_plain_token", |b| {
        b.iter(|| parse_class_token(black_box("mt-10px")))
    });
}

fn parse_modified_token(c: &mut Criterion) {
    c.bench_function("parse_modified_token", |b| {
        b.iter(|| parse_class_token(black_box("not:desktop:!w-full")))
    });
}

fn parse_token_list(c: &mut Criterion) {
    let tokens = [
        "mt-10px",
        "phone:bg-#112233",
        "hover:focus:c-primary",
        "not:tablet:p-8",
        "zzz-unknown-token",
        "desktop:!fz-lg",
    ];

    c.bench_function("parse_token_list", |b| {
        b.iter(|| {
            for token in tokens {
                let _ = parse_class_token(black_box(token));
            }
        })
    });
}

criterion_group!(
    benches,
    parse_plain_token,
    parse_modified_token,
    parse_token_list
);
criterion_main!(benches);
