use atomcss_compiler::compile_document;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn compile_small_document(c: &mut Criterion) {
    let html = r#"<html><head></head><body><div class="mt-10px phone:bg-#ff0000"></div></body></html>"#;

    c.bench_function("compile_small_document", |b| {
        b.iter(|| compile_document(black_box(html)))
    });
}

fn compile_medium_document(c: &mut Criterion) {
    let row = r#"<div class="flex gap-8 p-16 phone:p-8 hover:bg-surface">
<span class="fz-sm fw-medium c-#333 tablet:fz-md">cell</span>
<img class="w-full rounded-4px" src="x.png"/>
</div>"#;
    let html = format!(
        "<html><head><title>bench</title></head><body><not-phone>nav</not-phone>{}</body></html>",
        row.repeat(50)
    );

    c.bench_function("compile_medium_document", |b| {
        b.iter(|| compile_document(black_box(&html)))
    });
}

criterion_group!(benches, compile_small_document, compile_medium_document);
criterion_main!(benches);
