use criterion::{black_box, criterion_group, criterion_main, Criterion};
use depscope::parse::Language;

fn python_source_snippet() -> &'static str {
    "import os\nimport sys\nfrom collections import OrderedDict\nfrom .utils import helper\nfrom ..config import settings\n\ndef main():\n    pass\n"
}

fn javascript_source_snippet() -> &'static str {
    "import React from 'react';\nimport { Button } from './components/Button';\nconst fs = require('fs');\nconst lazy = await import('./lazy');\n\nexport default function App() {}\n"
}

fn rust_source_snippet() -> &'static str {
    "use crate::graph::builder;\nuse serde::Serialize;\nuse super::helpers;\nmod parser;\n\nfn main() {}\n"
}

fn bench_python_parse(c: &mut Criterion) {
    let source = python_source_snippet();
    c.bench_function("python_parse_imports", |b| {
        b.iter(|| black_box(Language::Python.parse_imports(black_box(source))).len())
    });
}

fn bench_javascript_parse(c: &mut Criterion) {
    let source = javascript_source_snippet();
    c.bench_function("javascript_parse_imports", |b| {
        b.iter(|| black_box(Language::JavaScript.parse_imports(black_box(source))).len())
    });
}

fn bench_rust_parse(c: &mut Criterion) {
    let source = rust_source_snippet();
    c.bench_function("rust_parse_imports", |b| {
        b.iter(|| black_box(Language::Rust.parse_imports(black_box(source))).len())
    });
}

fn bench_parse_large_file(c: &mut Criterion) {
    let source = python_source_snippet().repeat(500);
    c.bench_function("python_parse_imports_4k_lines", |b| {
        b.iter(|| black_box(Language::Python.parse_imports(black_box(&source))).len())
    });
}

criterion_group!(
    benches,
    bench_python_parse,
    bench_javascript_parse,
    bench_rust_parse,
    bench_parse_large_file
);
criterion_main!(benches);
