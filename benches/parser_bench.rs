use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jflow::char_source::ChunkSource;
use jflow::dom::DomBuilder;
use jflow::parser::{Outcome, Parser};

struct Corpus {
    name: &'static str,
    source: String,
}

fn build_flat_object_corpus(pairs: usize) -> String {
    let mut parts = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        parts.push(format!("\"key_{i}\""));
        parts.push(i.to_string());
    }
    format!("{{{}}}", parts.join(", "))
}

fn build_deep_nesting_corpus(depth: usize) -> String {
    let mut src = String::with_capacity(depth * 16);
    for _ in 0..depth {
        src.push_str(r#"{"a", ["#);
    }
    src.push('1');
    for _ in 0..depth {
        src.push_str("]}");
    }
    src
}

fn build_wide_array_corpus(elements: usize) -> String {
    let mut parts = Vec::with_capacity(elements);
    for i in 0..elements {
        if i % 4 == 0 {
            parts.push(format!("{{\"x\", {i}}}"));
        } else {
            parts.push(i.to_string());
        }
    }
    format!("[{}]", parts.join(", "))
}

fn build_corpora() -> Vec<Corpus> {
    vec![
        Corpus {
            name: "flat_object_8k_pairs",
            source: build_flat_object_corpus(8_000),
        },
        Corpus {
            name: "deep_nesting_2k",
            source: build_deep_nesting_corpus(2_000),
        },
        Corpus {
            name: "wide_mixed_array_8k",
            source: build_wide_array_corpus(8_000),
        },
    ]
}

fn parse_whole_to_dom(input: &str) -> usize {
    let mut src = ChunkSource::new();
    src.feed(input.as_bytes());
    src.close();
    let mut parser = Parser::new();
    let mut builder = DomBuilder::new();
    match parser.parse(&mut src, &mut builder).unwrap() {
        Outcome::Ok => {}
        other => panic!("unexpected parse outcome on bench corpus: {other:?}"),
    }
    // Touch the tree so the DOM build isn't optimized away independent of
    // the depth/width actually produced.
    match builder.finish() {
        jflow::dom::Node::Object(pairs) => pairs.len(),
        jflow::dom::Node::Array(items) => items.len(),
        _ => 0,
    }
}

/// Drive the parser through `Pending` in small token-sized chunks, the
/// shape a real incremental caller (a socket reader feeding a few hundred
/// bytes at a time) actually exercises, rather than a single whole-input
/// feed.
fn parse_chunked_to_dom(input: &str, chunk_size: usize) -> usize {
    let bytes = input.as_bytes();
    let mut src = ChunkSource::new();
    let mut parser = Parser::new();
    let mut builder = DomBuilder::new();
    let mut offset = 0;
    let mut closed = false;

    loop {
        match parser.parse(&mut src, &mut builder).unwrap() {
            Outcome::Ok => {
                return match builder.finish() {
                    jflow::dom::Node::Object(pairs) => pairs.len(),
                    jflow::dom::Node::Array(items) => items.len(),
                    _ => 0,
                };
            }
            Outcome::Error(e) => panic!("unexpected parse error on bench corpus: {e}"),
            Outcome::Pending => {
                if offset < bytes.len() {
                    let end = (offset + chunk_size).min(bytes.len());
                    src.feed(&bytes[offset..end]);
                    offset = end;
                } else if !closed {
                    src.close();
                    closed = true;
                } else {
                    panic!("still Pending after closing a fully-fed source");
                }
            }
        }
    }
}

fn bench_parser_whole_document(c: &mut Criterion) {
    let corpora = build_corpora();
    let mut group = c.benchmark_group("parser/whole_document");

    for corpus in &corpora {
        let input = corpus.source.as_str();
        group.throughput(Throughput::Bytes(input.as_bytes().len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus.name),
            input,
            |b, input| {
                b.iter(|| {
                    let n = parse_whole_to_dom(black_box(input));
                    black_box(n);
                });
            },
        );
    }

    group.finish();
}

fn bench_parser_chunked(c: &mut Criterion) {
    let corpora = build_corpora();
    let mut group = c.benchmark_group("parser/chunked_128b");

    for corpus in &corpora {
        let input = corpus.source.as_str();
        group.throughput(Throughput::Bytes(input.as_bytes().len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus.name),
            input,
            |b, input| {
                b.iter(|| {
                    let n = parse_chunked_to_dom(black_box(input), 128);
                    black_box(n);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parser_whole_document, bench_parser_chunked);
criterion_main!(benches);
