//! Benchmarks for the cleaning and extraction hot paths.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use stylograph::stylometry::StyleAnalyzer;
use stylograph::text::TextNormalizer;

/// Build a book-sized synthetic document: repeated prose paragraphs inside
/// the usual Gutenberg wrapper.
fn synthetic_book(paragraphs: usize) -> String {
    let mut text = String::from("*** START OF THE PROJECT GUTENBERG EBOOK BENCH ***\n");
    text.push_str("Produced by Nobody in Particular\n");
    for i in 0..paragraphs {
        text.push_str(&format!(
            "Paragraph {i} begins here, with commas and clauses. \
             \"Dialogue appears,\" said the narrator. Short one! \
             Then a much longer sentence follows to spread the lengths around.\n\n\n\n"
        ));
    }
    text.push_str("*** END OF THE PROJECT GUTENBERG EBOOK BENCH ***\n");
    text
}

fn bench_normalize(c: &mut Criterion) {
    let norm = TextNormalizer::new();
    let raw = synthetic_book(2_000);

    c.bench_function("normalize_2k_paragraphs", |bench| {
        bench.iter(|| black_box(norm.normalize(&raw)))
    });
}

fn bench_extract(c: &mut Criterion) {
    let norm = TextNormalizer::new();
    let analyzer = StyleAnalyzer::new();
    let clean = norm.normalize(&synthetic_book(2_000));

    c.bench_function("extract_2k_paragraphs", |bench| {
        bench.iter(|| black_box(analyzer.extract(&clean).unwrap()))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let norm = TextNormalizer::new();
    let analyzer = StyleAnalyzer::new();
    let raw = synthetic_book(500);

    c.bench_function("normalize_then_extract_500", |bench| {
        bench.iter(|| {
            let clean = norm.normalize(&raw);
            black_box(analyzer.extract(&clean).unwrap())
        })
    });
}

criterion_group!(benches, bench_normalize, bench_extract, bench_full_pipeline);
criterion_main!(benches);
