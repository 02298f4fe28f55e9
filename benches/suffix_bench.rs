use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ukkonen_index::{ChildIndex, LinearChildren, OrderedChildren, SuffixTree};

/// Deterministic xorshift so runs are comparable.
fn generate_text(size: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut text = Vec::with_capacity(size);
    while text.len() < size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        text.push(alphabet[(state % alphabet.len() as u64) as usize]);
    }
    text
}

fn dna(size: usize) -> Vec<u8> {
    generate_text(size, b"ACGT")
}

/// Printable ASCII minus the sentinel: wide fan-out near the root
fn ascii(size: usize) -> Vec<u8> {
    let alphabet: Vec<u8> = (33..=126u8).filter(|&b| b != b'$').collect();
    generate_text(size, &alphabet)
}

fn bench_construct_variant<C: ChildIndex>(c: &mut Criterion, corpus: &str, make: fn(usize) -> Vec<u8>) {
    let mut group = c.benchmark_group(format!("construct_{corpus}"));

    for size in [1_000, 10_000, 100_000] {
        let text = make(size);
        group.bench_with_input(BenchmarkId::new(C::NAME, size), &text, |b, text| {
            b.iter(|| SuffixTree::<C>::construct(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    bench_construct_variant::<LinearChildren>(c, "dna", dna);
    bench_construct_variant::<OrderedChildren>(c, "dna", dna);
    bench_construct_variant::<LinearChildren>(c, "ascii", ascii);
    bench_construct_variant::<OrderedChildren>(c, "ascii", ascii);
}

fn bench_search(c: &mut Criterion) {
    let text = ascii(100_000);
    let linear: SuffixTree<LinearChildren> = SuffixTree::construct(&text).unwrap();
    let ordered: SuffixTree<OrderedChildren> = SuffixTree::construct(&text).unwrap();

    // Tail of the text is guaranteed to be present
    let hit = text[text.len() - 10..].to_vec();
    let miss = b"$$$$$$$$$$".to_vec();

    let mut group = c.benchmark_group("search");
    for (name, pattern) in [("hit", &hit), ("miss", &miss)] {
        group.bench_with_input(BenchmarkId::new("linear", name), pattern, |b, pat| {
            b.iter(|| linear.search(black_box(pat)))
        });
        group.bench_with_input(BenchmarkId::new("ordered", name), pattern, |b, pat| {
            b.iter(|| ordered.search(black_box(pat)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construct, bench_search);
criterion_main!(benches);
