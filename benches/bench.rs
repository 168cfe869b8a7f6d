//! Criterion benchmarks for polarity.
//!
//! Covers the two hot paths of a training run:
//! - Review analysis and bag-of-words featurization
//! - Perceptron, averaged perceptron and Pegasos training

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use polarity::analysis::analyzer::{Analyzer, ReviewAnalyzer};
use polarity::analysis::token_filter::StopFilter;
use polarity::ml::features::{bag_of_words, extract_bow_feature_vectors};
use polarity::ml::linear::{AveragePerceptron, LinearClassifier, Pegasos, Perceptron};
use polarity::ml::order::OrderConfig;

/// Generate labeled reviews for benchmarking.
fn generate_reviews(count: usize) -> (Vec<String>, Vec<i8>) {
    let positive = [
        "great", "delicious", "fresh", "love", "perfect", "tasty", "smooth", "best",
    ];
    let negative = [
        "stale", "awful", "bland", "broken", "worst", "bitter", "cold", "refund",
    ];
    let neutral = [
        "the", "coffee", "box", "was", "and", "price", "arrived", "flavor", "this", "it",
    ];

    let mut texts = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    for i in 0..count {
        let label: i8 = if i % 2 == 0 { 1 } else { -1 };
        let polar = if label == 1 { &positive } else { &negative };
        let length = 20 + (i % 40);

        let mut words = Vec::with_capacity(length);
        for j in 0..length {
            if j % 5 == 0 {
                words.push(polar[(i * 3 + j) % polar.len()]);
            } else {
                words.push(neutral[(i * 7 + j * 13) % neutral.len()]);
            }
        }
        texts.push(format!("{}! It's {} stars.", words.join(" "), i % 5 + 1));
        labels.push(label);
    }
    (texts, labels)
}

/// Benchmark review analysis and featurization.
fn bench_featurization(c: &mut Criterion) {
    let mut group = c.benchmark_group("featurization");

    let analyzer = ReviewAnalyzer::new();
    let (texts, _) = generate_reviews(1000);
    let stop_words = StopFilter::from_words(["the", "was", "and", "this", "it"]);

    group.bench_function("analyze_single_review", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("bag_of_words", |b| {
        b.iter(|| black_box(bag_of_words(black_box(&texts), &stop_words).unwrap()))
    });

    let vocabulary = bag_of_words(&texts, &stop_words).unwrap();
    group.bench_function("extract_bow_feature_vectors", |b| {
        b.iter(|| black_box(extract_bow_feature_vectors(black_box(&texts), &vocabulary).unwrap()))
    });

    group.finish();
}

/// Benchmark the learners on a featurized corpus.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20);

    let (texts, labels) = generate_reviews(1000);
    let vocabulary = bag_of_words(&texts, &StopFilter::default()).unwrap();
    let features = extract_bow_feature_vectors(&texts, &vocabulary).unwrap();
    let order = OrderConfig::default().with_directory(std::env::temp_dir().join("polarity-bench"));

    let learners: Vec<Box<dyn LinearClassifier>> = vec![
        Box::new(Perceptron::new(10).with_order(order.clone())),
        Box::new(AveragePerceptron::new(10).with_order(order.clone())),
        Box::new(Pegasos::new(10, 0.01).with_order(order)),
    ];

    group.throughput(Throughput::Elements((features.n_rows() * 10) as u64));
    for learner in &learners {
        group.bench_function(learner.name(), |b| {
            b.iter(|| black_box(learner.train(black_box(&features), &labels).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_featurization, bench_training);
criterion_main!(benches);
