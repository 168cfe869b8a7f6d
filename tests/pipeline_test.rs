use std::fs;

use polarity::analysis::token_filter::StopFilter;
use polarity::config::{Algorithm, TrainingConfig};
use polarity::data::{load_reviews, load_texts, split_reviews};
use polarity::error::PolarityError;
use polarity::ml::evaluation::{classifier_accuracy, explanatory_words};
use polarity::ml::features::{bag_of_words, extract_bow_feature_vectors, extract_words};
use polarity::ml::order::OrderConfig;
use tempfile::tempdir;

const TRAIN: &str = "sentiment\tproductId\ttext\n\
    1\tB01\tGreat coffee, I love it!\n\
    -1\tB02\tStale beans. Awful.\n\
    1\tB03\tLove the smooth flavor\n\
    -1\tB04\tAwful taste, the box was broken\n";

const VAL: &str = "sentiment\tproductId\ttext\n\
    1\tB05\tI love this coffee\n\
    -1\tB06\tBroken and stale\n";

#[test]
fn test_extract_words() {
    assert_eq!(
        extract_words("It's 5 stars!").unwrap(),
        vec!["it", "'", "s", "5", "stars", "!"]
    );
    assert_eq!(
        extract_words("Tasty\tAND\ncheap").unwrap(),
        vec!["tasty", "and", "cheap"]
    );
}

#[test]
fn test_stopword_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stopwords.txt");
    fs::write(&path, "the\nit\ni\nwas\nthis\n").unwrap();

    let stop_words = StopFilter::from_file(&path).unwrap();
    assert_eq!(stop_words.len(), 5);

    let vocabulary = bag_of_words(&["The box was it"], &stop_words).unwrap();
    assert_eq!(vocabulary.words(), &["box".to_string()]);
}

#[test]
fn test_missing_stopword_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        StopFilter::from_file(dir.path().join("stopwords.txt")),
        Err(PolarityError::Io(_))
    ));
}

#[test]
fn test_vocabulary_indices_are_dense() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("train.tsv");
    fs::write(&path, TRAIN).unwrap();

    let texts = load_texts(&path).unwrap();
    let vocabulary = bag_of_words(&texts, &StopFilter::default()).unwrap();

    let mut indices: Vec<usize> = vocabulary
        .words()
        .iter()
        .map(|w| vocabulary.index_of(w).unwrap())
        .collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..vocabulary.len()).collect::<Vec<_>>());
}

#[test]
fn test_bow_counts() {
    let vocabulary = bag_of_words(&["good good bad"], &StopFilter::default()).unwrap();
    let features = extract_bow_feature_vectors(&["bad good good good", "meh"], &vocabulary).unwrap();

    assert_eq!(features.row(0), &[3.0, 1.0]);
    assert_eq!(features.row(1), &[0.0, 0.0]);
}

#[test]
fn test_end_to_end_training() {
    let dir = tempdir().unwrap();
    let train_path = dir.path().join("train.tsv");
    let val_path = dir.path().join("val.tsv");
    fs::write(&train_path, TRAIN).unwrap();
    fs::write(&val_path, VAL).unwrap();

    let (train_texts, train_labels) = split_reviews(&load_reviews(&train_path).unwrap());
    let (val_texts, val_labels) = split_reviews(&load_reviews(&val_path).unwrap());
    assert_eq!(train_labels, vec![1, -1, 1, -1]);

    let stop_words = StopFilter::from_words(["the", "i", "it", "was", "this", "and"]);
    let vocabulary = bag_of_words(&train_texts, &stop_words).unwrap();
    let train = extract_bow_feature_vectors(&train_texts, &vocabulary).unwrap();
    let val = extract_bow_feature_vectors(&val_texts, &vocabulary).unwrap();

    let order = OrderConfig::default().with_directory(dir.path());
    for algorithm in [
        Algorithm::Perceptron,
        Algorithm::AveragePerceptron,
        Algorithm::Pegasos,
    ] {
        let config = TrainingConfig::default()
            .with_algorithm(algorithm)
            .with_epochs(10)
            .with_order(order.clone());
        let (train_acc, val_acc) = classifier_accuracy(
            config.build().as_ref(),
            &train,
            &val,
            &train_labels,
            &val_labels,
        )
        .unwrap();

        assert_eq!(train_acc, 1.0, "{algorithm}");
        assert!((0.0..=1.0).contains(&val_acc), "{algorithm}");
    }

    let params = TrainingConfig::default()
        .with_algorithm(Algorithm::Perceptron)
        .with_order(order)
        .build()
        .train(&train, &train_labels)
        .unwrap();
    let words = explanatory_words(&params, &vocabulary, 3).unwrap();
    assert_eq!(words.len(), 3);
    assert!(words.windows(2).all(|w| w[0].weight >= w[1].weight));
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"algorithm": "perceptron", "epochs": 4, "order": {"directory": "orders"}}"#,
    )
    .unwrap();

    let config = TrainingConfig::from_file(&path).unwrap();
    assert_eq!(config.algorithm, Algorithm::Perceptron);
    assert_eq!(config.epochs, 4);
    assert_eq!(config.order.seed, 1);
    assert_eq!(config.order.directory, std::path::PathBuf::from("orders"));
}
