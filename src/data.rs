//! Loading review datasets.
//!
//! Datasets are tab-separated files whose first row names the columns:
//!
//! ```text
//! sentiment	productId	userId	summary	text	helpfulY	helpfulN
//! -1	B000...	A1...	Bad	Not worth the price.	0	1
//! ```
//!
//! Only the `sentiment` and `text` columns are read. Fields that are not
//! valid UTF-8 are decoded as Latin-1.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};

const SENTIMENT_COLUMN: &str = "sentiment";
const TEXT_COLUMN: &str = "text";

/// A labeled review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// `1` for a positive review, `-1` for a negative one.
    pub sentiment: i8,
    pub text: String,
}

/// Load the labeled reviews of a dataset file.
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<Vec<Review>> {
    let path = path.as_ref();
    let reviews = read_reviews(File::open(path)?)?;
    info!("loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}

/// Load only the `text` column of a dataset file.
pub fn load_texts<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = tsv_reader(File::open(path)?);
    let text = column_index(reader.byte_headers()?, TEXT_COLUMN)?;

    let mut texts = Vec::new();
    for record in reader.byte_records() {
        texts.push(decode(field(&record?, text)?));
    }
    info!("loaded {} texts from {}", texts.len(), path.display());
    Ok(texts)
}

/// Parse labeled reviews from any reader producing a dataset file.
pub fn read_reviews<R: Read>(input: R) -> Result<Vec<Review>> {
    let mut reader = tsv_reader(input);
    let headers = reader.byte_headers()?.clone();
    let sentiment = column_index(&headers, SENTIMENT_COLUMN)?;
    let text = column_index(&headers, TEXT_COLUMN)?;

    let mut reviews = Vec::new();
    for (row, record) in reader.byte_records().enumerate() {
        let record = record?;
        reviews.push(Review {
            sentiment: parse_sentiment(field(&record, sentiment)?, row + 1)?,
            text: decode(field(&record, text)?),
        });
    }
    Ok(reviews)
}

/// Split reviews into their texts and labels.
pub fn split_reviews(reviews: &[Review]) -> (Vec<String>, Vec<i8>) {
    reviews
        .iter()
        .map(|review| (review.text.clone(), review.sentiment))
        .unzip()
}

fn tsv_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(input)
}

fn column_index(headers: &ByteRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| decode(h).trim() == name)
        .ok_or_else(|| PolarityError::data(format!("missing '{name}' column")))
}

fn field(record: &ByteRecord, index: usize) -> Result<&[u8]> {
    record.get(index).ok_or_else(|| {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        PolarityError::data(format!("line {line} has no column {index}"))
    })
}

fn parse_sentiment(raw: &[u8], row: usize) -> Result<i8> {
    let raw = decode(raw);
    match raw.trim().parse::<i8>() {
        Ok(label @ (1 | -1)) => Ok(label),
        _ => Err(PolarityError::label(format!(
            "row {row}: sentiment {raw:?} is not -1 or 1"
        ))),
    }
}

fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
