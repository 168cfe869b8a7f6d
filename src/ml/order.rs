//! Training order of examples.
//!
//! Every learner visits the examples of an epoch in the same fixed
//! permutation of `0..n`. The permutation comes from an order cache file
//! `<n>.txt` (a single line of comma-separated indices) when one exists in
//! the configured directory, and from a seeded shuffle otherwise.
//!
//! ```
//! use polarity::ml::order::{get_order, OrderConfig};
//!
//! let config = OrderConfig::default().with_directory("/nonexistent");
//! let order = get_order(5, &config).unwrap();
//!
//! let mut sorted = order.clone();
//! sorted.sort_unstable();
//! assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
//! assert_eq!(order, get_order(5, &config).unwrap());
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};

/// Seed of the fallback shuffle.
pub const DEFAULT_ORDER_SEED: u64 = 1;

/// Where training orders come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Directory searched for `<n>.txt` order files.
    pub directory: PathBuf,
    /// Seed of the shuffle used when no order file exists.
    pub seed: u64,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            seed: DEFAULT_ORDER_SEED,
        }
    }
}

impl OrderConfig {
    pub fn with_directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Path of the order file for `n_samples` examples.
    pub fn order_path(&self, n_samples: usize) -> PathBuf {
        order_path(&self.directory, n_samples)
    }
}

/// Path of the order file for `n_samples` examples inside `directory`.
pub fn order_path(directory: &Path, n_samples: usize) -> PathBuf {
    directory.join(format!("{n_samples}.txt"))
}

/// The order in which the `n_samples` training examples are visited.
///
/// A missing order file falls back to [`shuffled_order`]. An order file that
/// exists but does not hold a permutation of `0..n_samples` is an error.
pub fn get_order(n_samples: usize, config: &OrderConfig) -> Result<Vec<usize>> {
    let path = config.order_path(n_samples);
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            debug!("using training order from {}", path.display());
            parse_order(&content, n_samples)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(
                "no order file at {}, shuffling with seed {}",
                path.display(),
                config.seed
            );
            Ok(shuffled_order(n_samples, config.seed))
        }
        Err(e) => Err(e.into()),
    }
}

/// A seeded pseudo-random permutation of `0..n_samples`.
pub fn shuffled_order(n_samples: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(&mut rng);
    indices
}

/// Parse the first line of an order file and check it is a permutation of
/// `0..n_samples`.
pub fn parse_order(content: &str, n_samples: usize) -> Result<Vec<usize>> {
    let line = content.lines().next().unwrap_or("").trim();
    let order = if line.is_empty() {
        Vec::new()
    } else {
        line.split(',')
            .map(|field| {
                field.trim().parse::<usize>().map_err(|e| {
                    PolarityError::order(format!("invalid index {:?}: {e}", field.trim()))
                })
            })
            .collect::<Result<Vec<_>>>()?
    };

    if order.len() != n_samples {
        return Err(PolarityError::order(format!(
            "expected {n_samples} indices, found {}",
            order.len()
        )));
    }
    let mut seen = vec![false; n_samples];
    for &idx in &order {
        if idx >= n_samples {
            return Err(PolarityError::order(format!(
                "index {idx} out of range for {n_samples} samples"
            )));
        }
        if std::mem::replace(&mut seen[idx], true) {
            return Err(PolarityError::order(format!("index {idx} appears twice")));
        }
    }

    Ok(order)
}

/// Write `order` as the order file for `order.len()` examples in `directory`,
/// so that later runs reuse it. Returns the path written.
pub fn write_order(directory: &Path, order: &[usize]) -> Result<PathBuf> {
    parse_order(&format_order(order), order.len())?;

    let path = order_path(directory, order.len());
    std::fs::write(&path, format_order(order))?;
    debug!("wrote training order to {}", path.display());
    Ok(path)
}

fn format_order(order: &[usize]) -> String {
    order
        .iter()
        .map(|idx| idx.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
