//! Featurization, training and evaluation of linear sentiment classifiers.
//!
//! Reviews are turned into bag-of-words count vectors ([`features`]) stored
//! row-major in a [`FeatureMatrix`](matrix::FeatureMatrix), then fed to one of
//! the learners in [`linear`]. Training visits the examples in a fixed
//! [`order`].

pub mod evaluation;
pub mod features;
pub mod linear;
pub mod matrix;
pub mod order;

pub use evaluation::*;
pub use features::*;
pub use linear::*;
pub use matrix::*;
pub use order::*;
