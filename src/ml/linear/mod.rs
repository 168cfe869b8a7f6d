//! Linear classifiers `theta·x + theta0` and the algorithms that train them.

pub mod loss;
pub mod params;
pub mod trainer;
pub mod update;

pub use loss::{hinge_loss_full, hinge_loss_single};
pub use params::LinearParams;
pub use trainer::{
    AveragePerceptron, LinearClassifier, Pegasos, Perceptron, average_perceptron, pegasos,
    perceptron, validate_labels, validate_training_set,
};
pub use update::{pegasos_single_step_update, pegasos_step_size, perceptron_single_step_update};
