//! Single-example parameter updates.
//!
//! Both updates mutate the parameters in place. Callers are expected to have
//! checked that `x` has as many entries as `theta`.

use crate::ml::linear::params::LinearParams;

/// One perceptron step on example `x` with label `label`.
///
/// When `label * (theta·x + theta0) <= 0` the example is a mistake and
/// `theta += label * x`, `theta0 += label`. Returns whether an update was
/// made.
///
/// ```
/// use polarity::ml::linear::{perceptron_single_step_update, LinearParams};
///
/// let mut params = LinearParams::zeros(2);
/// assert!(perceptron_single_step_update(&[1.0, 0.0], 1, &mut params));
/// assert_eq!(params, LinearParams::new(vec![1.0, 0.0], 1.0));
/// ```
pub fn perceptron_single_step_update(x: &[f64], label: i8, params: &mut LinearParams) -> bool {
    if params.agreement(x, label) > 0.0 {
        return false;
    }

    let label = f64::from(label);
    for (t, xi) in params.theta.iter_mut().zip(x) {
        *t += label * xi;
    }
    params.theta0 += label;
    true
}

/// One Pegasos step with regularization `lambda` and step size `eta`.
///
/// Inside the margin (`label * (theta·x + theta0) <= 1`):
/// `theta = (1 - eta*lambda) * theta + eta * label * x` and
/// `theta0 += eta * label`. Outside it only the decay is applied and
/// `theta0` is left alone.
pub fn pegasos_single_step_update(
    x: &[f64],
    label: i8,
    lambda: f64,
    eta: f64,
    params: &mut LinearParams,
) {
    let inside_margin = params.agreement(x, label) <= 1.0;
    let decay = 1.0 - eta * lambda;
    let label = f64::from(label);

    if inside_margin {
        for (t, xi) in params.theta.iter_mut().zip(x) {
            *t = decay * *t + eta * label * xi;
        }
        params.theta0 += eta * label;
    } else {
        for t in &mut params.theta {
            *t *= decay;
        }
    }
}

/// Pegasos step size for the `t`-th update (1-based).
pub fn pegasos_step_size(t: usize) -> f64 {
    1.0 / (t as f64).sqrt()
}
