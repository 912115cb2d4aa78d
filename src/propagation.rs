//! Forward and backward passes through the two weight layers.
//!
//! `forward` returns every intermediate vector in an [`ActivationCache`];
//! `backward` takes that cache explicitly, so a gradient can only be computed
//! for the sample that produced it.

use ndarray::Array1;

use crate::activation::ActivationType;
use crate::loss::Loss;
use crate::params::{Gradients, ParameterStore};
use crate::utils::outer_product;

const HIDDEN_ACTIVATION: ActivationType = ActivationType::Sigmoid;
const OUTPUT_ACTIVATION: ActivationType = ActivationType::Softmax;
const LOSS: Loss = Loss::MeanSquaredError;

/// Intermediate values of one forward pass
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationCache {
    pub a0: Array1<f64>,
    pub z1: Array1<f64>,
    pub a1: Array1<f64>,
    pub z2: Array1<f64>,
    pub a2: Array1<f64>,
}

impl ActivationCache {
    /// Softmax output of the network
    pub fn output(&self) -> &Array1<f64> {
        &self.a2
    }

    pub fn into_output(self) -> Array1<f64> {
        self.a2
    }
}

pub fn forward(params: &ParameterStore, input: &Array1<f64>) -> ActivationCache {
    assert_eq!(
        input.len(),
        params.w1().ncols(),
        "Input size does not match layer's input size"
    );

    let z1 = params.w1().dot(input);
    let a1 = HIDDEN_ACTIVATION.forward(&z1);

    let z2 = params.w2().dot(&a1);
    let a2 = OUTPUT_ACTIVATION.forward(&z2);

    ActivationCache {
        a0: input.clone(),
        z1,
        a1,
        z2,
        a2,
    }
}

/// Gradients of both weight matrices for the sample cached by `forward`.
///
/// The output error is the squared-error gradient `2/N * (a2 - target)`
/// multiplied by the diagonal softmax derivative. That pairing is kept as is;
/// it is not the cross-entropy shortcut `a2 - target`.
pub fn backward(
    params: &ParameterStore,
    cache: &ActivationCache,
    target: &Array1<f64>,
) -> Gradients {
    assert_eq!(
        target.len(),
        cache.a2.len(),
        "Target size does not match layer's output size"
    );

    let error2 = LOSS.gradient(&cache.a2, target) * OUTPUT_ACTIVATION.derivative(&cache.z2);
    let w2 = outer_product(&error2, &cache.a1);

    let error1 = params.w2().t().dot(&error2) * HIDDEN_ACTIVATION.derivative(&cache.z1);
    let w1 = outer_product(&error1, &cache.a0);

    Gradients { w1, w2 }
}
