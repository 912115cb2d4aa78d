use crate::params::{Gradients, ParameterStore};

/// Plain gradient descent with a fixed learning rate
#[derive(Debug, Clone)]
pub struct Optimizer {
    pub learning_rate: f64,
}

impl Optimizer {
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    pub fn step(&self, params: &mut ParameterStore, gradients: &Gradients) {
        params.update(gradients, self.learning_rate);
    }
}
