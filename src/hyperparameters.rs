use crate::error::{NetError, Result};

/// Hyperparameters for the neural network model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelHyperparameters {
    /// Learning rate for training
    pub learning_rate: f64,

    /// Number of training epochs
    pub epochs: usize,

    /// Seed for weight initialization; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl ModelHyperparameters {
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::InvalidConfig(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

impl Default for ModelHyperparameters {
    fn default() -> Self {
        ModelHyperparameters {
            learning_rate: 0.001,
            epochs: 10,
            seed: None,
        }
    }
}
