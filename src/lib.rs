mod model;
mod activation;
mod error;
mod hyperparameters;
mod loss;
mod optimizer;
mod params;
mod propagation;
mod utils;
pub mod metrics;

pub use model::Model;
pub use model::EpochReport;
pub use activation::{sigmoid, sigmoid_derivative, softmax, softmax_derivative, ActivationType};
pub use error::{NetError, Result, VectorKind};
pub use hyperparameters::ModelHyperparameters;
pub use loss::Loss;
pub use optimizer::Optimizer;
pub use params::{Gradients, ParameterStore, WeightKey};
pub use propagation::{backward, forward, ActivationCache};
pub use metrics::ClassificationMetrics;
pub use utils::{argmax, outer_product};
