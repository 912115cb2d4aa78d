use std::fmt;
use std::time::{Duration, Instant};

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::error::{NetError, Result, VectorKind};
use crate::hyperparameters::ModelHyperparameters;
use crate::loss::Loss;
use crate::metrics::{self, ClassificationMetrics};
use crate::optimizer::Optimizer;
use crate::params::ParameterStore;
use crate::propagation::{backward, forward};
use crate::utils::argmax;

/// Network with one sigmoid hidden layer and a softmax output, trained one
/// sample at a time.
#[derive(Debug, Clone)]
pub struct Model {
    params: ParameterStore,
    optimizer: Optimizer,
    loss: Loss,
    hyperparameters: ModelHyperparameters,
}

/// Progress recorded at the end of each epoch
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    /// 1-based epoch number
    pub epoch: usize,
    /// Time since `train` was called
    pub elapsed: Duration,
    /// Validation accuracy in `[0, 1]`
    pub accuracy: f64,
    /// Mean training loss over the epoch's samples
    pub mean_loss: f64,
}

impl fmt::Display for EpochReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Epoch: {}, Time Spent: {:.2}s, Accuracy: {:.2}%",
            self.epoch,
            self.elapsed.as_secs_f64(),
            self.accuracy * 100.0
        )
    }
}

impl Model {
    /// Create a new model and draw its initial weights
    ///
    /// # Arguments
    ///
    /// * `sizes` - `[input, hidden, output]` layer sizes
    /// * `hyperparameters` - Epochs, learning rate and optional seed
    pub fn new(sizes: [usize; 3], hyperparameters: ModelHyperparameters) -> Result<Self> {
        if sizes.contains(&0) {
            return Err(NetError::InvalidConfig(format!(
                "layer sizes must be positive, got {:?}",
                sizes
            )));
        }
        hyperparameters.validate()?;

        let mut rng = match hyperparameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let params = ParameterStore::initialize(sizes, &mut rng);
        debug!(
            ?sizes,
            parameters = params.parameter_count(),
            learning_rate = hyperparameters.learning_rate,
            epochs = hyperparameters.epochs,
            "initialized model"
        );

        Ok(Model {
            params,
            optimizer: Optimizer::new(hyperparameters.learning_rate),
            loss: Loss::MeanSquaredError,
            hyperparameters,
        })
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    pub fn hyperparameters(&self) -> &ModelHyperparameters {
        &self.hyperparameters
    }

    /// Output distribution for one input. Panics if the input length does not
    /// match the input layer.
    pub fn predict(&self, input: &Array1<f64>) -> Array1<f64> {
        forward(&self.params, input).into_output()
    }

    pub fn predict_label(&self, input: &Array1<f64>) -> usize {
        argmax(&self.predict(input))
    }

    /// One forward → backward → update step. Returns the sample's loss as
    /// measured before the update.
    pub fn train_sample(&mut self, input: &Array1<f64>, target: &Array1<f64>) -> f64 {
        let cache = forward(&self.params, input);
        let loss = self.loss.calculate(cache.output(), target);
        let gradients = backward(&self.params, &cache, target);
        self.optimizer.step(&mut self.params, &gradients);
        loss
    }

    /// Runs the configured number of epochs over the training set in order and
    /// evaluates on the validation set after each one.
    ///
    /// Both datasets are checked against the layer sizes before any weight
    /// changes.
    pub fn train(
        &mut self,
        x_train: &[Array1<f64>],
        y_train: &[Array1<f64>],
        x_val: &[Array1<f64>],
        y_val: &[Array1<f64>],
    ) -> Result<Vec<EpochReport>> {
        self.check_dataset(x_train, y_train)?;
        self.check_dataset(x_val, y_val)?;

        let start = Instant::now();
        let mut history = Vec::with_capacity(self.hyperparameters.epochs);

        for epoch in 0..self.hyperparameters.epochs {
            let mut total_loss = 0.0;
            for (x, y) in x_train.iter().zip(y_train) {
                total_loss += self.train_sample(x, y);
            }

            let report = EpochReport {
                epoch: epoch + 1,
                elapsed: start.elapsed(),
                accuracy: self.accuracy_unchecked(x_val, y_val),
                mean_loss: if x_train.is_empty() {
                    0.0
                } else {
                    total_loss / x_train.len() as f64
                },
            };
            info!(mean_loss = report.mean_loss, "{}", report);
            history.push(report);
        }

        Ok(history)
    }

    /// Fraction of samples whose predicted class matches the one-hot label
    pub fn compute_accuracy(&self, x_val: &[Array1<f64>], y_val: &[Array1<f64>]) -> Result<f64> {
        self.check_dataset(x_val, y_val)?;
        Ok(self.accuracy_unchecked(x_val, y_val))
    }

    pub fn compute_metrics(
        &self,
        x_val: &[Array1<f64>],
        y_val: &[Array1<f64>],
    ) -> Result<ClassificationMetrics> {
        self.check_dataset(x_val, y_val)?;

        let (y_true, y_pred): (Vec<usize>, Vec<usize>) = x_val
            .iter()
            .zip(y_val)
            .map(|(x, y)| (argmax(y), self.predict_label(x)))
            .unzip();

        metrics::classify(&y_true, &y_pred)
    }

    /// Splits the validation inputs into correctly and incorrectly classified
    /// ones. The returned references point into `x_val`.
    pub fn get_properly_classified_and_misclassified_images<'a>(
        &self,
        x_val: &'a [Array1<f64>],
        y_val: &[Array1<f64>],
    ) -> Result<(Vec<&'a Array1<f64>>, Vec<&'a Array1<f64>>)> {
        self.check_dataset(x_val, y_val)?;

        let (properly_classified, misclassified) = x_val
            .iter()
            .zip(y_val)
            .partition::<Vec<_>, _>(|(x, y)| self.predict_label(x) == argmax(y));

        Ok((
            properly_classified.into_iter().map(|(x, _)| x).collect(),
            misclassified.into_iter().map(|(x, _)| x).collect(),
        ))
    }

    fn accuracy_unchecked(&self, x_val: &[Array1<f64>], y_val: &[Array1<f64>]) -> f64 {
        if x_val.is_empty() {
            warn!("validation set is empty, reporting zero accuracy");
            return 0.0;
        }

        let correct = x_val
            .iter()
            .zip(y_val)
            .filter(|(x, y)| self.predict_label(x) == argmax(y))
            .count();

        correct as f64 / x_val.len() as f64
    }

    fn check_dataset(&self, inputs: &[Array1<f64>], labels: &[Array1<f64>]) -> Result<()> {
        if inputs.len() != labels.len() {
            return Err(NetError::LengthMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }

        let [input_size, _, output_size] = self.params.sizes();
        let checks = [
            (VectorKind::Input, inputs, input_size),
            (VectorKind::Label, labels, output_size),
        ];
        for (kind, vectors, expected) in checks {
            if let Some((index, v)) = vectors.iter().enumerate().find(|(_, v)| v.len() != expected) {
                return Err(NetError::DimensionMismatch {
                    kind,
                    index,
                    expected,
                    actual: v.len(),
                });
            }
        }

        Ok(())
    }
}
