//! Trains a small network on synthetic Gaussian blobs and prints its metrics.
//! Per-epoch progress is logged at info level.

use anyhow::Result;
use hiddennet::{Model, ModelHyperparameters};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::info;

const CENTERS: [[f64; 2]; 3] = [[2.0, 0.0], [-1.0, 1.8], [-1.0, -1.8]];
const SAMPLES_PER_CLASS: usize = 200;
const VALIDATION_SHARE: usize = 5;

fn blobs(rng: &mut StdRng) -> Result<Vec<(Array1<f64>, usize)>> {
    let noise = Normal::new(0.0, 0.6)?;
    let mut samples = Vec::with_capacity(CENTERS.len() * SAMPLES_PER_CLASS);

    for _ in 0..SAMPLES_PER_CLASS {
        for (class, center) in CENTERS.iter().enumerate() {
            let point = Array1::from_shape_fn(2, |d| center[d] + noise.sample(rng));
            samples.push((point, class));
        }
    }

    Ok(samples)
}

fn one_hot(class: usize) -> Array1<f64> {
    let mut v = Array1::zeros(CENTERS.len());
    v[class] = 1.0;
    v
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(7);
    let samples = blobs(&mut rng)?;

    let (mut x_train, mut y_train, mut x_val, mut y_val) = (vec![], vec![], vec![], vec![]);
    for (i, (x, class)) in samples.into_iter().enumerate() {
        if i % VALIDATION_SHARE == 0 {
            x_val.push(x);
            y_val.push(one_hot(class));
        } else {
            x_train.push(x);
            y_train.push(one_hot(class));
        }
    }
    info!(train = x_train.len(), validation = x_val.len(), "generated blobs");

    let hyperparameters = ModelHyperparameters {
        learning_rate: 0.5,
        epochs: 20,
        seed: Some(42),
    };
    let mut model = Model::new([2, 16, CENTERS.len()], hyperparameters)?;
    model.train(&x_train, &y_train, &x_val, &y_val)?;

    let metrics = model.compute_metrics(&x_val, &y_val)?;
    let (_, misclassified) = model.get_properly_classified_and_misclassified_images(&x_val, &y_val)?;

    println!("{}", metrics.report);
    println!("Confusion matrix (labels {:?}):\n{}", metrics.labels, metrics.confusion_matrix);
    println!(
        "Macro precision: {:.4}, macro recall: {:.4}, misclassified: {}",
        metrics.precision_macro,
        metrics.recall_macro,
        misclassified.len()
    );

    Ok(())
}
