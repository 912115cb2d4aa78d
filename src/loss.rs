use ndarray::Array1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Loss {
    MeanSquaredError,
}

impl Loss {
    pub fn calculate(&self, prediction: &Array1<f64>, target: &Array1<f64>) -> f64 {
        match self {
            Loss::MeanSquaredError => {
                // mean((prediction - target)^2)
                let diff = prediction - target;
                diff.mapv(|d| d * d).sum() / prediction.len() as f64
            }
        }
    }

    /// Derivative of the loss with respect to the prediction
    pub fn gradient(&self, prediction: &Array1<f64>, target: &Array1<f64>) -> Array1<f64> {
        match self {
            Loss::MeanSquaredError => {
                let n = prediction.len() as f64;
                (prediction - target) * (2.0 / n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let loss = Loss::MeanSquaredError;

        assert_eq!(loss.calculate(&array![1.0, 0.0], &array![1.0, 0.0]), 0.0);
        assert!((loss.calculate(&array![0.5, 0.5], &array![1.0, 0.0]) - 0.25).abs() < 1e-12);
        assert!((loss.calculate(&array![0.0, 1.0], &array![1.0, 0.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_squared_error_gradient() {
        let grad = Loss::MeanSquaredError.gradient(&array![0.75, 0.25], &array![1.0, 0.0]);

        // 2 / N * (p - t) with N = 2
        assert!((grad[0] + 0.25).abs() < 1e-12);
        assert!((grad[1] - 0.25).abs() < 1e-12);
    }
}
