use ndarray::Array1;

/// Enum representing the activation functions used by the network
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationType {
    Sigmoid,
    Softmax,
}

impl ActivationType {
    /// Applies the activation function to a pre-activation vector
    pub fn forward(&self, z: &Array1<f64>) -> Array1<f64> {
        match self {
            ActivationType::Sigmoid => sigmoid(z),
            ActivationType::Softmax => softmax(z),
        }
    }

    /// Computes the elementwise derivative with respect to the pre-activation
    pub fn derivative(&self, z: &Array1<f64>) -> Array1<f64> {
        match self {
            ActivationType::Sigmoid => sigmoid_derivative(z),
            ActivationType::Softmax => softmax_derivative(z),
        }
    }
}

pub fn sigmoid(z: &Array1<f64>) -> Array1<f64> {
    z.mapv(|x| 1.0 / (1.0 + (-x).exp()))
}

pub fn sigmoid_derivative(z: &Array1<f64>) -> Array1<f64> {
    sigmoid(z).mapv(|s| s * (1.0 - s))
}

/// Softmax shifted by the maximum entry so large inputs do not overflow
pub fn softmax(z: &Array1<f64>) -> Array1<f64> {
    let max = z.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x));
    let exps = z.mapv(|x| (x - max).exp());
    let sum = exps.sum();
    exps / sum
}

/// Diagonal of the softmax Jacobian only: `s * (1 - s)`.
pub fn softmax_derivative(z: &Array1<f64>) -> Array1<f64> {
    softmax(z).mapv(|s| s * (1.0 - s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_activation_functions() {
        let z = array![0.0, 2.0, -2.0];

        let s = ActivationType::Sigmoid.forward(&z);
        assert!((s[0] - 0.5).abs() < EPSILON);
        assert!((s[1] + s[2] - 1.0).abs() < EPSILON);

        let p = ActivationType::Softmax.forward(&z);
        assert!((p.sum() - 1.0).abs() < EPSILON);
        assert!(p[1] > p[0] && p[0] > p[2]);
    }

    #[test]
    fn test_activation_derivatives() {
        let z = array![0.0];
        assert!((ActivationType::Sigmoid.derivative(&z)[0] - 0.25).abs() < EPSILON);

        // Two equal logits give 0.5 each, so the diagonal term is 0.25
        let z = array![1.0, 1.0];
        let d = ActivationType::Softmax.derivative(&z);
        assert!((d[0] - 0.25).abs() < EPSILON);
        assert!((d[1] - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_softmax_is_stable_for_large_inputs() {
        let z = array![1000.0, 1000.0, 999.0];
        let p = softmax(&z);

        assert!(p.iter().all(|x| x.is_finite()));
        assert!((p.sum() - 1.0).abs() < 1e-9);
        assert!((p[0] - p[1]).abs() < EPSILON);
    }

    #[test]
    fn test_softmax_is_shift_invariant() {
        let a = softmax(&array![1.0, 2.0, 3.0]);
        let b = softmax(&array![-9.0, -8.0, -7.0]);

        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }
}
