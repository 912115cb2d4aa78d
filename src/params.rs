use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

/// Identifies one of the two weight matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKey {
    W1,
    W2,
}

impl WeightKey {
    pub const ALL: [WeightKey; 2] = [WeightKey::W1, WeightKey::W2];
}

/// Weight deltas produced by one backward pass, one per weight matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub w1: Array2<f64>,
    pub w2: Array2<f64>,
}

impl Gradients {
    pub fn get(&self, key: WeightKey) -> &Array2<f64> {
        match key {
            WeightKey::W1 => &self.w1,
            WeightKey::W2 => &self.w2,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeightKey, &Array2<f64>)> {
        WeightKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Owns the weights of the input→hidden and hidden→output layers.
///
/// Neither layer has a bias. `w1` is `(hidden, input)` and `w2` is
/// `(output, hidden)`, so a forward step is a plain `weights.dot(input)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    w1: Array2<f64>,
    w2: Array2<f64>,
}

impl ParameterStore {
    /// Draws every weight from a standard normal and divides it by the square
    /// root of its layer's output size.
    ///
    /// # Arguments
    ///
    /// * `sizes` - `[input, hidden, output]` unit counts, all non-zero
    /// * `rng` - Source of randomness; a seeded one makes training reproducible
    pub fn initialize<R: Rng + ?Sized>(sizes: [usize; 3], rng: &mut R) -> Self {
        let [input, hidden, output] = sizes;

        ParameterStore {
            w1: scaled_normal(hidden, input, rng),
            w2: scaled_normal(output, hidden, rng),
        }
    }

    /// Builds a store from explicit matrices whose shapes must chain
    pub fn from_weights(w1: Array2<f64>, w2: Array2<f64>) -> Self {
        assert_eq!(
            w2.ncols(),
            w1.nrows(),
            "W2 columns must equal the hidden size of W1"
        );
        ParameterStore { w1, w2 }
    }

    /// `weight -= learning_rate * gradient` for each key
    pub fn update(&mut self, gradients: &Gradients, learning_rate: f64) {
        for (key, gradient) in gradients.iter() {
            let weights = self.get_mut(key);
            assert_eq!(
                weights.dim(),
                gradient.dim(),
                "Gradient shape does not match {:?}",
                key
            );
            weights.scaled_add(-learning_rate, gradient);
        }
    }

    pub fn get(&self, key: WeightKey) -> &Array2<f64> {
        match key {
            WeightKey::W1 => &self.w1,
            WeightKey::W2 => &self.w2,
        }
    }

    fn get_mut(&mut self, key: WeightKey) -> &mut Array2<f64> {
        match key {
            WeightKey::W1 => &mut self.w1,
            WeightKey::W2 => &mut self.w2,
        }
    }

    pub fn w1(&self) -> &Array2<f64> {
        &self.w1
    }

    pub fn w2(&self) -> &Array2<f64> {
        &self.w2
    }

    /// `[input, hidden, output]`
    pub fn sizes(&self) -> [usize; 3] {
        [self.w1.ncols(), self.w1.nrows(), self.w2.nrows()]
    }

    pub fn parameter_count(&self) -> usize {
        self.w1.len() + self.w2.len()
    }
}

fn scaled_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Array2<f64> {
    let scale = (rows as f64).sqrt();
    Array2::from_shape_fn((rows, cols), |_| rng.sample::<f64, _>(StandardNormal) / scale)
}
