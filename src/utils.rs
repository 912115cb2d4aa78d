use ndarray::{Array1, Array2, Axis};

/// Outer product `a ⊗ b`, shaped `(a.len(), b.len())`
pub fn outer_product(a: &Array1<f64>, b: &Array1<f64>) -> Array2<f64> {
    let column = a.view().insert_axis(Axis(1));
    let row = b.view().insert_axis(Axis(0));

    column.dot(&row)
}

/// Index of the largest entry; ties resolve to the first one.
/// Returns 0 for an empty vector.
pub fn argmax(values: &Array1<f64>) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}
