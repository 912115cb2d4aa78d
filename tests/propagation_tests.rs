use hiddennet::{backward, forward, Gradients, ParameterStore, WeightKey};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_input(rng: &mut StdRng, len: usize) -> Array1<f64> {
    Array1::from_shape_fn(len, |_| rng.random_range(-5.0..5.0))
}

#[test]
fn test_forward_output_is_a_distribution() {
    let mut rng = StdRng::seed_from_u64(11);

    for sizes in [[2, 3, 2], [4, 8, 3], [10, 5, 10], [1, 1, 1]] {
        let params = ParameterStore::initialize(sizes, &mut rng);

        for _ in 0..50 {
            let input = random_input(&mut rng, sizes[0]);
            let cache = forward(&params, &input);
            let output = cache.output();

            assert_eq!(output.len(), sizes[2]);
            assert!(output.iter().all(|&p| p >= 0.0));
            assert!(
                (output.sum() - 1.0).abs() < 1e-9,
                "output {:?} does not sum to 1",
                output
            );
        }
    }
}

#[test]
fn test_gradient_keys_and_shapes_match_parameters() {
    let mut rng = StdRng::seed_from_u64(5);

    for sizes in [[2, 3, 2], [6, 4, 3], [3, 7, 5]] {
        let params = ParameterStore::initialize(sizes, &mut rng);
        let input = random_input(&mut rng, sizes[0]);
        let mut target = Array1::zeros(sizes[2]);
        target[rng.random_range(0..sizes[2])] = 1.0;

        let cache = forward(&params, &input);
        let gradients: Gradients = backward(&params, &cache, &target);

        let keys: Vec<WeightKey> = gradients.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, WeightKey::ALL.to_vec());
        for (key, gradient) in gradients.iter() {
            assert_eq!(gradient.dim(), params.get(key).dim(), "shape mismatch for {:?}", key);
        }
    }
}

#[test]
fn test_backward_does_not_touch_parameters() {
    let mut rng = StdRng::seed_from_u64(8);
    let params = ParameterStore::initialize([3, 4, 2], &mut rng);
    let before = params.clone();

    let cache = forward(&params, &random_input(&mut rng, 3));
    let first = backward(&params, &cache, &Array1::from_vec(vec![0.0, 1.0]));
    let second = backward(&params, &cache, &Array1::from_vec(vec![0.0, 1.0]));

    assert_eq!(params, before);
    assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "Input size does not match layer's input size")]
fn test_forward_invalid_input_size() {
    let mut rng = StdRng::seed_from_u64(1);
    let params = ParameterStore::initialize([3, 2, 2], &mut rng);

    forward(&params, &Array1::from_vec(vec![1.0, 2.0]));
}

#[test]
#[should_panic(expected = "Target size does not match layer's output size")]
fn test_backward_invalid_target_size() {
    let mut rng = StdRng::seed_from_u64(1);
    let params = ParameterStore::initialize([3, 2, 2], &mut rng);
    let cache = forward(&params, &Array1::from_vec(vec![1.0, 2.0, 3.0]));

    backward(&params, &cache, &Array1::from_vec(vec![1.0, 0.0, 0.0]));
}
