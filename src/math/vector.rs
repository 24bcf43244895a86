use rand::Rng;

/// Constant input appended to every example so the neuron can learn an offset.
pub const BIAS_INPUT: f64 = 1.0;

/// Copy of `inputs` with the bias input appended.
pub fn with_bias(inputs: &[f64]) -> Vec<f64> {
    let mut biased = Vec::with_capacity(inputs.len() + 1);
    biased.extend_from_slice(inputs);
    biased.push(BIAS_INPUT);
    biased
}

/// `len` independent samples, uniform on [-1, 1).
pub fn uniform<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()
}

/// Dot product of two equal-length vectors, taken position by position.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dot product of vectors with different lengths");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Returns `base + scale * direction` as a fresh vector.
///
/// Every output element is computed from the unmodified `base`, so the
/// update is simultaneous across all positions.
pub fn scaled_add(base: &[f64], direction: &[f64], scale: f64) -> Vec<f64> {
    debug_assert_eq!(base.len(), direction.len());
    base.iter().zip(direction.iter())
        .map(|(b, d)| b + scale * d)
        .collect()
}
