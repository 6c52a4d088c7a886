//! Hidden neuron of a single-hidden-layer network.

use ndarray::{Array1, ArrayView1};

use super::super::entropy::Entropy;

/// One hidden neuron: a weight per network input and a weight per network
/// output. The activation is always [`f64::tanh`].
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights_input: Array1<f64>,
    weights_output: Array1<f64>,
}

impl Neuron {
    /// Creates a neuron from explicit weights.
    pub fn new(weights_input: Vec<f64>, weights_output: Vec<f64>) -> Self {
        Self {
            weights_input: Array1::from_vec(weights_input),
            weights_output: Array1::from_vec(weights_output),
        }
    }

    /// Creates a neuron with weights drawn uniformly from `[-scale, scale)`.
    pub fn new_random<E: Entropy>(
        input_count: usize,
        output_count: usize,
        scale: f64,
        entropy: &mut E,
    ) -> Self {
        Self {
            weights_input: Array1::from_shape_fn(input_count, |_| entropy.symmetric(scale)),
            weights_output: Array1::from_shape_fn(output_count, |_| entropy.symmetric(scale)),
        }
    }

    /// Weights applied to the network inputs.
    pub fn weights_input(&self) -> ArrayView1<'_, f64> {
        self.weights_input.view()
    }

    /// Weights applied to this neuron's activation for each output.
    pub fn weights_output(&self) -> ArrayView1<'_, f64> {
        self.weights_output.view()
    }

    /// Weighted input sum passed through tanh.
    #[inline]
    pub fn activate(&self, inputs: ArrayView1<'_, f64>) -> f64 {
        self.weights_input.dot(&inputs).tanh()
    }

    /// Copy of this neuron with every weight shifted by a uniform offset in
    /// `[-rate, rate)`.
    pub fn perturbed<E: Entropy>(&self, rate: f64, entropy: &mut E) -> Self {
        Self {
            weights_input: self.weights_input.mapv(|w| w + entropy.symmetric(rate)),
            weights_output: self.weights_output.mapv(|w| w + entropy.symmetric(rate)),
        }
    }

    pub(super) fn input_len(&self) -> usize {
        self.weights_input.len()
    }

    pub(super) fn output_len(&self) -> usize {
        self.weights_output.len()
    }
}
