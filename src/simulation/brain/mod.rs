//! Neural network implementation for creature deciders.
//!
//! A [`Net`] is a fixed-topology network with one hidden layer of tanh
//! neurons and linear outputs. Networks are never changed in place: mutation
//! and crossover always build a new value.

use std::fmt;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use super::entropy::Entropy;
use super::error::{Result, SimError};

pub mod neuron;

pub use neuron::Neuron;

/// Input, hidden and output counts of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetShape {
    /// Number of network inputs.
    pub inputs: usize,
    /// Number of hidden neurons.
    pub hidden: usize,
    /// Number of network outputs.
    pub outputs: usize,
}

impl fmt::Display for NetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.inputs, self.hidden, self.outputs)
    }
}

/// A single-hidden-layer feed-forward network.
///
/// Each hidden neuron computes `tanh(w_in · inputs)`; output `k` is the sum of
/// every hidden activation times that neuron's `k`-th output weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NetSnapshot", into = "NetSnapshot")]
pub struct Net {
    input_count: usize,
    output_count: usize,
    hidden: Vec<Neuron>,
}

impl Net {
    /// Builds a network from explicit neurons, checking every weight vector
    /// against the declared input and output counts.
    pub fn new(input_count: usize, output_count: usize, hidden: Vec<Neuron>) -> Result<Self> {
        for (index, neuron) in hidden.iter().enumerate() {
            if neuron.input_len() != input_count {
                return Err(SimError::NeuronShape {
                    index,
                    layer: "input",
                    expected: input_count,
                    actual: neuron.input_len(),
                });
            }
            if neuron.output_len() != output_count {
                return Err(SimError::NeuronShape {
                    index,
                    layer: "output",
                    expected: output_count,
                    actual: neuron.output_len(),
                });
            }
        }

        Ok(Self {
            input_count,
            output_count,
            hidden,
        })
    }

    /// Creates a network with every weight drawn from `[-scale, scale)`.
    pub fn new_random<E: Entropy>(shape: NetShape, scale: f64, entropy: &mut E) -> Self {
        let hidden = (0..shape.hidden)
            .map(|_| Neuron::new_random(shape.inputs, shape.outputs, scale, entropy))
            .collect();

        Self {
            input_count: shape.inputs,
            output_count: shape.outputs,
            hidden,
        }
    }

    /// Shape of this network.
    pub fn shape(&self) -> NetShape {
        NetShape {
            inputs: self.input_count,
            hidden: self.hidden.len(),
            outputs: self.output_count,
        }
    }

    /// Hidden neurons in index order.
    pub fn hidden(&self) -> &[Neuron] {
        &self.hidden
    }

    /// Runs a forward pass. Pure: the same weights and inputs always give the
    /// same outputs.
    pub fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        if inputs.len() != self.input_count {
            return Err(SimError::InputLength {
                expected: self.input_count,
                actual: inputs.len(),
            });
        }

        let inputs = ArrayView1::from(inputs);
        let mut outputs = Array1::<f64>::zeros(self.output_count);
        for neuron in &self.hidden {
            let activated = neuron.activate(inputs);
            outputs.scaled_add(activated, &neuron.weights_output());
        }

        Ok(outputs.to_vec())
    }

    /// Copy of this network with every weight perturbed by `[-rate, rate)`.
    pub fn mutated<E: Entropy>(&self, rate: f64, entropy: &mut E) -> Self {
        Self {
            input_count: self.input_count,
            output_count: self.output_count,
            hidden: self
                .hidden
                .iter()
                .map(|neuron| neuron.perturbed(rate, entropy))
                .collect(),
        }
    }

    /// Splices the first `hidden / 2` neurons of `first` with the remaining
    /// neurons of `second`, then perturbs every weight by `[-rate, rate)`.
    ///
    /// Both parents must have the same shape.
    pub fn crossover<E: Entropy>(
        first: &Net,
        second: &Net,
        rate: f64,
        entropy: &mut E,
    ) -> Result<Self> {
        if first.shape() != second.shape() {
            return Err(SimError::ShapeMismatch {
                left: first.shape(),
                right: second.shape(),
            });
        }

        let split = first.hidden.len() / 2;
        let hidden = first.hidden[..split]
            .iter()
            .chain(&second.hidden[split..])
            .map(|neuron| neuron.perturbed(rate, entropy))
            .collect();

        Ok(Self {
            input_count: first.input_count,
            output_count: first.output_count,
            hidden,
        })
    }

    /// Flattens all weights, neuron by neuron, inputs before outputs.
    pub fn to_flat_vector(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.hidden.len() * (self.input_count + self.output_count));
        for neuron in &self.hidden {
            flat.extend(neuron.weights_input().iter().copied());
            flat.extend(neuron.weights_output().iter().copied());
        }
        flat
    }
}

/// Serialized weights of one hidden neuron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronSnapshot {
    /// One weight per network input.
    pub weights_input: Vec<f64>,
    /// One weight per network output.
    pub weights_output: Vec<f64>,
}

/// Serialized form of a [`Net`]. The activation function is not stored; it is
/// always tanh on reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetSnapshot {
    /// Number of network inputs.
    pub input_count: usize,
    /// Number of hidden neurons.
    pub hidden_count: usize,
    /// Number of network outputs.
    pub output_count: usize,
    /// Hidden neurons in index order.
    pub hidden: Vec<NeuronSnapshot>,
}

impl From<Net> for NetSnapshot {
    fn from(net: Net) -> Self {
        Self {
            input_count: net.input_count,
            hidden_count: net.hidden.len(),
            output_count: net.output_count,
            hidden: net
                .hidden
                .iter()
                .map(|neuron| NeuronSnapshot {
                    weights_input: neuron.weights_input().to_vec(),
                    weights_output: neuron.weights_output().to_vec(),
                })
                .collect(),
        }
    }
}

impl TryFrom<NetSnapshot> for Net {
    type Error = SimError;

    fn try_from(snapshot: NetSnapshot) -> Result<Self> {
        if snapshot.hidden.len() != snapshot.hidden_count {
            return Err(SimError::HiddenCount {
                declared: snapshot.hidden_count,
                actual: snapshot.hidden.len(),
            });
        }

        let hidden = snapshot
            .hidden
            .into_iter()
            .map(|neuron| Neuron::new(neuron.weights_input, neuron.weights_output))
            .collect();

        Net::new(snapshot.input_count, snapshot.output_count, hidden)
    }
}
