//! Neural network controllers steering the agents.

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Distribution, Normal, Uniform};
use rand::Rng;

/// Standard deviation of the Gaussian noise added by mutation.
pub const MUTATION_STD: f32 = 0.1;

/// A two-layer feed-forward network with tanh activation on both layers.
///
/// The four matrices are the whole genotype. Their shapes are fixed per
/// species at construction and never change over an individual's lifetime or
/// across generations, which keeps crossover between same-species parents
/// well-defined.
#[derive(Debug, Clone)]
pub struct Brain {
    /// Input-to-hidden weights (`hidden_size` × `input_size`).
    pub w_ih: Array2<f32>,
    /// Hidden-to-output weights (`output_size` × `hidden_size`).
    pub w_ho: Array2<f32>,
    /// Hidden layer biases (`hidden_size`).
    pub b_h: Array1<f32>,
    /// Output layer biases (`output_size`).
    pub b_o: Array1<f32>,
}

impl Brain {
    /// Creates a controller with weights and biases uniform in [-1, 1).
    ///
    /// Zero-sized layers are a configuration error and abort.
    pub fn new_random(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut impl Rng,
    ) -> Self {
        assert!(
            input_size > 0 && hidden_size > 0 && output_size > 0,
            "controller layers must be non-empty"
        );
        Self {
            w_ih: Array2::random_using((hidden_size, input_size), Uniform::new(-1., 1.), rng),
            w_ho: Array2::random_using((output_size, hidden_size), Uniform::new(-1., 1.), rng),
            b_h: Array1::random_using(hidden_size, Uniform::new(-1., 1.), rng),
            b_o: Array1::random_using(output_size, Uniform::new(-1., 1.), rng),
        }
    }

    /// Performs a forward pass. Every output component lies in (-1, 1).
    ///
    /// The input length must match [`Self::input_size`]; a mismatch is a
    /// construction-time defect and aborts.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        assert_eq!(
            inputs.len(),
            self.input_size(),
            "sensor vector length does not match controller input size"
        );

        let mut hidden = self.w_ih.dot(inputs);
        hidden += &self.b_h;
        hidden.mapv_inplace(f32::tanh);

        let mut output = self.w_ho.dot(&hidden);
        output += &self.b_o;
        output.mapv_inplace(f32::tanh);
        output
    }

    /// Perturbs every element independently: with probability `rate` it gains
    /// Gaussian noise with standard deviation [`MUTATION_STD`].
    ///
    /// Weights are never clamped, so magnitudes can drift over generations.
    pub fn mutate(&mut self, rate: f32, rng: &mut impl Rng) {
        let noise = Normal::new(0.0, MUTATION_STD).expect("mutation noise parameters are valid");
        let rate = f64::from(rate);

        for matrix in [&mut self.w_ih, &mut self.w_ho] {
            for w in matrix.iter_mut() {
                if rng.gen_bool(rate) {
                    *w += noise.sample(rng);
                }
            }
        }
        for vector in [&mut self.b_h, &mut self.b_o] {
            for b in vector.iter_mut() {
                if rng.gen_bool(rate) {
                    *b += noise.sample(rng);
                }
            }
        }
    }

    /// Builds a child by picking, independently for each of the four
    /// matrices, the whole matrix from either parent with equal probability.
    ///
    /// Matrices never mix element-wise; the granularity is the matrix.
    pub fn crossover(parent1: &Brain, parent2: &Brain, rng: &mut impl Rng) -> Self {
        Self {
            w_ih: if rng.gen_bool(0.5) {
                parent1.w_ih.clone()
            } else {
                parent2.w_ih.clone()
            },
            w_ho: if rng.gen_bool(0.5) {
                parent1.w_ho.clone()
            } else {
                parent2.w_ho.clone()
            },
            b_h: if rng.gen_bool(0.5) {
                parent1.b_h.clone()
            } else {
                parent2.b_h.clone()
            },
            b_o: if rng.gen_bool(0.5) {
                parent1.b_o.clone()
            } else {
                parent2.b_o.clone()
            },
        }
    }

    /// Sensor vector length this controller accepts.
    pub fn input_size(&self) -> usize {
        self.w_ih.ncols()
    }

    /// Hidden layer width.
    pub fn hidden_size(&self) -> usize {
        self.w_ih.nrows()
    }

    /// Output vector length.
    pub fn output_size(&self) -> usize {
        self.w_ho.nrows()
    }
}
