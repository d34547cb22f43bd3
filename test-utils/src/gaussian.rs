use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal, NormalError};

/// Functionality to add some Gaussian noise.
#[derive(Clone, Debug)]
pub struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev.
    /// Returns an error for a negative or non-finite stdev.
    pub fn new(mean: f64, stdev: f64) -> Result<Self, NormalError> {
        Ok(Self {
            normal: Normal::new(mean, stdev)?,
        })
    }

    /// Sample from distribution
    pub fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    /// Adds noise to sample
    pub fn add_noise(&self, rng: &mut StdRng, data: f32) -> f32 {
        (f64::from(data) + self.draw_sample(rng)) as f32
    }

    pub fn add_noise_vec(&self, rng: &mut StdRng, data: &[f32]) -> Vec<f32> {
        data.iter().map(|d| self.add_noise(rng, *d)).collect()
    }
}
