mod error;
mod sampler;


pub use error::EngineError;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::geometry::{dist3, mean_point, Point3};

/// Default number of data points sampled on startup and reset
pub const DEFAULT_POINTS: usize = 60;

/// Default cluster count
pub const DEFAULT_K: usize = 3;

/// A centroid counts as moved when any single coordinate shifts by more
/// than this
pub const MOVE_TOLERANCE: f64 = 1e-6;

/// Stepwise K-Means engine over points in the cube [-1, 1]^3.
///
/// The engine never loops on its own: the caller drives Lloyd's algorithm
/// one step at a time through [`assign_step`](ClusterEngine::assign_step)
/// and [`update_step`](ClusterEngine::update_step), in any order.
pub struct ClusterEngine {
    /// Fixed data set; index is point identity. Replaced only by `reset`.
    points: Vec<Point3>,
    /// Current centroids, re-randomized on `set_k` and `reset`.
    centroids: Vec<Point3>,
    /// One entry per point: `None` until the first assignment step.
    assignments: Vec<Option<usize>>,
    rng: ChaCha8Rng,
}

impl ClusterEngine {
    /// Sample `n` points and `k` centroids uniformly in the cube.
    ///
    /// `n` and `k` are caller-validated positive integers; the engine
    /// assumes both are at least 1.
    pub fn new(n: usize, k: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let points = sampler::sample_cube(&mut rng, n);
        let centroids = sampler::sample_cube(&mut rng, k);
        Self {
            points,
            centroids,
            assignments: vec![None; n],
            rng,
        }
    }

    /// Replace the centroids with `k` fresh random ones and clear all
    /// assignments. Old assignment indices may not correspond under the new
    /// centroid set, so none survive. The data points are kept.
    pub fn set_k(&mut self, k: usize) {
        self.centroids = sampler::sample_cube(&mut self.rng, k);
        self.assignments = vec![None; self.points.len()];
    }

    /// Resample the data points (same count) and the centroids (same k),
    /// clearing all assignments.
    pub fn reset(&mut self) {
        let n = self.points.len();
        let k = self.centroids.len();
        self.points = sampler::sample_cube(&mut self.rng, n);
        self.centroids = sampler::sample_cube(&mut self.rng, k);
        self.assignments = vec![None; n];
    }

    /// Assign every point to its nearest centroid by Euclidean distance.
    ///
    /// Ties break to the lowest centroid index: the scan only replaces the
    /// current best on a strictly smaller distance. Deterministic given the
    /// current centroid set.
    pub fn assign_step(&mut self) -> Result<(), EngineError> {
        if self.centroids.is_empty() {
            return Err(EngineError::NoCentroids);
        }

        for (point, slot) in self.points.iter().zip(self.assignments.iter_mut()) {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (j, centroid) in self.centroids.iter().enumerate() {
                let d = dist3(point, centroid);
                if d < best_dist {
                    best_dist = d;
                    best = j;
                }
            }
            *slot = Some(best);
        }

        Ok(())
    }

    /// Move every centroid to the mean of its assigned points.
    ///
    /// A centroid with no assigned points stays exactly where it is, so it
    /// remains available for future reassignment and never collapses to
    /// NaN. Returns `true` when any centroid moved beyond
    /// [`MOVE_TOLERANCE`] on any coordinate; `false` is the convergence
    /// signal.
    pub fn update_step(&mut self) -> Result<bool, EngineError> {
        if self.centroids.is_empty() {
            return Err(EngineError::NoCentroids);
        }

        let mut changed = false;
        for j in 0..self.centroids.len() {
            let members: Vec<Point3> = self
                .points
                .iter()
                .zip(self.assignments.iter())
                .filter(|&(_, a)| *a == Some(j))
                .map(|(p, _)| *p)
                .collect();

            if members.is_empty() {
                continue;
            }

            let next = mean_point(&members);
            if !next.approx_eq(&self.centroids[j], MOVE_TOLERANCE) {
                changed = true;
            }
            self.centroids[j] = next;
        }

        Ok(changed)
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn centroids(&self) -> &[Point3] {
        &self.centroids
    }

    pub fn assignments(&self) -> &[Option<usize>] {
        &self.assignments
    }

    /// Current cluster count
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Number of data points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
