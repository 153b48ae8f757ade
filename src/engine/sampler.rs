use rand::Rng;

use crate::geometry::Point3;

/// Sample `count` points uniformly from the cube [-1, 1]^3
pub fn sample_cube<R: Rng>(rng: &mut R, count: usize) -> Vec<Point3> {
    (0..count)
        .map(|_| {
            Point3::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
            )
        })
        .collect()
}
