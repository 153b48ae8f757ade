// Public API exports
pub mod engine;
pub mod geometry;
pub mod view;

// Re-export main types for convenience
pub use engine::{ClusterEngine, EngineError, DEFAULT_K, DEFAULT_POINTS, MOVE_TOLERANCE};
pub use geometry::{dist3, mean_point, Point3};
pub use view::{ViewTransform, CAMERA_DISTANCE, FOCAL_SCALE};
