use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Step called with an empty centroid set; initialize or set_k first")]
    NoCentroids,
}
