use thiserror::Error;

/// Initialization failures surfaced by the frontends.
///
/// There is no recovery path: if the render surface or GPU handles are
/// absent at startup the effect simply does not render.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("render surface unavailable: {0}")]
    Surface(String),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("GPU device request failed: {0}")]
    Device(String),
}
