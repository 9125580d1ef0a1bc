use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Configuration errors raised while populating the registry or rendering panels.
///
/// Every variant signals a programming or data mistake; none is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("series `{name}` is already registered")]
    DuplicateName { name: String },

    #[error("derived series `{name}` references missing input `{input}`")]
    MissingInput { name: String, input: String },

    #[error("unknown series `{name}`")]
    UnknownSeries { name: String },

    #[error("series registry is frozen; cannot write `{name}`")]
    RegistryFrozen { name: String },

    #[error("render target `{target}` already has a chart bound")]
    TargetAlreadyBound { target: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
