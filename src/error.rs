/// Engine-level errors
///
/// Anything raised here is either an input-contract violation at the engine
/// boundary or a collaborator failure surfaced through the catalog seam.
/// Degenerate-but-well-formed data (empty catalog, empty preference signal)
/// is never an error; it resolves to empty/zero outputs.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Invalid preference signal: {0}")]
    InvalidPreference(String),

    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog provider error: {0}")]
    Catalog(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
