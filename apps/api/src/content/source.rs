use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::content::models::PortfolioData;
use crate::content::store::ContentStore;
use crate::content::validation::ValidationError;

/// The dataset shipped inside the binary.
pub const BUNDLED_CONTENT: &str = include_str!("../../data/portfolio.json");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Where the portfolio dataset comes from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Bundled,
    File(PathBuf),
}

impl ContentSource {
    /// Reads and parses the dataset without validating it.
    pub fn read(&self) -> Result<PortfolioData, SourceError> {
        match self {
            ContentSource::Bundled => bundled(),
            ContentSource::File(path) => from_path(path),
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Bundled => f.write_str("bundled"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn from_json_str(text: &str) -> Result<PortfolioData, SourceError> {
    Ok(serde_json::from_str(text)?)
}

pub fn from_path(path: &Path) -> Result<PortfolioData, SourceError> {
    debug!("Reading portfolio content from {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&text)
}

pub fn bundled() -> Result<PortfolioData, SourceError> {
    from_json_str(BUNDLED_CONTENT)
}

/// Reads, parses and validates the dataset in one step.
pub fn load_store(source: &ContentSource) -> Result<ContentStore, SourceError> {
    info!("Loading portfolio content ({source})");
    let data = source.read()?;
    Ok(ContentStore::load(data)?)
}
