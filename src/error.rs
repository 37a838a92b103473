use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GameError {
    /// Direction requested between two rects sharing a centre.
    DegenerateGeometry { at: (i32, i32) },
    /// An image name the loader does not know.
    AssetNotFound { name: String },
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry { at } => write!(
                f,
                "cannot compute a direction between coincident centres at ({}, {})",
                at.0, at.1
            ),
            Self::AssetNotFound { name } => write!(f, "image asset '{name}' not found"),
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
