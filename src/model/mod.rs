use thiserror::Error;

pub mod coordinate;
pub mod project;
pub mod workspace;

pub use coordinate::Coordinate;
pub use project::{Project, ProjectId};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading workspace file: {0}")]
    IO(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Malformed coordinate `{0}`, expected group:artifact:version")]
    MalformedCoordinate(String),
    #[error("Project {0} is declared more than once in the workspace file")]
    DuplicateProject(Coordinate),
}
