/// Errors that can occur while building, driving or exporting a simulation
#[derive(Debug)]
pub enum SimulationError {
    /// Configuration values outside their allowed range
    InvalidConfig(String),
    /// A book description that cannot be turned into a record
    InvalidBook(String),
    /// A graph relation or lookup referenced an unknown individual
    MissingIndividual(String),
    /// An activation referenced an agent that is not in the roster
    UnknownAgent(String),
    /// The session has no model yet
    NotInitialized,
    /// Writing an exported artifact failed
    Io(std::io::Error),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            SimulationError::InvalidBook(msg) => write!(f, "Invalid book: {}", msg),
            SimulationError::MissingIndividual(name) => {
                write!(f, "Individual '{}' not found in knowledge graph", name)
            }
            SimulationError::UnknownAgent(id) => write!(f, "Agent '{}' not found", id),
            SimulationError::NotInitialized => {
                write!(f, "Bookstore has not been initialized")
            }
            SimulationError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::Io(err)
    }
}
