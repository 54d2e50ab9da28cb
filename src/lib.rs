pub mod core;

// Re-export commonly used types
pub use crate::core::agents::{Agent, BookRecord, CustomerActor, EmployeeActor, OrderRecord, StepOutcome, MAX_STOCK};
pub use crate::core::errors::SimulationError;
pub use crate::core::execution::{BookSpec, BookstoreModel, SimulationConfig, SimulationObserver};
pub use crate::core::message_bus::MessageBus;
pub use crate::core::session::BookstoreSession;
pub use crate::core::types::{AgentId, AgentKind};
