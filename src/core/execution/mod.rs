pub mod config;
pub mod scheduler;
pub mod simulation_engine;

pub use config::{default_catalog, BookSpec, SimulationConfig};
pub use scheduler::{Scheduler, SchedulerState};
pub use simulation_engine::{BookstoreModel, SimulationObserver};
