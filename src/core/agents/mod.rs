pub mod book;
pub mod customer;
pub mod employee;
pub mod order;
pub mod traits;

pub use book::{BookRecord, MAX_STOCK};
pub use customer::CustomerActor;
pub use employee::EmployeeActor;
pub use order::OrderRecord;
pub use traits::{Agent, Restock, StepOutcome, StoreContext};
