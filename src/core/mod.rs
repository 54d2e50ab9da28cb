pub mod agents;
pub mod errors;
pub mod execution;
pub mod message_bus;
pub mod ontology;
pub mod report;
pub mod session;
pub mod types;

#[cfg(test)]
mod tests;
