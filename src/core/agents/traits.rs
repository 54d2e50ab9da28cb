use rand::rngs::StdRng;

use crate::core::agents::book::BookRecord;
use crate::core::agents::order::OrderRecord;
use crate::core::execution::config::SimulationConfig;
use crate::core::message_bus::MessageBus;
use crate::core::types::AgentId;

/// Shared store state lent to the agent currently being activated
///
/// Only one agent holds this at a time, which is what makes the
/// sequential activation loop safe without locks.
pub struct StoreContext<'a> {
    pub books: &'a mut [BookRecord],
    pub orders: &'a mut Vec<OrderRecord>,
    pub bus: &'a mut MessageBus,
    pub rng: &'a mut StdRng,
    pub config: &'a SimulationConfig,
    /// Tick the current pass belongs to
    pub tick: u64,
}

/// One completed restock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restock {
    pub book: AgentId,
    pub amount: u32,
    pub new_quantity: u32,
}

/// What an activation did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Idle,
    Purchased { book: AgentId, order_id: String },
    Restocked(Vec<Restock>),
}

impl StepOutcome {
    /// Number of bus messages the activation published
    pub fn message_count(&self) -> usize {
        match self {
            StepOutcome::Idle => 0,
            StepOutcome::Purchased { .. } => 1,
            StepOutcome::Restocked(restocks) => restocks.len(),
        }
    }
}

/// Behaviour trait for active agents
///
/// Each call runs to completion against the borrowed store before the
/// scheduler activates the next agent.
pub trait Agent {
    fn agent_id(&self) -> &AgentId;

    /// Execute one activation and report what changed
    fn step(&mut self, ctx: &mut StoreContext<'_>) -> StepOutcome;
}
