use log::debug;

use crate::core::agents::traits::{Agent, Restock, StepOutcome, StoreContext};
use crate::core::ontology::names::iri_safe;
use crate::core::types::AgentId;

/// Employee agent that tops up low-stock books every step
#[derive(Debug, Clone)]
pub struct EmployeeActor {
    id: AgentId,
}

impl EmployeeActor {
    pub fn new(id: AgentId) -> Self {
        Self { id }
    }

    pub fn display_id(&self) -> usize {
        self.id.display_id()
    }

    pub fn individual_name(&self) -> String {
        iri_safe(&format!("Employee_{}", self.display_id()))
    }
}

impl Agent for EmployeeActor {
    fn agent_id(&self) -> &AgentId {
        &self.id
    }

    /// Scan the whole catalogue, restocking anything below the threshold
    /// up to the target.
    fn step(&mut self, ctx: &mut StoreContext<'_>) -> StepOutcome {
        let threshold = ctx.config.restock_threshold;
        let target = ctx.config.restock_target;
        let mut restocks = Vec::new();

        for book in ctx.books.iter_mut() {
            let quantity = book.quantity();
            if quantity >= threshold {
                continue;
            }

            let deficit = target.saturating_sub(quantity);
            if deficit == 0 {
                continue;
            }

            let new_quantity = book.restock(deficit);
            let msg = format!(
                "Employee {} restocked {} by {}. New qty: {}",
                self.display_id(),
                book.title(),
                deficit,
                new_quantity
            );
            debug!("{}", msg);
            ctx.bus.publish(&msg, Some(ctx.tick));

            restocks.push(Restock {
                book: book.id().clone(),
                amount: deficit,
                new_quantity,
            });
        }

        if restocks.is_empty() {
            StepOutcome::Idle
        } else {
            StepOutcome::Restocked(restocks)
        }
    }
}
