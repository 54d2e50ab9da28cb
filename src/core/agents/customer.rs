use log::debug;
use rand::seq::SliceRandom;
use rand_distr::{Bernoulli, Distribution};

use crate::core::agents::order::{next_order_id, OrderRecord};
use crate::core::agents::traits::{Agent, StepOutcome, StoreContext};
use crate::core::errors::SimulationError;
use crate::core::ontology::names::iri_safe;
use crate::core::types::AgentId;

/// Customer agent that buys a random in-stock book on some steps
#[derive(Debug, Clone)]
pub struct CustomerActor {
    id: AgentId,
    purchase_decision: Bernoulli,
    books_purchased: Vec<String>,
}

impl CustomerActor {
    /// Create a customer who tries to buy with the given probability each step
    pub fn new(id: AgentId, purchase_probability: f64) -> Result<Self, SimulationError> {
        let purchase_decision = Bernoulli::new(purchase_probability).map_err(|e| {
            SimulationError::InvalidConfig(format!(
                "purchase probability {}: {}",
                purchase_probability, e
            ))
        })?;
        Ok(Self {
            id,
            purchase_decision,
            books_purchased: Vec::new(),
        })
    }

    /// Titles bought so far, in purchase order
    pub fn books_purchased(&self) -> &[String] {
        &self.books_purchased
    }

    pub fn display_id(&self) -> usize {
        self.id.display_id()
    }

    pub fn label(&self) -> String {
        format!("Customer {}", self.display_id())
    }

    pub fn individual_name(&self) -> String {
        iri_safe(&format!("Customer_{}", self.display_id()))
    }
}

impl Agent for CustomerActor {
    fn agent_id(&self) -> &AgentId {
        &self.id
    }

    fn step(&mut self, ctx: &mut StoreContext<'_>) -> StepOutcome {
        if !self.purchase_decision.sample(ctx.rng) {
            return StepOutcome::Idle;
        }

        let available: Vec<usize> = ctx
            .books
            .iter()
            .enumerate()
            .filter(|(_, book)| book.quantity() > 0)
            .map(|(index, _)| index)
            .collect();

        let Some(&index) = available.choose(ctx.rng) else {
            debug!("[Customer {}] Nothing in stock", self.display_id());
            return StepOutcome::Idle;
        };

        let book = &mut ctx.books[index];
        if !book.reduce_stock(1) {
            debug!("[Customer {}] {} sold out before purchase", self.display_id(), book.title());
            return StepOutcome::Idle;
        }
        let title = book.title().to_string();
        let book_id = book.id().clone();

        self.books_purchased.push(title.clone());

        let order_id = next_order_id(self.display_id(), &title, ctx.rng);
        ctx.orders
            .push(OrderRecord::new(order_id.clone(), self.id.clone(), book_id.clone()));

        let msg = format!(
            "Customer {} purchased {} (Order: {})",
            self.display_id(),
            title,
            order_id
        );
        debug!("{}", msg);
        ctx.bus.publish(&msg, Some(ctx.tick));

        StepOutcome::Purchased {
            book: book_id,
            order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::agents::book::BookRecord;
    use crate::core::execution::config::{BookSpec, SimulationConfig};
    use crate::core::message_bus::MessageBus;
    use crate::core::types::AgentKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn books(quantities: &[u32]) -> Vec<BookRecord> {
        quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| {
                let id = AgentId::new(i as u64, AgentKind::Book, i);
                BookRecord::new(id, &BookSpec::new(&format!("Book {}", i), "Classic", 5.0, q)).unwrap()
            })
            .collect()
    }

    fn customer(probability: f64) -> CustomerActor {
        CustomerActor::new(AgentId::new(100, AgentKind::Customer, 0), probability).unwrap()
    }

    #[test]
    fn test_always_buying_customer_purchases_only_book() {
        let mut books = books(&[1]);
        let mut orders = Vec::new();
        let mut bus = MessageBus::new();
        let mut rng = StdRng::seed_from_u64(5);
        let config = SimulationConfig::new();
        let mut ctx = StoreContext {
            books: &mut books,
            orders: &mut orders,
            bus: &mut bus,
            rng: &mut rng,
            config: &config,
            tick: 0,
        };

        let mut c = customer(1.0);
        let outcome = c.step(&mut ctx);

        assert!(matches!(outcome, StepOutcome::Purchased { .. }));
        assert_eq!(books[0].quantity(), 0);
        assert_eq!(c.books_purchased(), &["Book 0".to_string()]);
        assert_eq!(orders.len(), 1);
        assert_eq!(bus.len(), 1);
        assert!(bus.messages()[0].starts_with("[Step 0] Customer 1 purchased Book 0 (Order: Order_1_Book_0_"));
    }

    #[test]
    fn test_never_buying_customer_is_idle() {
        let mut books = books(&[3, 3]);
        let mut orders = Vec::new();
        let mut bus = MessageBus::new();
        let mut rng = StdRng::seed_from_u64(5);
        let config = SimulationConfig::new();
        let mut ctx = StoreContext {
            books: &mut books,
            orders: &mut orders,
            bus: &mut bus,
            rng: &mut rng,
            config: &config,
            tick: 0,
        };

        let mut c = customer(0.0);
        for _ in 0..20 {
            assert_eq!(c.step(&mut ctx), StepOutcome::Idle);
        }
        assert!(bus.is_empty());
    }

    #[test]
    fn test_empty_shelves_are_a_no_op() {
        let mut books = books(&[0, 0, 0]);
        let mut orders = Vec::new();
        let mut bus = MessageBus::new();
        let mut rng = StdRng::seed_from_u64(5);
        let config = SimulationConfig::new();
        let mut ctx = StoreContext {
            books: &mut books,
            orders: &mut orders,
            bus: &mut bus,
            rng: &mut rng,
            config: &config,
            tick: 4,
        };

        let mut c = customer(1.0);
        assert_eq!(c.step(&mut ctx), StepOutcome::Idle);
        assert!(orders.is_empty());
        assert!(c.books_purchased().is_empty());
    }

    #[test]
    fn test_only_in_stock_books_are_chosen() {
        let mut books = books(&[0, 50, 0]);
        let mut orders = Vec::new();
        let mut bus = MessageBus::new();
        let mut rng = StdRng::seed_from_u64(9);
        let config = SimulationConfig::new();
        let mut ctx = StoreContext {
            books: &mut books,
            orders: &mut orders,
            bus: &mut bus,
            rng: &mut rng,
            config: &config,
            tick: 0,
        };

        let mut c = customer(1.0);
        for _ in 0..10 {
            c.step(&mut ctx);
        }
        assert_eq!(books[1].quantity(), 40);
        assert!(orders.iter().all(|o| o.book.slot() == 1));
    }

    #[test]
    fn test_invalid_probability() {
        let id = AgentId::new(0, AgentKind::Customer, 0);
        assert!(CustomerActor::new(id, 2.0).is_err());
    }
}
