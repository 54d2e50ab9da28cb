use crate::core::errors::SimulationError;
use crate::core::execution::config::BookSpec;
use crate::core::ontology::names::book_individual_name;
use crate::core::types::AgentId;

/// Upper bound on copies of a single title
pub const MAX_STOCK: u32 = 50;

/// Stock-keeping entity for one title
///
/// Books take part in the activation roster but have no behaviour of
/// their own; customers and employees mutate them through the two
/// guarded operations below.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    id: AgentId,
    title: String,
    genre: String,
    author: Option<String>,
    price: f64,
    quantity: u32,
    individual: String,
}

impl BookRecord {
    /// Build a record from a validated spec
    pub fn new(id: AgentId, spec: &BookSpec) -> Result<Self, SimulationError> {
        spec.validate()?;
        let individual = book_individual_name(id.uid(), &spec.title);
        Ok(Self {
            id,
            title: spec.title.clone(),
            genre: spec.genre.clone(),
            author: spec.author.clone(),
            price: spec.price,
            quantity: spec.quantity,
            individual,
        })
    }

    /// Take `qty` copies off the shelf
    ///
    /// All or nothing: returns false and leaves the quantity untouched when
    /// fewer than `qty` copies remain.
    pub fn reduce_stock(&mut self, qty: u32) -> bool {
        if self.quantity >= qty {
            self.quantity -= qty;
            true
        } else {
            false
        }
    }

    /// Add `qty` copies, clamped to [`MAX_STOCK`]. Returns the new quantity.
    pub fn restock(&mut self, qty: u32) -> u32 {
        self.quantity = self.quantity.saturating_add(qty).min(MAX_STOCK);
        self.quantity
    }

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Name of the matching individual in the knowledge graph
    pub fn individual_name(&self) -> &str {
        &self.individual
    }
}
