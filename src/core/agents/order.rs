use rand::rngs::StdRng;
use rand::Rng;

use crate::core::ontology::names::iri_safe;
use crate::core::types::AgentId;

/// A completed purchase; orders are only ever appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: String,
    pub customer: AgentId,
    pub book: AgentId,
}

impl OrderRecord {
    pub fn new(id: String, customer: AgentId, book: AgentId) -> Self {
        Self { id, customer, book }
    }
}

/// Generate an order name from the shared RNG
///
/// The uuid is built from RNG bytes rather than `Uuid::new_v4()` so that a
/// seeded run produces the same order names every time.
pub fn next_order_id(customer_display: usize, title: &str, rng: &mut StdRng) -> String {
    let bytes: [u8; 16] = rng.gen();
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    iri_safe(&format!("Order_{}_{}_{}", customer_display, title, uuid.simple()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_order_ids_are_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            next_order_id(1, "Jane Eyre", &mut a),
            next_order_id(1, "Jane Eyre", &mut b)
        );
    }

    #[test]
    fn test_order_ids_are_distinct_and_safe() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = next_order_id(3, "Lord of the Flies", &mut rng);
        let second = next_order_id(3, "Lord of the Flies", &mut rng);
        assert_ne!(first, second);
        assert!(first.starts_with("Order_3_Lord_of_the_Flies_"));
        assert!(first.chars().all(|c| c.is_alphanumeric() || c == '_'));
    }
}
