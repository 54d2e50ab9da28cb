//! Read-through projection of the store into a knowledge graph.
//!
//! The books, actors and order ledger stay the only mutable state. A graph
//! is rebuilt from them whenever one is asked for, so the two views cannot
//! drift apart.

use log::debug;

use crate::core::agents::{BookRecord, CustomerActor, EmployeeActor, OrderRecord};
use crate::core::errors::SimulationError;
use crate::core::ontology::graph::{
    DataProperty, DataValue, KnowledgeGraph, ObjectProperty, OntologyClass,
};

/// Name of the single inventory individual every employee works at
pub const STORE_INVENTORY: &str = "StoreInventory";

/// Borrowed view of everything the projection reads
pub struct StoreView<'a> {
    pub books: &'a [BookRecord],
    pub customers: &'a [CustomerActor],
    pub employees: &'a [EmployeeActor],
    pub orders: &'a [OrderRecord],
}

/// Build the knowledge graph for the current store state
pub fn project(view: &StoreView<'_>) -> Result<KnowledgeGraph, SimulationError> {
    let mut graph = KnowledgeGraph::new();
    graph.add_individual(STORE_INVENTORY, OntologyClass::Inventory)?;

    for book in view.books {
        let name = book.individual_name();
        graph.add_individual(name, OntologyClass::Book)?;
        if let Some(author) = book.author() {
            graph.set_data(name, DataProperty::HasAuthor, DataValue::Text(author.to_string()))?;
        }
        graph.set_data(name, DataProperty::HasGenre, DataValue::Text(book.genre().to_string()))?;
        graph.set_data(name, DataProperty::HasPrice, DataValue::Decimal(book.price()))?;
        graph.set_data(
            name,
            DataProperty::AvailableQuantity,
            DataValue::Integer(i64::from(book.quantity())),
        )?;
    }

    for customer in view.customers {
        graph.add_individual(&customer.individual_name(), OntologyClass::Customer)?;
    }

    for employee in view.employees {
        let name = employee.individual_name();
        graph.add_individual(&name, OntologyClass::Employee)?;
        graph.relate(&name, ObjectProperty::WorksAt, STORE_INVENTORY)?;
    }

    for order in view.orders {
        let book = view
            .books
            .get(order.book.slot())
            .ok_or_else(|| SimulationError::UnknownAgent(order.book.to_string()))?;
        let customer = view
            .customers
            .get(order.customer.slot())
            .ok_or_else(|| SimulationError::UnknownAgent(order.customer.to_string()))?;

        graph.add_individual(&order.id, OntologyClass::Order)?;
        graph.relate(&order.id, ObjectProperty::Includes, book.individual_name())?;
        graph.relate(
            &customer.individual_name(),
            ObjectProperty::Purchases,
            book.individual_name(),
        )?;
    }

    debug!(
        "Projected {} individuals ({} books, {} orders)",
        graph.len(),
        view.books.len(),
        view.orders.len()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::execution::config::BookSpec;
    use crate::core::types::{AgentId, AgentKind};

    #[test]
    fn test_projection_mirrors_store() {
        let books = vec![
            BookRecord::new(
                AgentId::new(0, AgentKind::Book, 0),
                &BookSpec::new("Dune", "Science Fiction", 9.5, 3).with_author("Frank Herbert"),
            )
            .unwrap(),
            BookRecord::new(
                AgentId::new(1, AgentKind::Book, 1),
                &BookSpec::new("Emma", "Romance", 4.0, 0),
            )
            .unwrap(),
        ];
        let customer_id = AgentId::new(2, AgentKind::Customer, 0);
        let customers = vec![CustomerActor::new(customer_id.clone(), 0.6).unwrap()];
        let employees = vec![EmployeeActor::new(AgentId::new(3, AgentKind::Employee, 0))];
        let orders = vec![OrderRecord::new(
            "Order_1_Dune_x".to_string(),
            customer_id,
            books[0].id().clone(),
        )];

        let graph = project(&StoreView {
            books: &books,
            customers: &customers,
            employees: &employees,
            orders: &orders,
        })
        .unwrap();

        assert_eq!(graph.instances(OntologyClass::Book).count(), 2);
        assert_eq!(graph.quantity_of("Book_0_Dune"), 3);
        assert_eq!(graph.quantity_of("Book_1_Emma"), 0);

        let dune = graph.individual("Book_0_Dune").unwrap();
        assert_eq!(
            dune.data(DataProperty::HasAuthor).and_then(DataValue::as_text),
            Some("Frank Herbert")
        );

        let employee = graph.individual("Employee_1").unwrap();
        assert_eq!(employee.related(ObjectProperty::WorksAt), &[STORE_INVENTORY.to_string()]);

        let order = graph.individual("Order_1_Dune_x").unwrap();
        assert_eq!(order.related(ObjectProperty::Includes), &["Book_0_Dune".to_string()]);

        let customer = graph.individual("Customer_1").unwrap();
        assert_eq!(customer.related(ObjectProperty::Purchases), &["Book_0_Dune".to_string()]);
    }

    #[test]
    fn test_order_with_unknown_book_is_an_error() {
        let customer_id = AgentId::new(0, AgentKind::Customer, 0);
        let customers = vec![CustomerActor::new(customer_id.clone(), 0.6).unwrap()];
        let orders = vec![OrderRecord::new(
            "Order_1_Ghost_x".to_string(),
            customer_id,
            AgentId::new(9, AgentKind::Book, 4),
        )];

        let result = project(&StoreView {
            books: &[],
            customers: &customers,
            employees: &[],
            orders: &orders,
        });
        assert!(matches!(result, Err(SimulationError::UnknownAgent(_))));
    }
}
