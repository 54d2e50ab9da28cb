// Tests that the projected graph tracks the store across ticks
#[cfg(test)]
mod tests {
    use crate::core::{
        execution::config::{default_catalog, SimulationConfig},
        execution::simulation_engine::BookstoreModel,
        ontology::graph::{ObjectProperty, OntologyClass},
        ontology::projection::STORE_INVENTORY,
    };

    fn model() -> BookstoreModel {
        let config = SimulationConfig::new()
            .with_customers(6)
            .with_employees(2)
            .with_random_seed(Some(99));
        BookstoreModel::new(config, &default_catalog()).unwrap()
    }

    #[test]
    fn test_graph_quantities_match_books_every_tick() {
        let mut model = model();
        for _ in 0..30 {
            model.step().unwrap();
            let graph = model.knowledge_graph().unwrap();
            for book in model.books() {
                assert_eq!(graph.quantity_of(book.individual_name()), book.quantity());
            }
        }
    }

    #[test]
    fn test_orders_and_purchases_are_linked() {
        let mut model = model();
        model.run(20).unwrap();
        let graph = model.knowledge_graph().unwrap();

        assert_eq!(graph.instances(OntologyClass::Order).count(), model.orders().len());
        for order in model.orders() {
            let book = &model.books()[order.book.slot()];
            let individual = graph.individual(&order.id).unwrap();
            assert_eq!(
                individual.related(ObjectProperty::Includes),
                &[book.individual_name().to_string()]
            );

            let customer = &model.customers()[order.customer.slot()];
            let purchases = graph
                .individual(&customer.individual_name())
                .unwrap()
                .related(ObjectProperty::Purchases);
            assert!(purchases.iter().any(|p| p == book.individual_name()));
        }
    }

    #[test]
    fn test_employees_work_at_store_inventory() {
        let graph = model().knowledge_graph().unwrap();
        let employees: Vec<_> = graph.instances(OntologyClass::Employee).collect();
        assert_eq!(employees.len(), 2);
        for employee in employees {
            assert_eq!(
                employee.related(ObjectProperty::WorksAt),
                &[STORE_INVENTORY.to_string()]
            );
        }
    }

    #[test]
    fn test_report_reflects_sales() {
        let mut model = model();
        model.run(10).unwrap();
        let report = model.report().unwrap();

        assert_eq!(report.tick, 10);
        assert_eq!(report.inventory.len(), 6);
        assert_eq!(report.purchases.len(), 6);
        assert_eq!(report.messages.len(), model.message_bus().len());
        assert_eq!(report.messages.first(), model.message_bus().messages().last());

        let expected: f64 = model
            .orders()
            .iter()
            .map(|o| model.books()[o.book.slot()].price())
            .sum();
        assert!((report.total_income - expected).abs() < 1e-9);
    }
}
