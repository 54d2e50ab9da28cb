//! Headless versions of the store tables: inventory, purchases, income
//! and the message log.

use serde::Serialize;

use crate::core::agents::{BookRecord, CustomerActor, OrderRecord};
use crate::core::ontology::graph::{DataProperty, DataValue, KnowledgeGraph, OntologyClass};
use crate::core::ontology::names::display_name;

/// One line of the inventory table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    pub book: String,
    pub genre: String,
    pub price: String,
    pub quantity: u32,
    pub needs_restock: bool,
}

/// One line of the purchases table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseRow {
    pub customer: String,
    pub purchases: String,
}

/// Everything a front end needs to render the store after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreReport {
    pub tick: u64,
    pub inventory: Vec<InventoryRow>,
    pub purchases: Vec<PurchaseRow>,
    pub total_income: f64,
    /// Newest first
    pub messages: Vec<String>,
}

/// Inventory rows read from the book individuals of the graph
pub fn inventory_rows(graph: &KnowledgeGraph, restock_threshold: u32) -> Vec<InventoryRow> {
    graph
        .instances(OntologyClass::Book)
        .map(|book| {
            let quantity = graph.quantity_of(book.name());
            let genre = book
                .data(DataProperty::HasGenre)
                .and_then(DataValue::as_text)
                .unwrap_or("Unknown")
                .to_string();
            let price = book
                .data(DataProperty::HasPrice)
                .and_then(DataValue::as_decimal)
                .unwrap_or(0.0);
            InventoryRow {
                book: display_name(book.name()),
                genre,
                price: format!("{:.2}", price),
                quantity,
                needs_restock: quantity < restock_threshold,
            }
        })
        .collect()
}

/// One row per customer listing their purchases in order
pub fn purchase_rows(customers: &[CustomerActor]) -> Vec<PurchaseRow> {
    customers
        .iter()
        .map(|customer| {
            let purchases = if customer.books_purchased().is_empty() {
                "-".to_string()
            } else {
                customer.books_purchased().join(", ")
            };
            PurchaseRow {
                customer: customer.label(),
                purchases,
            }
        })
        .collect()
}

/// Sum of the prices of every ordered book
pub fn total_income(books: &[BookRecord], orders: &[OrderRecord]) -> f64 {
    orders
        .iter()
        .filter_map(|order| books.get(order.book.slot()))
        .map(BookRecord::price)
        .sum()
}
