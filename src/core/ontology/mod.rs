pub mod graph;
pub mod names;
pub mod owl;
pub mod projection;

pub use graph::{DataProperty, DataValue, Individual, KnowledgeGraph, ObjectProperty, OntologyClass};
pub use names::{book_individual_name, display_name, iri_safe, BOOK_PREFIX};
pub use owl::{RdfXml, DEFAULT_OWL_FILE, ONTOLOGY_IRI};
pub use projection::{project, StoreView, STORE_INVENTORY};
