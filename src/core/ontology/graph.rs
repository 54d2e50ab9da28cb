use std::collections::{BTreeMap, HashMap};

use crate::core::errors::SimulationError;

/// Classes of the bookstore ontology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OntologyClass {
    Book,
    Customer,
    Employee,
    Order,
    Inventory,
}

impl OntologyClass {
    pub const ALL: [OntologyClass; 5] = [
        OntologyClass::Book,
        OntologyClass::Customer,
        OntologyClass::Employee,
        OntologyClass::Order,
        OntologyClass::Inventory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OntologyClass::Book => "Book",
            OntologyClass::Customer => "Customer",
            OntologyClass::Employee => "Employee",
            OntologyClass::Order => "Order",
            OntologyClass::Inventory => "Inventory",
        }
    }
}

/// Functional data properties; all of them describe books
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataProperty {
    HasAuthor,
    HasGenre,
    AvailableQuantity,
    HasPrice,
}

impl DataProperty {
    pub const ALL: [DataProperty; 4] = [
        DataProperty::HasAuthor,
        DataProperty::HasGenre,
        DataProperty::AvailableQuantity,
        DataProperty::HasPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataProperty::HasAuthor => "hasAuthor",
            DataProperty::HasGenre => "hasGenre",
            DataProperty::AvailableQuantity => "availableQuantity",
            DataProperty::HasPrice => "hasPrice",
        }
    }

    pub fn domain(&self) -> OntologyClass {
        OntologyClass::Book
    }
}

/// Relations between individuals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectProperty {
    /// Customer -> Book
    Purchases,
    /// Employee -> Inventory
    WorksAt,
    /// Order -> Book
    Includes,
}

impl ObjectProperty {
    pub const ALL: [ObjectProperty; 3] = [
        ObjectProperty::Purchases,
        ObjectProperty::WorksAt,
        ObjectProperty::Includes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectProperty::Purchases => "purchases",
            ObjectProperty::WorksAt => "worksAt",
            ObjectProperty::Includes => "includes",
        }
    }

    pub fn domain(&self) -> OntologyClass {
        match self {
            ObjectProperty::Purchases => OntologyClass::Customer,
            ObjectProperty::WorksAt => OntologyClass::Employee,
            ObjectProperty::Includes => OntologyClass::Order,
        }
    }

    pub fn range(&self) -> OntologyClass {
        match self {
            ObjectProperty::Purchases => OntologyClass::Book,
            ObjectProperty::WorksAt => OntologyClass::Inventory,
            ObjectProperty::Includes => OntologyClass::Book,
        }
    }
}

/// Literal value of a data property
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl DataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            DataValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            DataValue::Decimal(d) => Some(*d),
            DataValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

/// A named member of one ontology class
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    name: String,
    class: OntologyClass,
    data: BTreeMap<DataProperty, DataValue>,
    links: BTreeMap<ObjectProperty, Vec<String>>,
}

impl Individual {
    fn new(name: String, class: OntologyClass) -> Self {
        Self {
            name,
            class,
            data: BTreeMap::new(),
            links: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> OntologyClass {
        self.class
    }

    pub fn data(&self, property: DataProperty) -> Option<&DataValue> {
        self.data.get(&property)
    }

    pub fn data_values(&self) -> impl Iterator<Item = (DataProperty, &DataValue)> {
        self.data.iter().map(|(p, v)| (*p, v))
    }

    /// Targets of `property`, in the order they were related
    pub fn related(&self, property: ObjectProperty) -> &[String] {
        self.links.get(&property).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn links(&self) -> impl Iterator<Item = (ObjectProperty, &[String])> {
        self.links.iter().map(|(p, targets)| (*p, targets.as_slice()))
    }
}

/// In-memory graph of individuals and their properties
///
/// Individuals keep insertion order so that exports and reports list
/// them the way the store created them.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    individuals: Vec<Individual>,
    index: HashMap<String, usize>,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add an individual, or return the existing one with that name
    pub fn add_individual(
        &mut self,
        name: &str,
        class: OntologyClass,
    ) -> Result<&mut Individual, SimulationError> {
        if let Some(&pos) = self.index.get(name) {
            let existing = &mut self.individuals[pos];
            if existing.class != class {
                return Err(SimulationError::InvalidConfig(format!(
                    "individual '{}' already exists as {}, not {}",
                    name,
                    existing.class.as_str(),
                    class.as_str()
                )));
            }
            return Ok(existing);
        }

        self.index.insert(name.to_string(), self.individuals.len());
        self.individuals.push(Individual::new(name.to_string(), class));
        let last = self.individuals.len() - 1;
        Ok(&mut self.individuals[last])
    }

    /// Set a functional data property, replacing any previous value
    pub fn set_data(
        &mut self,
        name: &str,
        property: DataProperty,
        value: DataValue,
    ) -> Result<(), SimulationError> {
        let individual = self.individual_mut(name)?;
        individual.data.insert(property, value);
        Ok(())
    }

    /// Relate `subject` to `target`; a repeated triple is stored once
    pub fn relate(
        &mut self,
        subject: &str,
        property: ObjectProperty,
        target: &str,
    ) -> Result<(), SimulationError> {
        if !self.index.contains_key(target) {
            return Err(SimulationError::MissingIndividual(target.to_string()));
        }
        let individual = self.individual_mut(subject)?;
        let targets = individual.links.entry(property).or_insert_with(Vec::new);
        if !targets.iter().any(|t| t == target) {
            targets.push(target.to_string());
        }
        Ok(())
    }

    pub fn individual(&self, name: &str) -> Option<&Individual> {
        self.index.get(name).map(|&pos| &self.individuals[pos])
    }

    fn individual_mut(&mut self, name: &str) -> Result<&mut Individual, SimulationError> {
        let pos = *self
            .index
            .get(name)
            .ok_or_else(|| SimulationError::MissingIndividual(name.to_string()))?;
        Ok(&mut self.individuals[pos])
    }

    /// All individuals of a class, in insertion order
    pub fn instances(&self, class: OntologyClass) -> impl Iterator<Item = &Individual> {
        self.individuals.iter().filter(move |i| i.class == class)
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Stock level recorded on a book individual; missing or malformed reads as 0
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.individual(name)
            .and_then(|i| i.data(DataProperty::AvailableQuantity))
            .and_then(DataValue::as_integer)
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_individual_is_idempotent() {
        let mut graph = KnowledgeGraph::new();
        graph.add_individual("Dune_0", OntologyClass::Book).unwrap();
        graph.add_individual("Dune_0", OntologyClass::Book).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_class_conflict_rejected() {
        let mut graph = KnowledgeGraph::new();
        graph.add_individual("Thing", OntologyClass::Book).unwrap();
        assert!(graph.add_individual("Thing", OntologyClass::Order).is_err());
    }

    #[test]
    fn test_relate_requires_target() {
        let mut graph = KnowledgeGraph::new();
        graph.add_individual("Employee_1", OntologyClass::Employee).unwrap();
        let err = graph
            .relate("Employee_1", ObjectProperty::WorksAt, "StoreInventory")
            .unwrap_err();
        assert!(matches!(err, SimulationError::MissingIndividual(name) if name == "StoreInventory"));
    }

    #[test]
    fn test_relate_has_set_semantics() {
        let mut graph = KnowledgeGraph::new();
        graph.add_individual("Customer_1", OntologyClass::Customer).unwrap();
        graph.add_individual("Dune_0", OntologyClass::Book).unwrap();
        graph.relate("Customer_1", ObjectProperty::Purchases, "Dune_0").unwrap();
        graph.relate("Customer_1", ObjectProperty::Purchases, "Dune_0").unwrap();

        let customer = graph.individual("Customer_1").unwrap();
        assert_eq!(customer.related(ObjectProperty::Purchases), &["Dune_0".to_string()]);
    }

    #[test]
    fn test_quantity_defaults_to_zero() {
        let mut graph = KnowledgeGraph::new();
        graph.add_individual("Dune_0", OntologyClass::Book).unwrap();
        assert_eq!(graph.quantity_of("Dune_0"), 0);
        assert_eq!(graph.quantity_of("Missing"), 0);

        graph
            .set_data("Dune_0", DataProperty::AvailableQuantity, DataValue::Text("many".into()))
            .unwrap();
        assert_eq!(graph.quantity_of("Dune_0"), 0);

        graph
            .set_data("Dune_0", DataProperty::AvailableQuantity, DataValue::Integer(7))
            .unwrap();
        assert_eq!(graph.quantity_of("Dune_0"), 7);
    }

    #[test]
    fn test_instances_filter_by_class() {
        let mut graph = KnowledgeGraph::new();
        graph.add_individual("A", OntologyClass::Book).unwrap();
        graph.add_individual("B", OntologyClass::Customer).unwrap();
        graph.add_individual("C", OntologyClass::Book).unwrap();

        let books: Vec<&str> = graph.instances(OntologyClass::Book).map(|i| i.name()).collect();
        assert_eq!(books, vec!["A", "C"]);
    }
}
