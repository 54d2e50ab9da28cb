use std::fmt;
use std::path::Path;

use log::info;

use crate::core::errors::SimulationError;
use crate::core::ontology::graph::{
    DataProperty, DataValue, KnowledgeGraph, ObjectProperty, OntologyClass,
};

pub const ONTOLOGY_IRI: &str = "http://example.org/bookstore.owl";
pub const DEFAULT_OWL_FILE: &str = "bookstore_simulation.owl";

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// RDF/XML rendering of a knowledge graph
pub struct RdfXml<'a>(pub &'a KnowledgeGraph);

impl KnowledgeGraph {
    /// Serialize the schema and every individual as RDF/XML
    pub fn to_rdf_xml(&self) -> String {
        RdfXml(self).to_string()
    }

    /// Write the RDF/XML serialization to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimulationError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_rdf_xml())?;
        info!("Saved ontology with {} individuals to {}", self.len(), path.display());
        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn literal(value: &DataValue) -> (String, &'static str) {
    match value {
        DataValue::Text(s) => (escape(s), "string"),
        DataValue::Integer(i) => (i.to_string(), "integer"),
        DataValue::Decimal(d) => (d.to_string(), "decimal"),
    }
}

impl fmt::Display for RdfXml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\"?>")?;
        writeln!(f, "<rdf:RDF xmlns:rdf=\"{}\"", RDF_NS)?;
        writeln!(f, "         xmlns:xsd=\"{}\"", XSD_NS)?;
        writeln!(f, "         xmlns:rdfs=\"{}\"", RDFS_NS)?;
        writeln!(f, "         xmlns:owl=\"{}\"", OWL_NS)?;
        writeln!(f, "         xml:base=\"{}\"", ONTOLOGY_IRI)?;
        writeln!(f, "         xmlns=\"{}#\">", ONTOLOGY_IRI)?;
        writeln!(f)?;
        writeln!(f, "<owl:Ontology rdf:about=\"{}\"/>", ONTOLOGY_IRI)?;
        writeln!(f)?;

        for property in ObjectProperty::ALL {
            writeln!(f, "<owl:ObjectProperty rdf:about=\"#{}\">", property.as_str())?;
            writeln!(f, "  <rdfs:domain rdf:resource=\"#{}\"/>", property.domain().as_str())?;
            writeln!(f, "  <rdfs:range rdf:resource=\"#{}\"/>", property.range().as_str())?;
            writeln!(f, "</owl:ObjectProperty>")?;
            writeln!(f)?;
        }

        for property in DataProperty::ALL {
            writeln!(f, "<owl:DatatypeProperty rdf:about=\"#{}\">", property.as_str())?;
            writeln!(f, "  <rdf:type rdf:resource=\"{}FunctionalProperty\"/>", OWL_NS)?;
            writeln!(f, "  <rdfs:domain rdf:resource=\"#{}\"/>", property.domain().as_str())?;
            writeln!(f, "</owl:DatatypeProperty>")?;
            writeln!(f)?;
        }

        for class in OntologyClass::ALL {
            writeln!(f, "<owl:Class rdf:about=\"#{}\"/>", class.as_str())?;
            writeln!(f)?;
        }

        for individual in self.0.individuals() {
            let class = individual.class().as_str();
            writeln!(f, "<{} rdf:about=\"#{}\">", class, escape(individual.name()))?;
            writeln!(f, "  <rdf:type rdf:resource=\"{}NamedIndividual\"/>", OWL_NS)?;
            for (property, targets) in individual.links() {
                for target in targets {
                    writeln!(
                        f,
                        "  <{} rdf:resource=\"#{}\"/>",
                        property.as_str(),
                        escape(target)
                    )?;
                }
            }
            for (property, value) in individual.data_values() {
                let (text, datatype) = literal(value);
                writeln!(
                    f,
                    "  <{0} rdf:datatype=\"{1}{2}\">{3}</{0}>",
                    property.as_str(),
                    XSD_NS,
                    datatype,
                    text
                )?;
            }
            writeln!(f, "</{}>", class)?;
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "</rdf:RDF>")
    }
}
