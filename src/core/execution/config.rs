//! Configuration for bookstore simulation runs
//!
//! This module provides the run parameters (agent counts, behaviour
//! constants, seeding) and the book specifications a model is built from.

use serde::{Deserialize, Serialize};

use crate::core::agents::book::MAX_STOCK;
use crate::core::errors::SimulationError;

pub const DEFAULT_PURCHASE_PROBABILITY: f64 = 0.6;
pub const DEFAULT_RESTOCK_THRESHOLD: u32 = 5;
pub const DEFAULT_RESTOCK_TARGET: u32 = 10;

/// Configuration for a simulation run
///
/// Holds the agent counts and the behaviour constants the customer and
/// employee agents read on every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of customer agents
    pub num_customers: usize,
    /// Number of employee agents
    pub num_employees: usize,
    /// Chance that a customer tries to buy something on a given step
    pub purchase_probability: f64,
    /// Books with fewer copies than this get restocked
    pub restock_threshold: u32,
    /// Quantity a restock brings a book up to
    pub restock_target: u32,
    /// Seed for the shared RNG; `None` seeds from entropy
    pub random_seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a new configuration with default values
    ///
    /// Defaults: 6 customers, 2 employees, 0.6 purchase probability,
    /// restock below 5 up to 10, unseeded.
    pub fn new() -> Self {
        Self {
            num_customers: 6,
            num_employees: 2,
            purchase_probability: DEFAULT_PURCHASE_PROBABILITY,
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
            restock_target: DEFAULT_RESTOCK_TARGET,
            random_seed: None,
        }
    }

    /// Set the number of customer agents
    ///
    /// # Arguments
    /// * `count` - How many customers join the roster
    ///
    /// # Returns
    /// A new configuration with the specified customer count
    pub fn with_customers(mut self, count: usize) -> Self {
        self.num_customers = count;
        self
    }

    /// Set the number of employee agents
    ///
    /// # Arguments
    /// * `count` - How many employees join the roster
    ///
    /// # Returns
    /// A new configuration with the specified employee count
    pub fn with_employees(mut self, count: usize) -> Self {
        self.num_employees = count;
        self
    }

    /// Set the chance that a customer attempts a purchase on its step
    ///
    /// # Arguments
    /// * `probability` - Bernoulli parameter, checked by [`validate`](Self::validate)
    ///
    /// # Returns
    /// A new configuration with the specified purchase probability
    pub fn with_purchase_probability(mut self, probability: f64) -> Self {
        self.purchase_probability = probability;
        self
    }

    /// Set the restock trigger and the quantity restocking aims for
    ///
    /// # Arguments
    /// * `threshold` - Books with strictly fewer copies get restocked
    /// * `target` - Quantity a restocked book is brought up to
    ///
    /// # Returns
    /// A new configuration with the specified restock policy
    pub fn with_restock_policy(mut self, threshold: u32, target: u32) -> Self {
        self.restock_threshold = threshold;
        self.restock_target = target;
        self
    }

    /// Set the seed of the shared random number generator
    ///
    /// # Arguments
    /// * `seed` - Fixed seed for reproducible runs, or `None` for entropy
    ///
    /// # Returns
    /// A new configuration with the specified seed
    ///
    /// # Note
    /// Two models built from the same seed and catalogue produce the same
    /// activation order, purchases and order names
    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    /// Check that every value is usable by the agents
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(0.0..=1.0).contains(&self.purchase_probability) {
            return Err(SimulationError::InvalidConfig(format!(
                "purchase probability must be within [0, 1], got {}",
                self.purchase_probability
            )));
        }
        if self.restock_threshold > MAX_STOCK {
            return Err(SimulationError::InvalidConfig(format!(
                "restock threshold {} exceeds stock cap {}",
                self.restock_threshold, MAX_STOCK
            )));
        }
        if self.restock_target > MAX_STOCK {
            return Err(SimulationError::InvalidConfig(format!(
                "restock target {} exceeds stock cap {}",
                self.restock_target, MAX_STOCK
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_genre() -> String {
    "Unknown".to_string()
}

/// Input description of one book
///
/// Missing fields fall back to genre "Unknown", price 0.0, quantity 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSpec {
    pub title: String,
    #[serde(default = "unknown_genre")]
    pub genre: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
}

impl BookSpec {
    pub fn new(title: &str, genre: &str, price: f64, quantity: u32) -> Self {
        Self {
            title: title.to_string(),
            genre: genre.to_string(),
            author: None,
            price,
            quantity,
        }
    }

    /// Attach an author
    ///
    /// # Arguments
    /// * `author` - Name exported as the book's `hasAuthor` value
    ///
    /// # Returns
    /// The same spec with the author set
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Reject specs that would break the book invariants
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.title.trim().is_empty() {
            return Err(SimulationError::InvalidBook("title is empty".to_string()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(SimulationError::InvalidBook(format!(
                "'{}' has invalid price {}",
                self.title, self.price
            )));
        }
        if self.quantity > MAX_STOCK {
            return Err(SimulationError::InvalidBook(format!(
                "'{}' starts with {} copies, above the cap of {}",
                self.title, self.quantity, MAX_STOCK
            )));
        }
        Ok(())
    }
}

/// The store's opening catalogue
pub fn default_catalog() -> Vec<BookSpec> {
    vec![
        BookSpec::new("Brave New World", "Dystopian", 9.99, 10),
        BookSpec::new("The Great Gatsby", "Classic", 12.50, 8),
        BookSpec::new("Harry Potter and the Sorcerer's Stone", "Fantasy", 15.20, 5),
        BookSpec::new("Foundation", "Science Fiction", 18.75, 2),
        BookSpec::new("Jane Eyre", "Romance", 10.00, 6),
        BookSpec::new("Lord of the Flies", "Classic", 11.50, 4),
    ]
}
