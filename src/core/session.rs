use std::path::Path;

use log::info;

use crate::core::errors::SimulationError;
use crate::core::execution::config::{default_catalog, BookSpec, SimulationConfig};
use crate::core::execution::simulation_engine::BookstoreModel;
use crate::core::report::StoreReport;

/// Driver-facing wrapper around a model
///
/// Collects user-added books before a run, (re)initializes the store on
/// demand and counts the steps taken since the last initialization.
pub struct BookstoreSession {
    config: SimulationConfig,
    include_default_catalog: bool,
    pending_books: Vec<BookSpec>,
    model: Option<BookstoreModel>,
    steps: u64,
}

impl BookstoreSession {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            include_default_catalog: true,
            pending_books: Vec::new(),
            model: None,
            steps: 0,
        }
    }

    /// Start from an empty shelf instead of the default catalogue
    pub fn without_default_catalog(mut self) -> Self {
        self.include_default_catalog = false;
        self
    }

    /// Queue a book for the next initialization
    ///
    /// Title and genre are trimmed; an empty genre becomes "Unknown".
    pub fn add_book(&mut self, mut spec: BookSpec) -> Result<(), SimulationError> {
        spec.title = spec.title.trim().to_string();
        spec.genre = spec.genre.trim().to_string();
        if spec.genre.is_empty() {
            spec.genre = "Unknown".to_string();
        }
        spec.validate()?;
        info!("Added book '{}'", spec.title);
        self.pending_books.push(spec);
        Ok(())
    }

    pub fn pending_books(&self) -> &[BookSpec] {
        &self.pending_books
    }

    /// Build a fresh model from the catalogue plus the queued books
    pub fn initialize(
        &mut self,
        num_customers: usize,
        num_employees: usize,
    ) -> Result<&BookstoreModel, SimulationError> {
        let mut books = if self.include_default_catalog {
            default_catalog()
        } else {
            Vec::new()
        };
        books.extend(self.pending_books.iter().cloned());

        let config = self
            .config
            .clone()
            .with_customers(num_customers)
            .with_employees(num_employees);
        let model = BookstoreModel::new(config, &books)?;
        self.steps = 0;
        Ok(self.model.insert(model))
    }

    /// Advance one tick; returns the session step count
    pub fn run_step(&mut self) -> Result<u64, SimulationError> {
        let model = self.model.as_mut().ok_or(SimulationError::NotInitialized)?;
        model.step()?;
        self.steps += 1;
        Ok(self.steps)
    }

    /// Advance `count` ticks; returns the session step count
    pub fn run_steps(&mut self, count: u64) -> Result<u64, SimulationError> {
        let model = self.model.as_mut().ok_or(SimulationError::NotInitialized)?;
        model.run(count)?;
        self.steps += count;
        Ok(self.steps)
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn model(&self) -> Option<&BookstoreModel> {
        self.model.as_ref()
    }

    pub fn report(&self) -> Result<StoreReport, SimulationError> {
        self.model
            .as_ref()
            .ok_or(SimulationError::NotInitialized)?
            .report()
    }

    pub fn save_owl(&self, path: impl AsRef<Path>) -> Result<(), SimulationError> {
        self.model
            .as_ref()
            .ok_or(SimulationError::NotInitialized)?
            .save_owl(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BookstoreSession {
        BookstoreSession::new(SimulationConfig::new().with_random_seed(Some(3)))
    }

    #[test]
    fn test_steps_require_initialization() {
        let mut s = session();
        assert!(matches!(s.run_step(), Err(SimulationError::NotInitialized)));
        assert!(matches!(s.run_steps(3), Err(SimulationError::NotInitialized)));
        assert!(s.report().is_err());
    }

    #[test]
    fn test_add_book_trims_and_rejects_blank_titles() {
        let mut s = session();
        s.add_book(BookSpec::new("  Dune  ", "  ", 9.0, 3)).unwrap();
        assert_eq!(s.pending_books()[0].title, "Dune");
        assert_eq!(s.pending_books()[0].genre, "Unknown");

        assert!(matches!(
            s.add_book(BookSpec::new("   ", "Classic", 1.0, 1)),
            Err(SimulationError::InvalidBook(_))
        ));
        assert_eq!(s.pending_books().len(), 1);
    }

    #[test]
    fn test_initialize_appends_user_books_to_catalog() {
        let mut s = session();
        s.add_book(BookSpec::new("Dune", "Science Fiction", 9.0, 3)).unwrap();
        let model = s.initialize(2, 1).unwrap();

        assert_eq!(model.books().len(), 7);
        assert_eq!(model.books()[6].title(), "Dune");
        assert_eq!(model.customers().len(), 2);
        assert_eq!(model.employees().len(), 1);
    }

    #[test]
    fn test_reinitialize_resets_step_count() {
        let mut s = session();
        s.initialize(1, 1).unwrap();
        s.run_step().unwrap();
        assert_eq!(s.run_steps(4).unwrap(), 5);
        assert_eq!(s.model().unwrap().current_tick(), 5);

        s.initialize(1, 1).unwrap();
        assert_eq!(s.steps(), 0);
        assert_eq!(s.model().unwrap().current_tick(), 0);
    }

    #[test]
    fn test_empty_shelf_session() {
        let mut s = session().without_default_catalog();
        let model = s.initialize(3, 0).unwrap();
        assert!(model.books().is_empty());
        s.run_steps(2).unwrap();
        assert!(s.report().unwrap().messages.is_empty());
    }
}
