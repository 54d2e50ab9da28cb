use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::agents::{
    Agent, BookRecord, CustomerActor, EmployeeActor, OrderRecord, StepOutcome, StoreContext,
};
use crate::core::errors::SimulationError;
use crate::core::execution::config::{BookSpec, SimulationConfig};
use crate::core::execution::scheduler::{Scheduler, SchedulerState};
use crate::core::message_bus::MessageBus;
use crate::core::ontology::graph::KnowledgeGraph;
use crate::core::ontology::projection::{project, StoreView};
use crate::core::report::{inventory_rows, purchase_rows, total_income, StoreReport};
use crate::core::types::{AgentId, AgentKind};

/// Observer trait for simulation progress
pub trait SimulationObserver {
    /// Called after a pass, when the tick counter moves forward
    fn on_tick_advance(&mut self, old_tick: u64, new_tick: u64);

    /// Called once per pass with every activation's outcome
    fn on_step_complete(&mut self, tick: u64, outcomes: &[StepOutcome]);
}

/// The bookstore simulation
///
/// Owns every book, actor, order, the message bus, the scheduler and the
/// shared RNG. Agents never hold references to each other; an activated
/// agent borrows the store through a [`StoreContext`] for the duration of
/// its step.
pub struct BookstoreModel {
    config: SimulationConfig,
    books: Vec<BookRecord>,
    customers: Vec<CustomerActor>,
    employees: Vec<EmployeeActor>,
    orders: Vec<OrderRecord>,
    message_bus: MessageBus,
    scheduler: Scheduler,
    rng: StdRng,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl BookstoreModel {
    /// Create the store: books first, then customers, then employees
    pub fn new(config: SimulationConfig, books: &[BookSpec]) -> Result<Self, SimulationError> {
        config.validate()?;

        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut scheduler = Scheduler::new();
        let mut uid = 0u64;

        let mut records = Vec::with_capacity(books.len());
        for (slot, spec) in books.iter().enumerate() {
            let id = AgentId::new(uid, AgentKind::Book, slot);
            records.push(BookRecord::new(id.clone(), spec)?);
            scheduler.add(id);
            uid += 1;
        }

        let mut customers = Vec::with_capacity(config.num_customers);
        for slot in 0..config.num_customers {
            let id = AgentId::new(uid, AgentKind::Customer, slot);
            customers.push(CustomerActor::new(id.clone(), config.purchase_probability)?);
            scheduler.add(id);
            uid += 1;
        }

        let mut employees = Vec::with_capacity(config.num_employees);
        for slot in 0..config.num_employees {
            let id = AgentId::new(uid, AgentKind::Employee, slot);
            employees.push(EmployeeActor::new(id.clone()));
            scheduler.add(id);
            uid += 1;
        }

        info!(
            "Bookstore initialized: {} books, {} customers, {} employees",
            records.len(),
            customers.len(),
            employees.len()
        );

        Ok(Self {
            config,
            books: records,
            customers,
            employees,
            orders: Vec::new(),
            message_bus: MessageBus::new(),
            scheduler,
            rng,
            observers: Vec::new(),
        })
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    /// Run one tick: every agent is activated once, in random order
    pub fn step(&mut self) -> Result<Vec<StepOutcome>, SimulationError> {
        let tick = self.scheduler.tick();
        debug!("=== Simulation Tick {} ===", tick);

        let order = self.scheduler.begin_tick(&mut self.rng);
        let mut outcomes = Vec::with_capacity(order.len());
        for id in &order {
            outcomes.push(self.activate(id, tick)?);
        }

        let new_tick = self.scheduler.finish_tick();
        for observer in &mut self.observers {
            observer.on_tick_advance(tick, new_tick);
        }
        for observer in &mut self.observers {
            observer.on_step_complete(tick, &outcomes);
        }

        Ok(outcomes)
    }

    /// Run `ticks` passes, returns the tick counter afterwards
    pub fn run(&mut self, ticks: u64) -> Result<u64, SimulationError> {
        let mut messages = 0;
        for _ in 0..ticks {
            messages += self
                .step()?
                .iter()
                .map(StepOutcome::message_count)
                .sum::<usize>();
        }
        info!(
            "Ran {} ticks ({} messages), now at tick {}",
            ticks,
            messages,
            self.current_tick()
        );
        Ok(self.current_tick())
    }

    fn activate(&mut self, id: &AgentId, tick: u64) -> Result<StepOutcome, SimulationError> {
        let mut ctx = StoreContext {
            books: &mut self.books,
            orders: &mut self.orders,
            bus: &mut self.message_bus,
            rng: &mut self.rng,
            config: &self.config,
            tick,
        };

        match id.kind() {
            AgentKind::Book => {
                if id.slot() >= ctx.books.len() {
                    return Err(SimulationError::UnknownAgent(id.to_string()));
                }
                Ok(StepOutcome::Idle)
            }
            AgentKind::Customer => {
                let customer = self
                    .customers
                    .get_mut(id.slot())
                    .ok_or_else(|| SimulationError::UnknownAgent(id.to_string()))?;
                Ok(customer.step(&mut ctx))
            }
            AgentKind::Employee => {
                let employee = self
                    .employees
                    .get_mut(id.slot())
                    .ok_or_else(|| SimulationError::UnknownAgent(id.to_string()))?;
                Ok(employee.step(&mut ctx))
            }
        }
    }

    /// Completed ticks
    pub fn current_tick(&self) -> u64 {
        self.scheduler.tick()
    }

    pub fn state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// First book with the given title
    pub fn book_by_title(&self, title: &str) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.title() == title)
    }

    pub fn customers(&self) -> &[CustomerActor] {
        &self.customers
    }

    pub fn employees(&self) -> &[EmployeeActor] {
        &self.employees
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn message_bus(&self) -> &MessageBus {
        &self.message_bus
    }

    /// Every agent in roster order (books, customers, employees)
    pub fn roster(&self) -> &[AgentId] {
        self.scheduler.roster()
    }

    /// Project the current store into a fresh knowledge graph
    pub fn knowledge_graph(&self) -> Result<KnowledgeGraph, SimulationError> {
        project(&StoreView {
            books: &self.books,
            customers: &self.customers,
            employees: &self.employees,
            orders: &self.orders,
        })
    }

    pub fn export_owl(&self) -> Result<String, SimulationError> {
        Ok(self.knowledge_graph()?.to_rdf_xml())
    }

    pub fn save_owl(&self, path: impl AsRef<Path>) -> Result<(), SimulationError> {
        self.knowledge_graph()?.save(path)
    }

    /// Sum of the prices of every book sold so far
    pub fn total_income(&self) -> f64 {
        total_income(&self.books, &self.orders)
    }

    /// Snapshot of the store tables
    pub fn report(&self) -> Result<StoreReport, SimulationError> {
        let graph = self.knowledge_graph()?;
        Ok(StoreReport {
            tick: self.current_tick(),
            inventory: inventory_rows(&graph, self.config.restock_threshold),
            purchases: purchase_rows(&self.customers),
            total_income: self.total_income(),
            messages: self.message_bus.newest_first().map(str::to_string).collect(),
        })
    }
}
