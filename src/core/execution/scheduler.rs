use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::core::types::AgentId;

/// Lifecycle of the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No pass has started yet
    NotStarted,
    /// At least one pass has begun; `tick` passes have completed
    Running { tick: u64 },
}

/// Random-order activation scheduler
///
/// Every tick the whole roster is shuffled and each agent gets exactly
/// one activation. There is no terminal condition; the caller decides
/// how many ticks to run.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    roster: Vec<AgentId>,
    tick: u64,
    started: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            roster: Vec::new(),
            tick: 0,
            started: false,
        }
    }

    /// Add an agent to the roster
    pub fn add(&mut self, id: AgentId) {
        self.roster.push(id);
    }

    pub fn roster(&self) -> &[AgentId] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Completed passes
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn state(&self) -> SchedulerState {
        if self.started {
            SchedulerState::Running { tick: self.tick }
        } else {
            SchedulerState::NotStarted
        }
    }

    /// Start a pass and return this tick's activation order
    pub fn begin_tick(&mut self, rng: &mut StdRng) -> Vec<AgentId> {
        self.started = true;
        let mut order = self.roster.clone();
        order.shuffle(rng);
        order
    }

    /// Finish the current pass; returns the new tick count
    pub fn finish_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AgentKind;
    use rand::SeedableRng;

    fn roster(n: usize) -> Scheduler {
        let mut scheduler = Scheduler::new();
        for i in 0..n {
            scheduler.add(AgentId::new(i as u64, AgentKind::Customer, i));
        }
        scheduler
    }

    #[test]
    fn test_state_transitions() {
        let mut scheduler = roster(3);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scheduler.state(), SchedulerState::NotStarted);

        scheduler.begin_tick(&mut rng);
        assert_eq!(scheduler.state(), SchedulerState::Running { tick: 0 });

        assert_eq!(scheduler.finish_tick(), 1);
        assert_eq!(scheduler.state(), SchedulerState::Running { tick: 1 });
    }

    #[test]
    fn test_activation_order_is_a_permutation() {
        let mut scheduler = roster(20);
        let mut rng = StdRng::seed_from_u64(11);

        let mut order = scheduler.begin_tick(&mut rng);
        order.sort();
        assert_eq!(order, scheduler.roster().to_vec());
    }

    #[test]
    fn test_activation_order_varies_between_ticks() {
        let mut scheduler = roster(20);
        let mut rng = StdRng::seed_from_u64(11);

        let first = scheduler.begin_tick(&mut rng);
        scheduler.finish_tick();
        let second = scheduler.begin_tick(&mut rng);
        assert_ne!(first, second);
    }
}
