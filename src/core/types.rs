/// The kind of agent behind an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgentKind {
    Book,
    Customer,
    Employee,
}

impl AgentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Book => "Book",
            AgentKind::Customer => "Customer",
            AgentKind::Employee => "Employee",
        }
    }
}

/// Agent identifier with kind information
///
/// `uid` is unique across the whole roster. `slot` is the position of the
/// agent inside the collection of its own kind, which is how the model
/// dispatches an activation without searching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId {
    pub(crate) uid: u64,
    pub(crate) kind: AgentKind,
    pub(crate) slot: usize,
}

impl AgentId {
    /// Create a new agent ID
    pub fn new(uid: u64, kind: AgentKind, slot: usize) -> Self {
        Self { uid, kind, slot }
    }

    /// Get the roster-wide unique id
    pub fn uid(&self) -> u64 {
        self.uid
    }

    /// Get the agent kind
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Get the position within the agent's own collection
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Human-readable label used in logs and messages (1-based per kind)
    pub fn display_id(&self) -> usize {
        self.slot + 1
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind.as_str(), self.uid)
    }
}
