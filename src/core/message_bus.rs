/// Append-only log of agent activity
///
/// Every successful purchase or restock publishes one line here. Nothing
/// consumes the bus during a run; it exists for reports and display.
#[derive(Debug, Clone, Default)]
pub struct MessageBus {
    messages: Vec<String>,
}

impl MessageBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Append a message, prefixed with the tick it happened in when known
    pub fn publish(&mut self, msg: &str, tick: Option<u64>) {
        match tick {
            Some(tick) => self.messages.push(format!("[Step {}] {}", tick, msg)),
            None => self.messages.push(msg.to_string()),
        }
    }

    /// Copy of the full log, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.clone()
    }

    /// Iterate the log newest first
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().rev().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
