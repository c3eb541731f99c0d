use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partner {
    id: String,
    assigned_order_count: usize,
}

impl Partner {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assigned_order_count: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn assigned_order_count(&self) -> usize {
        self.assigned_order_count
    }

    pub(crate) fn increment(&mut self) {
        self.assigned_order_count += 1;
    }

    pub(crate) fn decrement(&mut self) {
        debug_assert!(
            self.assigned_order_count > 0,
            "partner {} order count would drop below zero",
            self.id
        );
        self.assigned_order_count = self.assigned_order_count.saturating_sub(1);
    }

    pub(crate) fn set_assigned_order_count(&mut self, count: usize) {
        self.assigned_order_count = count;
    }
}
