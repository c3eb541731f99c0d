use serde::Serialize;

use crate::clock::{parse_time, TimeParseError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: String,
    delivery_deadline: u32,
}

impl Order {
    /// Builds an order from a deadline given as `"HH:MM"` or whole minutes.
    /// A missing deadline means midnight.
    pub fn new(id: impl Into<String>, delivery_time: Option<&str>) -> Result<Self, TimeParseError> {
        let delivery_deadline = match delivery_time {
            Some(raw) => parse_time(raw)?,
            None => 0,
        };

        Ok(Self::with_deadline(id, delivery_deadline))
    }

    pub fn with_deadline(id: impl Into<String>, delivery_deadline: u32) -> Self {
        Self {
            id: id.into(),
            delivery_deadline,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Minutes since midnight.
    pub fn delivery_deadline(&self) -> u32 {
        self.delivery_deadline
    }
}

#[cfg(test)]
mod tests {
    use super::Order;
    use crate::clock::TimeParseError;

    #[test]
    fn deadline_is_derived_from_clock_notation() {
        let order = Order::new("O1", Some("08:30")).unwrap();
        assert_eq!(order.id(), "O1");
        assert_eq!(order.delivery_deadline(), 510);
    }

    #[test]
    fn deadline_accepts_plain_minutes() {
        let order = Order::new("O2", Some("75")).unwrap();
        assert_eq!(order.delivery_deadline(), 75);
    }

    #[test]
    fn missing_deadline_defaults_to_midnight() {
        let order = Order::new("O3", None).unwrap();
        assert_eq!(order.delivery_deadline(), 0);
    }

    #[test]
    fn malformed_deadline_is_rejected() {
        let err = Order::new("O4", Some("soon")).unwrap_err();
        assert!(matches!(err, TimeParseError::InvalidNumber { .. }));
    }
}
