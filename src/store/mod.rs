use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::clock::{format_time, parse_time, TimeParseError};
use crate::models::order::Order;
use crate::models::partner::Partner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned,
    Reassigned { from: String },
    Unchanged,
    UnknownOrder,
    UnknownPartner,
}

/// Orders, partners and the order -> partner relation with its inverse.
///
/// A partner that has no entry in `partner_orders` and one with an empty set
/// are the same state; mutators never leave an empty set behind.
#[derive(Debug, Default)]
pub struct AssignmentStore {
    orders: HashMap<String, Order>,
    partners: HashMap<String, Partner>,
    order_partner: HashMap<String, String>,
    partner_orders: HashMap<String, HashSet<String>>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_order(&mut self, order: Order) {
        debug!(
            order_id = %order.id(),
            delivery_deadline = order.delivery_deadline(),
            "order stored"
        );
        self.orders.insert(order.id().to_string(), order);
    }

    pub fn add_partner(&mut self, partner_id: &str) {
        let mut partner = Partner::new(partner_id);
        partner.set_assigned_order_count(self.assigned_count(partner_id));
        debug!(partner_id = %partner_id, "partner stored");
        self.partners.insert(partner_id.to_string(), partner);
    }

    pub fn assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> AssignOutcome {
        if !self.orders.contains_key(order_id) {
            warn!(order_id = %order_id, partner_id = %partner_id, "assignment skipped: unknown order");
            return AssignOutcome::UnknownOrder;
        }
        if !self.partners.contains_key(partner_id) {
            warn!(order_id = %order_id, partner_id = %partner_id, "assignment skipped: unknown partner");
            return AssignOutcome::UnknownPartner;
        }

        let previous = self.order_partner.get(order_id).cloned();
        if previous.as_deref() == Some(partner_id) {
            return AssignOutcome::Unchanged;
        }

        if let Some(from) = previous.as_deref() {
            self.detach(order_id, from);
        }

        self.order_partner
            .insert(order_id.to_string(), partner_id.to_string());
        let gained = self
            .partner_orders
            .entry(partner_id.to_string())
            .or_default()
            .insert(order_id.to_string());
        if gained {
            if let Some(partner) = self.partners.get_mut(partner_id) {
                partner.increment();
            }
        }

        match previous {
            Some(from) => {
                info!(order_id = %order_id, from = %from, to = %partner_id, "order reassigned");
                AssignOutcome::Reassigned { from }
            }
            None => {
                info!(order_id = %order_id, partner_id = %partner_id, "order assigned");
                AssignOutcome::Assigned
            }
        }
    }

    pub fn get_order_by_id(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    pub fn get_partner_by_id(&self, partner_id: &str) -> Option<&Partner> {
        self.partners.get(partner_id)
    }

    pub fn get_order_count_by_partner_id(&self, partner_id: &str) -> usize {
        self.assigned_count(partner_id)
    }

    /// Order ids assigned to the partner, sorted.
    pub fn get_orders_by_partner_id(&self, partner_id: &str) -> Vec<String> {
        let mut ids: Vec<String> = self.assigned_ids(partner_id).cloned().collect();
        ids.sort();
        ids
    }

    /// Every known order id, sorted.
    pub fn get_all_orders(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.orders.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn get_count_of_unassigned_orders(&self) -> usize {
        self.orders.len().saturating_sub(self.order_partner.len())
    }

    /// Removes the partner and unassigns its orders without deleting them.
    /// Returns the ids of the orders that became unassigned.
    pub fn delete_partner(&mut self, partner_id: &str) -> Vec<String> {
        if self.partners.remove(partner_id).is_none() {
            return Vec::new();
        }

        let mut released: Vec<String> = self
            .partner_orders
            .remove(partner_id)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default();
        for order_id in &released {
            self.order_partner.remove(order_id);
        }
        released.sort();

        info!(
            partner_id = %partner_id,
            released = released.len(),
            "partner deleted"
        );
        released
    }

    pub fn delete_order(&mut self, order_id: &str) -> Option<Order> {
        let order = self.orders.remove(order_id)?;

        if let Some(partner_id) = self.order_partner.remove(order_id) {
            self.detach(order_id, &partner_id);
        }

        info!(order_id = %order_id, "order deleted");
        Some(order)
    }

    /// Counts the partner's orders due strictly after `time`.
    pub fn get_orders_left_after_given_time(
        &self,
        time: &str,
        partner_id: &str,
    ) -> Result<usize, TimeParseError> {
        let threshold = parse_time(time)?;

        Ok(self
            .assigned_orders(partner_id)
            .filter(|order| order.delivery_deadline() > threshold)
            .count())
    }

    /// Latest deadline among the partner's orders as `"HH:MM"`, or `None`
    /// when nothing is assigned.
    pub fn get_last_delivery_time_by_partner_id(&self, partner_id: &str) -> Option<String> {
        self.assigned_orders(partner_id)
            .map(Order::delivery_deadline)
            .max()
            .map(format_time)
    }

    pub fn len_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn len_partners(&self) -> usize {
        self.partners.len()
    }

    pub fn len_assigned(&self) -> usize {
        self.order_partner.len()
    }

    fn assigned_count(&self, partner_id: &str) -> usize {
        self.partner_orders.get(partner_id).map_or(0, HashSet::len)
    }

    fn assigned_ids(&self, partner_id: &str) -> impl Iterator<Item = &String> {
        self.partner_orders.get(partner_id).into_iter().flatten()
    }

    fn assigned_orders(&self, partner_id: &str) -> impl Iterator<Item = &Order> {
        self.assigned_ids(partner_id)
            .filter_map(move |order_id| self.orders.get(order_id))
    }

    /// Drops `order_id` from the partner's set and decrements its counter.
    /// The forward mapping is left to the caller.
    fn detach(&mut self, order_id: &str, partner_id: &str) {
        let Some(set) = self.partner_orders.get_mut(partner_id) else {
            return;
        };

        if set.remove(order_id) {
            if let Some(partner) = self.partners.get_mut(partner_id) {
                partner.decrement();
            }
        }
        if set.is_empty() {
            self.partner_orders.remove(partner_id);
        }
    }
}
