use uuid::Uuid;

use crate::{Ticket, Vehicle};

/// A customer arriving with a vehicle
#[derive(Clone, Debug)]
pub struct Customer {
    id: Uuid,
    name: String,
    phone_number: String,
    vehicle: Vehicle,
    ticket: Option<Ticket>,
}

impl Customer {
    /// Create a new [`Customer`] with a random id
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>, vehicle: Vehicle) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone_number: phone_number.into(),
            vehicle,
            ticket: None,
        }
    }

    /// Get the customer's id
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the customer's name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the customer's phone number
    #[inline]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Get the customer's vehicle
    #[inline]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Get the ticket handed to the customer, if any
    #[inline]
    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    /// Hand a ticket to the customer, replacing the previous one
    pub fn assign_ticket(&mut self, ticket: Ticket) {
        self.ticket = Some(ticket);
    }
}
