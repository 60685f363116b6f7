//! A directed flight network.
//!
//! Each airport keeps an insertion-ordered *set* of outbound flights: adding
//! a flight to an airport that is already a destination is a no-op.

use core::cell::{Ref, RefCell};
use core::fmt;

use crate::graph::node::Node;

/// An airport with borrowed outbound flights.
pub struct Airport<'a> {
    code: String,
    outbound: RefCell<Vec<&'a Airport<'a>>>,
}

impl<'a> Airport<'a> {
    /// Creates an airport with no outbound flights.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            outbound: RefCell::new(Vec::new()),
        }
    }

    /// Returns the airport code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Adds a direct flight `self -> destination`.
    ///
    /// Returns `false` if that flight already existed. Destinations are
    /// compared by identity.
    ///
    /// # Panics
    /// Panics if the flight list is currently borrowed through
    /// [`Airport::outbound_flights`].
    pub fn add_flight(&self, destination: &'a Airport<'a>) -> bool {
        let mut flights = self.outbound.borrow_mut();
        if flights.iter().any(|&f| core::ptr::eq(f, destination)) {
            return false;
        }
        flights.push(destination);
        true
    }

    /// Removes the direct flight `self -> destination` if present.
    ///
    /// # Panics
    /// Panics if the flight list is currently borrowed through
    /// [`Airport::outbound_flights`].
    pub fn cancel_flight(&self, destination: &Airport<'a>) -> bool {
        let mut flights = self.outbound.borrow_mut();
        let before = flights.len();
        flights.retain(|&f| !core::ptr::eq(f, destination));
        before != flights.len()
    }

    /// Checks if a direct flight to `destination` exists.
    pub fn has_flight_to(&self, destination: &Airport<'a>) -> bool {
        self.outbound
            .borrow()
            .iter()
            .any(|&f| core::ptr::eq(f, destination))
    }

    /// Returns the outbound flights in the order they were added.
    pub fn outbound_flights(&self) -> Ref<'_, [&'a Airport<'a>]> {
        Ref::map(self.outbound.borrow(), Vec::as_slice)
    }
}

impl<'a> Node<'a> for Airport<'a> {
    #[inline]
    fn neighbors(&self) -> Ref<'_, [&'a Self]> {
        self.outbound_flights()
    }
}

impl fmt::Display for Airport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl fmt::Debug for Airport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flights: Vec<&str> = self.outbound.borrow().iter().map(|&a| a.code()).collect();
        f.debug_struct("Airport")
            .field("code", &self.code)
            .field("outbound", &flights)
            .finish()
    }
}
