//! In-memory stores for tests.

use super::{HealthCheck, HotelStore, SessionStore, TicketStore};
use crate::models::{
    hotel::{Hotel, HotelWithRooms},
    session::Session,
    ticket::Ticket,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct FakeTicketStore {
    pub tickets: Vec<Ticket>,
    pub calls: AtomicUsize,
}

impl FakeTicketStore {
    pub fn with(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketStore for FakeTicketStore {
    async fn find_ticket_by_user_id(&self, user_id: i32) -> Result<Option<Ticket>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.tickets.iter().find(|t| t.user_id == user_id).cloned())
    }
}

/// Hotel store backed by a list of hotels with rooms.
///
/// `hotels: None` simulates a store that returns no collection at all.
pub struct FakeHotelStore {
    pub hotels: Option<Vec<HotelWithRooms>>,
    pub calls: AtomicUsize,
}

impl FakeHotelStore {
    pub fn with(hotels: Vec<HotelWithRooms>) -> Self {
        Self {
            hotels: Some(hotels),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            hotels: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HotelStore for FakeHotelStore {
    async fn find_all_hotels(&self) -> Result<Option<Vec<Hotel>>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .hotels
            .as_ref()
            .map(|hotels| hotels.iter().map(|h| h.hotel.clone()).collect()))
    }

    async fn find_hotel_by_id(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .hotels
            .as_ref()
            .and_then(|hotels| hotels.iter().find(|h| h.hotel.id == hotel_id).cloned()))
    }
}

/// Ticket store whose every lookup fails.
pub struct FailingTicketStore;

#[async_trait]
impl TicketStore for FailingTicketStore {
    async fn find_ticket_by_user_id(&self, _user_id: i32) -> Result<Option<Ticket>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Session store holding `(token_hash, user_id)` pairs.
#[derive(Default)]
pub struct FakeSessionStore {
    pub sessions: Vec<(String, i32)>,
}

#[async_trait]
impl SessionStore for FakeSessionStore {
    async fn find_session_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        Ok(self
            .sessions
            .iter()
            .position(|(hash, _)| hash == token_hash)
            .map(|index| Session {
                id: index as i32 + 1,
                user_id: self.sessions[index].1,
            }))
    }
}

pub struct FakeHealthCheck {
    pub healthy: bool,
}

#[async_trait]
impl HealthCheck for FakeHealthCheck {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.healthy {
            Ok(())
        } else {
            Err(sqlx::Error::PoolTimedOut)
        }
    }
}
