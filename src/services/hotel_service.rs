//! Hotel service - ticket entitlement and hotel lookup.
//!
//! Hotel data is only visible to users holding a paid, in-person ticket whose
//! ticket type includes the hotel. Every lookup checks that first and performs
//! at most two store reads: the ticket, then the hotel data.

use crate::{
    error::AppError,
    models::hotel::{Hotel, HotelWithRooms},
    repositories::{HotelStore, TicketStore},
};

/// Parse a textual identifier into a numeric id.
///
/// # Errors
///
/// - `BadRequest`: The value is not a base-10 integer
pub fn parse_id(raw: &str, field: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("{field} must be a numeric id")))
}

/// Check that `user_id` is entitled to view hotel data.
///
/// # Errors
///
/// - `NotFound`: The user has no ticket
/// - `PaymentRequired`: The ticket is unpaid, remote, or excludes the hotel
/// - `Database`: The ticket lookup failed
pub async fn verify_entitlement(tickets: &dyn TicketStore, user_id: i32) -> Result<(), AppError> {
    let ticket = tickets
        .find_ticket_by_user_id(user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !ticket.grants_hotel_access() {
        tracing::debug!(
            user_id = ticket.user_id,
            ticket_id = ticket.id,
            ticket_type_id = ticket.ticket_type.id,
            ticket_type = %ticket.ticket_type.name,
            status = ?ticket.status,
            is_remote = ticket.ticket_type.is_remote,
            includes_hotel = ticket.ticket_type.includes_hotel,
            "ticket does not grant hotel access"
        );
        return Err(AppError::PaymentRequired);
    }

    Ok(())
}

/// List every hotel for an entitled user.
///
/// An empty list is a valid result. Only a store that yields no collection at
/// all is reported as `NotFound`.
pub async fn list_hotels(
    tickets: &dyn TicketStore,
    hotels: &dyn HotelStore,
    user_id: i32,
) -> Result<Vec<Hotel>, AppError> {
    verify_entitlement(tickets, user_id).await?;

    hotels.find_all_hotels().await?.ok_or(AppError::NotFound)
}

/// Get one hotel with its rooms for an entitled user.
///
/// # Errors
///
/// - `NotFound`: No ticket, or no hotel with `hotel_id`
/// - `PaymentRequired`: The ticket does not grant hotel access
pub async fn get_hotel(
    tickets: &dyn TicketStore,
    hotels: &dyn HotelStore,
    hotel_id: i32,
    user_id: i32,
) -> Result<HotelWithRooms, AppError> {
    verify_entitlement(tickets, user_id).await?;

    hotels
        .find_hotel_by_id(hotel_id)
        .await?
        .ok_or(AppError::NotFound)
}
