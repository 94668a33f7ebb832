//! Hotel HTTP handlers.
//!
//! This module implements the hotel endpoints:
//! - GET /hotels - List all hotels
//! - GET /hotels/:id - Get one hotel with its rooms
//!
//! Both require a ticket that grants hotel access.

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::hotel::{Hotel, HotelWithRooms},
    routes::AppState,
    services::hotel_service,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};

/// List all hotels.
///
/// # Endpoint
///
/// `GET /hotels`
///
/// # Response
///
/// - **Success (200 OK)**: Array of hotels without rooms (may be empty)
/// - **Error (401)**: Missing or unknown session
/// - **Error (402)**: Ticket unpaid, remote, or without hotel
/// - **Error (404)**: User has no ticket
///
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Driven Resort",
///     "image": "https://example.com/resort.png",
///     "createdAt": "2025-12-20T10:00:00Z",
///     "updatedAt": "2025-12-20T10:00:00Z"
///   }
/// ]
/// ```
pub async fn list_hotels(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    let hotels =
        hotel_service::list_hotels(state.tickets.as_ref(), state.hotels.as_ref(), auth.user_id)
            .await?;

    Ok(Json(hotels))
}

/// Get a hotel and its rooms.
///
/// # Endpoint
///
/// `GET /hotels/:id`
///
/// # URL Parameters
///
/// - `id` - Numeric hotel id; anything else is rejected with 400 before any lookup
///
/// # Response
///
/// - **Success (200 OK)**: Hotel object with a `Rooms` array
/// - **Error (400)**: Non-numeric id
/// - **Error (401)**: Missing or unknown session
/// - **Error (402)**: Ticket unpaid, remote, or without hotel
/// - **Error (404)**: User has no ticket, or hotel does not exist
pub async fn get_hotel(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<HotelWithRooms>, AppError> {
    let hotel_id = hotel_service::parse_id(&raw_id, "hotel id")?;

    let hotel = hotel_service::get_hotel(
        state.tickets.as_ref(),
        state.hotels.as_ref(),
        hotel_id,
        auth.user_id,
    )
    .await?;

    Ok(Json(hotel))
}
