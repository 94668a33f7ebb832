//! Hotel and room data models.
//!
//! These structs are both database rows and API response bodies. Field names
//! are serialized in camelCase, and a hotel's rooms appear under `Rooms`:
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Driven Resort",
//!   "image": "https://example.com/resort.png",
//!   "createdAt": "2025-12-20T10:00:00Z",
//!   "updatedAt": "2025-12-20T10:00:00Z",
//!   "Rooms": [
//!     {
//!       "id": 1,
//!       "name": "101",
//!       "capacity": 2,
//!       "hotelId": 1,
//!       "createdAt": "2025-12-20T10:00:00Z",
//!       "updatedAt": "2025-12-20T10:00:00Z"
//!     }
//!   ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a hotel record from the `hotels` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i32,

    pub name: String,

    /// URL of the hotel's picture
    pub image: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Represents a room record from the `rooms` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i32,

    pub name: String,

    /// Number of guests the room sleeps
    pub capacity: i32,

    /// Foreign key to the owning hotel
    pub hotel_id: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// A hotel together with its rooms, as returned by `GET /hotels/{id}`.
///
/// The list endpoint never includes rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,

    /// Rooms in stored order
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}
