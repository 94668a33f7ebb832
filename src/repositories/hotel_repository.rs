//! Hotel store.

use crate::{
    db::DbPool,
    models::hotel::{Hotel, HotelWithRooms, Room},
};
use async_trait::async_trait;

/// Read access to hotels and their rooms.
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// All hotels, without rooms.
    ///
    /// `None` means the store could not produce a collection at all, which is
    /// different from `Some(vec![])`.
    async fn find_all_hotels(&self) -> Result<Option<Vec<Hotel>>, sqlx::Error>;

    /// One hotel with its rooms in stored order.
    async fn find_hotel_by_id(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, sqlx::Error>;
}

/// Repository for hotel data access
pub struct PgHotelStore {
    pool: DbPool,
}

impl PgHotelStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelStore for PgHotelStore {
    async fn find_all_hotels(&self) -> Result<Option<Vec<Hotel>>, sqlx::Error> {
        let hotels = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(hotels))
    }

    async fn find_hotel_by_id(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, sqlx::Error> {
        let Some(hotel) = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = $1",
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY id
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
