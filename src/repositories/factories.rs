//! Row insert helpers for database-backed store tests.

use crate::{db::DbPool, models::ticket::TicketStatus};

pub async fn create_user(pool: &DbPool) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO users (email, password)
         VALUES (md5(random()::text) || '@example.com', 'hashed-password')
         RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_session(pool: &DbPool, user_id: i32, token_hash: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO sessions (user_id, token_hash) VALUES ($1, $2) RETURNING id")
        .bind(user_id)
        .bind(token_hash)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_enrollment(pool: &DbPool, user_id: i32) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO enrollments (user_id, name, cpf, birthday, phone)
        VALUES ($1, 'Ada Lovelace', '12345678909', '1990-01-01T00:00:00Z', '21999999999')
        RETURNING id
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_ticket_type(pool: &DbPool, is_remote: bool, includes_hotel: bool) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO ticket_types (name, price, is_remote, includes_hotel)
        VALUES ('Presencial', 25000, $1, $2)
        RETURNING id
        "#,
    )
    .bind(is_remote)
    .bind(includes_hotel)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_ticket(
    pool: &DbPool,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO tickets (enrollment_id, ticket_type_id, status) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(enrollment_id)
    .bind(ticket_type_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_hotel(pool: &DbPool, name: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO hotels (name, image) VALUES ($1, 'https://images.example.com/hotel.png') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a room with an explicit id.
pub async fn create_room(pool: &DbPool, id: i32, hotel_id: i32, name: &str, capacity: i32) {
    sqlx::query("INSERT INTO rooms (id, name, capacity, hotel_id) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(name)
        .bind(capacity)
        .bind(hotel_id)
        .execute(pool)
        .await
        .unwrap();
}
