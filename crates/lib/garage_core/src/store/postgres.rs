//! PostgreSQL implementation of [`GarageStore`].
//!
//! Email uniqueness is enforced by the `users_email_key` unique index; a
//! unique violation on insert is surfaced as [`StoreError::DuplicateEmail`].

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::{GarageStore, StoreError, StoreResult};
use crate::models::auth::{NewUser, User, UserId, UserWithPassword};
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::uuid::uuidv7;

type VehicleRow = (
    Uuid,
    String,
    String,
    Option<i32>,
    String,
    Option<NaiveDate>,
    Option<NaiveDate>,
    Uuid,
);

const VEHICLE_COLUMNS: &str =
    "id, model, plate, year, color, last_service_date, next_service_date, owner_id";

fn vehicle_from_row(row: VehicleRow) -> Vehicle {
    let (id, model, plate, year, color, last_service_date, next_service_date, owner_id) = row;
    Vehicle {
        id,
        model,
        plate,
        year,
        color,
        last_service_date,
        next_service_date,
        owner_id,
    }
}

/// sqlx-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GarageStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let result = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (name, email, password_hash, is_admin) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(User {
                id,
                name: user.name,
                email: user.email,
                is_admin: user.is_admin,
            }),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateEmail(user.email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>> {
        let row = sqlx::query_as::<_, (Uuid, String, String, String, bool)>(
            "SELECT id, name, email, password_hash, is_admin FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(id, name, email, password_hash, is_admin)| UserWithPassword {
            user: User {
                id,
                name,
                email,
                is_admin,
            },
            password_hash,
        }))
    }

    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, (String, String, bool)>(
            "SELECT name, email, is_admin FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(name, email, is_admin)| User {
            id,
            name,
            email,
            is_admin,
        }))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query_as::<_, (Uuid, String, String, bool)>(
            "SELECT id, name, email, is_admin FROM users ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name, email, is_admin)| User {
                id,
                name,
                email,
                is_admin,
            })
            .collect())
    }

    async fn insert_vehicle(&self, owner_id: UserId, vehicle: NewVehicle) -> StoreResult<Vehicle> {
        let id = uuidv7();
        sqlx::query(
            "INSERT INTO vehicles \
             (id, model, plate, year, color, last_service_date, next_service_date, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(id)
        .bind(&vehicle.model)
        .bind(&vehicle.plate)
        .bind(vehicle.year)
        .bind(&vehicle.color)
        .bind(vehicle.last_service_date)
        .bind(vehicle.next_service_date)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(Vehicle {
            id,
            model: vehicle.model,
            plate: vehicle.plate,
            year: vehicle.year,
            color: vehicle.color,
            last_service_date: vehicle.last_service_date,
            next_service_date: vehicle.next_service_date,
            owner_id,
        })
    }

    async fn get_vehicle(&self, id: Uuid) -> StoreResult<Option<Vehicle>> {
        let sql = format!("SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = $1");
        let row = sqlx::query_as::<_, VehicleRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(vehicle_from_row))
    }

    async fn list_vehicles_for_owner(&self, owner_id: UserId) -> StoreResult<Vec<Vehicle>> {
        let sql = format!("SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE owner_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, VehicleRow>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(vehicle_from_row).collect())
    }

    async fn list_vehicles(&self) -> StoreResult<Vec<Vehicle>> {
        let sql = format!("SELECT {VEHICLE_COLUMNS} FROM vehicles ORDER BY id");
        let rows = sqlx::query_as::<_, VehicleRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(vehicle_from_row).collect())
    }

    async fn delete_vehicle(&self, id: Uuid, owner_id: UserId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
