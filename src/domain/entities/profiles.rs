use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::profiles;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = profiles)]
pub struct ProfileEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub mac_address: String,
    pub password_hash: String,
    pub role: String,
    pub loyalty_points: i32,
    pub total_spent_ugx: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub struct RegisterProfileEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub mac_address: String,
    pub password_hash: String,
    pub role: String,
    pub loyalty_points: i32,
    pub total_spent_ugx: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
