use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::walk_in_customers;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = walk_in_customers)]
pub struct WalkInCustomerEntity {
    pub id: i64,
    pub name: String,
    pub mac_address: String,
    pub plan_amount_ugx: i32,
    pub loyalty_points: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = walk_in_customers)]
pub struct RegisterWalkInCustomerEntity {
    pub name: String,
    pub mac_address: String,
    pub plan_amount_ugx: i32,
    pub loyalty_points: i32,
}
