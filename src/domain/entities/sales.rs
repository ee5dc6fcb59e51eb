use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::sales;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = sales)]
pub struct SaleEntity {
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub plan_code: String,
    pub days: i32,
    pub subtotal_ugx: i32,
    pub discount_ugx: i32,
    pub total_ugx: i32,
    pub payment_method: String,
    pub cash_received_ugx: Option<i32>,
    pub change_ugx: i32,
    pub loyalty_points_earned: i32,
    pub sold_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sales)]
pub struct InsertSaleEntity {
    pub customer_name: String,
    pub customer_phone: String,
    pub plan_code: String,
    pub days: i32,
    pub subtotal_ugx: i32,
    pub discount_ugx: i32,
    pub total_ugx: i32,
    pub payment_method: String,
    pub cash_received_ugx: Option<i32>,
    pub change_ugx: i32,
    pub loyalty_points_earned: i32,
    pub sold_at: DateTime<Utc>,
}
