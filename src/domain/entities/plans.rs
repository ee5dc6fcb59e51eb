use diesel::prelude::*;

use crate::infrastructure::postgres::schema::plans;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = plans)]
pub struct PlanEntity {
    pub id: i64,
    pub name: String,
    pub duration_days: i32,
    pub price_ugx: i32,
    pub final_price_ugx: i32,
    pub discount_percent: i32,
    pub is_active: bool,
}
