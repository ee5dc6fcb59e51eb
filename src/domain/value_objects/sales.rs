use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::{payment_methods::PaymentMethod, plan_codes::PlanCode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequestModel {
    pub plan_code: PlanCode,
    pub days: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequestModel {
    pub customer_name: String,
    pub customer_phone: String,
    pub plan_code: PlanCode,
    pub days: Option<i32>,
    pub payment_method: PaymentMethod,
    pub cash_received_ugx: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptModel {
    pub sale_id: i64,
    pub customer_name: String,
    pub plan_code: PlanCode,
    pub days: i32,
    pub subtotal_ugx: i32,
    pub discount_ugx: i32,
    pub total_ugx: i32,
    pub payment_method: PaymentMethod,
    pub cash_received_ugx: Option<i32>,
    pub change_ugx: i32,
    pub loyalty_points_earned: i32,
    pub sold_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesSummaryModel {
    pub today_revenue_ugx: i64,
    pub today_transactions: i64,
    pub today_daily_plans: i64,
    pub today_weekly_plans: i64,
    pub today_monthly_plans: i64,
    pub month_revenue_ugx: i64,
}
