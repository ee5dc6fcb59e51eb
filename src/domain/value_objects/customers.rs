use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::walk_in_customers::WalkInCustomerEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterWalkInCustomerModel {
    pub name: String,
    pub mac_address: String,
    pub plan_amount_ugx: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalkInCustomerModel {
    pub id: i64,
    pub name: String,
    pub mac_address: String,
    pub plan_amount_ugx: i32,
    pub loyalty_points: i32,
    pub created_at: DateTime<Utc>,
}

impl From<WalkInCustomerEntity> for WalkInCustomerModel {
    fn from(entity: WalkInCustomerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            mac_address: entity.mac_address,
            plan_amount_ugx: entity.plan_amount_ugx,
            loyalty_points: entity.loyalty_points,
            created_at: entity.created_at,
        }
    }
}
