use serde::{Deserialize, Serialize};

use crate::domain::entities::plans::PlanEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanModel {
    pub id: i64,
    pub name: String,
    pub duration_days: i32,
    pub price_ugx: i32,
    pub final_price_ugx: i32,
    pub discount_percent: i32,
    pub is_active: bool,
}

impl From<PlanEntity> for PlanModel {
    fn from(entity: PlanEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            duration_days: entity.duration_days,
            price_ugx: entity.price_ugx,
            final_price_ugx: entity.final_price_ugx,
            discount_percent: entity.discount_percent,
            is_active: entity.is_active,
        }
    }
}
