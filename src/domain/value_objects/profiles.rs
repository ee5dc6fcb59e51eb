use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::profiles::ProfileEntity;
use crate::domain::value_objects::loyalty::{self, NextReward};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub mac_address: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInModel {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenModel {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileModel {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub mac_address: String,
    pub loyalty_points: i32,
    pub total_spent_ugx: i64,
}

impl From<ProfileEntity> for ProfileModel {
    fn from(entity: ProfileEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_number: entity.phone_number,
            mac_address: entity.mac_address,
            loyalty_points: entity.loyalty_points,
            total_spent_ugx: entity.total_spent_ugx,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoyaltySnapshotModel {
    pub loyalty_points: i32,
    pub total_spent_ugx: i64,
    pub next_reward: Option<NextReward>,
    pub progress_percent: f64,
}

impl LoyaltySnapshotModel {
    pub fn for_points(loyalty_points: i32, total_spent_ugx: i64) -> Self {
        Self {
            loyalty_points,
            total_spent_ugx,
            next_reward: loyalty::next_reward(loyalty_points),
            progress_percent: loyalty::progress_percent(loyalty_points),
        }
    }
}
