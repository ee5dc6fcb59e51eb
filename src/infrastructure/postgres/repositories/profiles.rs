use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::profiles::{ProfileEntity, RegisterProfileEntity},
    repositories::profiles::ProfileRepository,
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::profiles};

pub struct ProfilePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ProfilePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProfileRepository for ProfilePostgres {
    async fn register(&self, register_profile_entity: RegisterProfileEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(profiles::table)
            .values(&register_profile_entity)
            .returning(profiles::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, profile_id: Uuid) -> Result<Option<ProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = profiles::table
            .filter(profiles::id.eq(profile_id))
            .select(ProfileEntity::as_select())
            .first::<ProfileEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn find_by_email(&self, email: String) -> Result<Option<ProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = profiles::table
            .filter(profiles::email.eq(email))
            .select(ProfileEntity::as_select())
            .first::<ProfileEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn exists_by_email(&self, email: String) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = profiles::table
            .filter(profiles::email.eq(email))
            .select(profiles::id)
            .first::<Uuid>(&mut conn)
            .optional()?;

        Ok(found.is_some())
    }

    async fn exists_by_mac_address(&self, mac_address: String) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = profiles::table
            .filter(profiles::mac_address.eq(mac_address))
            .select(profiles::id)
            .first::<Uuid>(&mut conn)
            .optional()?;

        Ok(found.is_some())
    }

    async fn add_spend(&self, profile_id: Uuid, amount_ugx: i64, points: i32) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(profiles::table)
            .filter(profiles::id.eq(profile_id))
            .set((
                profiles::total_spent_ugx.eq(profiles::total_spent_ugx + amount_ugx),
                profiles::loyalty_points.eq(profiles::loyalty_points + points),
                profiles::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
