use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::dsl::{count_star, sum};
use diesel::{insert_into, prelude::*};
use std::sync::Arc;

use crate::domain::{entities::sales::InsertSaleEntity, repositories::sales::SaleRepository};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::sales};

pub struct SalePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SalePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SaleRepository for SalePostgres {
    async fn record_sale(&self, insert_sale_entity: InsertSaleEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(sales::table)
            .values(&insert_sale_entity)
            .returning(sales::id)
            .get_result::<i64>(&mut conn)?;

        Ok(result)
    }

    async fn revenue_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = sales::table
            .filter(sales::sold_at.ge(from))
            .filter(sales::sold_at.lt(to))
            .select(sum(sales::total_ugx))
            .first::<Option<i64>>(&mut conn)?;

        Ok(total.unwrap_or(0))
    }

    async fn count_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = sales::table
            .filter(sales::sold_at.ge(from))
            .filter(sales::sold_at.lt(to))
            .select(count_star())
            .first::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn count_by_plan_code_between(
        &self,
        plan_code: String,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = sales::table
            .filter(sales::plan_code.eq(plan_code))
            .filter(sales::sold_at.ge(from))
            .filter(sales::sold_at.lt(to))
            .select(count_star())
            .first::<i64>(&mut conn)?;

        Ok(count)
    }
}
