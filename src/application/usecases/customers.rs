use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::walk_in_customers::RegisterWalkInCustomerEntity,
    repositories::walk_in_customers::WalkInCustomerRepository,
    value_objects::{
        customers::{RegisterWalkInCustomerModel, WalkInCustomerModel},
        loyalty,
    },
};

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("plan amount must be positive")]
    InvalidPlanAmount,
    #[error("MAC address already exists")]
    DuplicateMacAddress,
    #[error("customer not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CustomerError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CustomerError::MissingField(_) | CustomerError::InvalidPlanAmount => {
                StatusCode::BAD_REQUEST
            }
            CustomerError::DuplicateMacAddress => StatusCode::CONFLICT,
            CustomerError::NotFound => StatusCode::NOT_FOUND,
            CustomerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type CustomerResult<T> = std::result::Result<T, CustomerError>;

pub struct CustomerUseCase<C>
where
    C: WalkInCustomerRepository + Send + Sync + 'static,
{
    customer_repo: Arc<C>,
}

impl<C> CustomerUseCase<C>
where
    C: WalkInCustomerRepository + Send + Sync + 'static,
{
    pub fn new(customer_repo: Arc<C>) -> Self {
        Self { customer_repo }
    }

    /// Registers a walk-in customer. The MAC address must be unique; loyalty
    /// points are derived from the plan amount up front.
    pub async fn register(
        &self,
        register_model: RegisterWalkInCustomerModel,
    ) -> CustomerResult<WalkInCustomerModel> {
        let name = register_model.name.trim().to_string();
        let mac_address = register_model.mac_address.trim().to_string();

        if name.is_empty() {
            return Err(CustomerError::MissingField("name"));
        }
        if mac_address.is_empty() {
            return Err(CustomerError::MissingField("mac_address"));
        }
        if register_model.plan_amount_ugx <= 0 {
            let err = CustomerError::InvalidPlanAmount;
            warn!(
                plan_amount_ugx = register_model.plan_amount_ugx,
                status = err.status_code().as_u16(),
                "customers: registration rejected, invalid plan amount"
            );
            return Err(err);
        }

        if self
            .customer_repo
            .exists_by_mac_address(mac_address.clone())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "customers: failed to check for duplicate MAC address");
                CustomerError::Internal(err)
            })?
        {
            let err = CustomerError::DuplicateMacAddress;
            warn!(
                mac_address,
                status = err.status_code().as_u16(),
                "customers: registration rejected, MAC address already exists"
            );
            return Err(err);
        }

        let loyalty_points = loyalty::points_for_amount(register_model.plan_amount_ugx);
        let customer = self
            .customer_repo
            .register(RegisterWalkInCustomerEntity {
                name,
                mac_address,
                plan_amount_ugx: register_model.plan_amount_ugx,
                loyalty_points,
            })
            .await
            .map_err(|err| {
                error!(db_error = ?err, "customers: failed to register walk-in customer");
                CustomerError::Internal(err)
            })?;

        info!(
            customer_id = customer.id,
            loyalty_points, "customers: walk-in customer registered"
        );

        Ok(WalkInCustomerModel::from(customer))
    }

    pub async fn list(&self, search: Option<String>) -> CustomerResult<Vec<WalkInCustomerModel>> {
        let search = search
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());

        let customers = self.customer_repo.list(search).await.map_err(|err| {
            error!(db_error = ?err, "customers: failed to list walk-in customers");
            CustomerError::Internal(err)
        })?;

        Ok(customers
            .into_iter()
            .map(WalkInCustomerModel::from)
            .collect())
    }

    /// Removes exactly one record; unknown ids are a not-found error.
    pub async fn delete(&self, customer_id: i64) -> CustomerResult<()> {
        let removed = self
            .customer_repo
            .delete(customer_id)
            .await
            .map_err(|err| {
                error!(
                    customer_id,
                    db_error = ?err,
                    "customers: failed to delete walk-in customer"
                );
                CustomerError::Internal(err)
            })?;

        if removed == 0 {
            let err = CustomerError::NotFound;
            warn!(
                customer_id,
                status = err.status_code().as_u16(),
                "customers: delete rejected, customer not found"
            );
            return Err(err);
        }

        info!(customer_id, "customers: walk-in customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::walk_in_customers::WalkInCustomerEntity,
        repositories::walk_in_customers::MockWalkInCustomerRepository,
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_register() -> RegisterWalkInCustomerModel {
        RegisterWalkInCustomerModel {
            name: "Sarah Nakato".to_string(),
            mac_address: "00:1B:44:11:3A:B7".to_string(),
            plan_amount_ugx: 6_500,
        }
    }

    #[tokio::test]
    async fn duplicate_mac_address_is_rejected_before_insert() {
        let mut customer_repo = MockWalkInCustomerRepository::new();
        customer_repo
            .expect_exists_by_mac_address()
            .with(eq("00:1B:44:11:3A:B7".to_string()))
            .returning(|_| Ok(true));
        customer_repo.expect_register().never();

        let usecase = CustomerUseCase::new(Arc::new(customer_repo));

        let err = usecase.register(sample_register()).await.unwrap_err();
        assert!(matches!(err, CustomerError::DuplicateMacAddress));
    }

    #[tokio::test]
    async fn registration_derives_loyalty_points_from_plan_amount() {
        let mut customer_repo = MockWalkInCustomerRepository::new();
        customer_repo
            .expect_exists_by_mac_address()
            .returning(|_| Ok(false));
        customer_repo
            .expect_register()
            .withf(|entity| entity.loyalty_points == 6 && entity.plan_amount_ugx == 6_500)
            .returning(|entity| {
                Ok(WalkInCustomerEntity {
                    id: 1,
                    name: entity.name,
                    mac_address: entity.mac_address,
                    plan_amount_ugx: entity.plan_amount_ugx,
                    loyalty_points: entity.loyalty_points,
                    created_at: Utc::now(),
                })
            });

        let usecase = CustomerUseCase::new(Arc::new(customer_repo));

        let customer = usecase.register(sample_register()).await.unwrap();
        assert_eq!(customer.loyalty_points, 6);
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let customer_repo = MockWalkInCustomerRepository::new();
        let usecase = CustomerUseCase::new(Arc::new(customer_repo));

        let mut model = sample_register();
        model.name = "  ".to_string();

        let err = usecase.register(model).await.unwrap_err();
        assert!(matches!(err, CustomerError::MissingField("name")));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let mut customer_repo = MockWalkInCustomerRepository::new();
        customer_repo
            .expect_delete()
            .with(eq(5i64))
            .times(1)
            .returning(|_| Ok(1));

        let usecase = CustomerUseCase::new(Arc::new(customer_repo));

        usecase.delete(5).await.unwrap();
    }

    #[tokio::test]
    async fn delete_of_unknown_customer_is_not_found() {
        let mut customer_repo = MockWalkInCustomerRepository::new();
        customer_repo.expect_delete().returning(|_| Ok(0));

        let usecase = CustomerUseCase::new(Arc::new(customer_repo));

        let err = usecase.delete(99).await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound));
    }

    #[tokio::test]
    async fn blank_search_term_lists_everything() {
        let mut customer_repo = MockWalkInCustomerRepository::new();
        customer_repo
            .expect_list()
            .with(eq(None::<String>))
            .returning(|_| Ok(vec![]));

        let usecase = CustomerUseCase::new(Arc::new(customer_repo));

        let customers = usecase.list(Some("   ".to_string())).await.unwrap();
        assert!(customers.is_empty());
    }
}
