use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Datelike, NaiveTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::sales::InsertSaleEntity,
    repositories::sales::SaleRepository,
    value_objects::{
        enums::{payment_methods::PaymentMethod, plan_codes::PlanCode},
        loyalty,
        pricing::PriceQuote,
        sales::{QuoteRequestModel, ReceiptModel, SaleRequestModel, SalesSummaryModel},
    },
};

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("cash received is required for cash payments")]
    CashAmountRequired,
    #[error("cash received {received} UGX is less than the {total} UGX due")]
    InsufficientCash { received: i32, total: i32 },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SalesError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SalesError::MissingField(_)
            | SalesError::CashAmountRequired
            | SalesError::InsufficientCash { .. } => StatusCode::BAD_REQUEST,
            SalesError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type SalesResult<T> = std::result::Result<T, SalesError>;

pub struct SalesUseCase<S>
where
    S: SaleRepository + Send + Sync + 'static,
{
    sale_repo: Arc<S>,
}

impl<S> SalesUseCase<S>
where
    S: SaleRepository + Send + Sync + 'static,
{
    pub fn new(sale_repo: Arc<S>) -> Self {
        Self { sale_repo }
    }

    /// Prices a plan without recording anything.
    pub fn quote(&self, quote_request: QuoteRequestModel) -> PriceQuote {
        PriceQuote::for_plan(quote_request.plan_code, quote_request.days.unwrap_or(1))
    }

    pub async fn process_sale(&self, sale_request: SaleRequestModel) -> SalesResult<ReceiptModel> {
        let customer_name = sale_request.customer_name.trim().to_string();
        let customer_phone = sale_request.customer_phone.trim().to_string();

        if customer_name.is_empty() {
            return Err(SalesError::MissingField("customer_name"));
        }
        if customer_phone.is_empty() {
            return Err(SalesError::MissingField("customer_phone"));
        }

        let quote = PriceQuote::for_plan(sale_request.plan_code, sale_request.days.unwrap_or(1));

        let (cash_received_ugx, change_ugx) = match sale_request.payment_method {
            PaymentMethod::Cash => {
                let received = sale_request.cash_received_ugx.ok_or_else(|| {
                    let err = SalesError::CashAmountRequired;
                    warn!(
                        status = err.status_code().as_u16(),
                        "sales: sale rejected, cash amount missing"
                    );
                    err
                })?;

                if received < quote.total_ugx {
                    let err = SalesError::InsufficientCash {
                        received,
                        total: quote.total_ugx,
                    };
                    warn!(
                        received,
                        total = quote.total_ugx,
                        status = err.status_code().as_u16(),
                        "sales: sale rejected, insufficient cash"
                    );
                    return Err(err);
                }

                (Some(received), quote.change_for_cash(received))
            }
            // Mobile money and bank transfers settle exactly.
            _ => (None, 0),
        };

        let loyalty_points_earned = loyalty::points_for_amount(quote.total_ugx);
        let sold_at = Utc::now();

        let sale_id = self
            .sale_repo
            .record_sale(InsertSaleEntity {
                customer_name: customer_name.clone(),
                customer_phone,
                plan_code: quote.plan_code.to_string(),
                days: quote.days,
                subtotal_ugx: quote.subtotal_ugx,
                discount_ugx: quote.discount_ugx,
                total_ugx: quote.total_ugx,
                payment_method: sale_request.payment_method.to_string(),
                cash_received_ugx,
                change_ugx,
                loyalty_points_earned,
                sold_at,
            })
            .await
            .map_err(|err| {
                error!(db_error = ?err, "sales: failed to record sale");
                SalesError::Internal(err)
            })?;

        info!(
            sale_id,
            plan_code = %quote.plan_code,
            total_ugx = quote.total_ugx,
            payment_method = %sale_request.payment_method,
            "sales: sale recorded"
        );

        Ok(ReceiptModel {
            sale_id,
            customer_name,
            plan_code: quote.plan_code,
            days: quote.days,
            subtotal_ugx: quote.subtotal_ugx,
            discount_ugx: quote.discount_ugx,
            total_ugx: quote.total_ugx,
            payment_method: sale_request.payment_method,
            cash_received_ugx,
            change_ugx,
            loyalty_points_earned,
            sold_at,
        })
    }

    /// Today's and this month's headline numbers for the attendant dashboard.
    pub async fn dashboard_summary(&self) -> SalesResult<SalesSummaryModel> {
        let now = Utc::now();
        let (today_start, month_start) = Self::period_starts(now)?;

        let today_revenue_ugx = self
            .sale_repo
            .revenue_between(today_start, now)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "sales: failed to aggregate today's revenue");
                SalesError::Internal(err)
            })?;

        let today_transactions = self
            .sale_repo
            .count_between(today_start, now)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "sales: failed to count today's transactions");
                SalesError::Internal(err)
            })?;

        let mut per_plan = [0i64; 3];
        for (slot, plan_code) in per_plan
            .iter_mut()
            .zip([PlanCode::Daily, PlanCode::Weekly, PlanCode::Monthly])
        {
            *slot = self
                .sale_repo
                .count_by_plan_code_between(plan_code.to_string(), today_start, now)
                .await
                .map_err(|err| {
                    error!(
                        %plan_code,
                        db_error = ?err,
                        "sales: failed to count today's sales for plan"
                    );
                    SalesError::Internal(err)
                })?;
        }

        let month_revenue_ugx = self
            .sale_repo
            .revenue_between(month_start, now)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "sales: failed to aggregate month revenue");
                SalesError::Internal(err)
            })?;

        Ok(SalesSummaryModel {
            today_revenue_ugx,
            today_transactions,
            today_daily_plans: per_plan[0],
            today_weekly_plans: per_plan[1],
            today_monthly_plans: per_plan[2],
            month_revenue_ugx,
        })
    }

    fn period_starts(now: DateTime<Utc>) -> SalesResult<(DateTime<Utc>, DateTime<Utc>)> {
        let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let month_start = today_start
            .with_day(1)
            .context("failed to compute start of month")?;

        Ok((today_start, month_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::sales::MockSaleRepository;

    fn sample_sale(payment_method: PaymentMethod, cash: Option<i32>) -> SaleRequestModel {
        SaleRequestModel {
            customer_name: "Grace Auma".to_string(),
            customer_phone: "+256772000111".to_string(),
            plan_code: PlanCode::Monthly,
            days: None,
            payment_method,
            cash_received_ugx: cash,
        }
    }

    #[tokio::test]
    async fn monthly_cash_sale_computes_discount_change_and_points() {
        let mut sale_repo = MockSaleRepository::new();
        sale_repo
            .expect_record_sale()
            .withf(|entity| {
                entity.subtotal_ugx == 30_000
                    && entity.discount_ugx == 3_000
                    && entity.total_ugx == 27_000
                    && entity.cash_received_ugx == Some(30_000)
                    && entity.change_ugx == 3_000
                    && entity.loyalty_points_earned == 27
                    && entity.plan_code == "monthly"
            })
            .returning(|_| Ok(42));

        let usecase = SalesUseCase::new(Arc::new(sale_repo));

        let receipt = usecase
            .process_sale(sample_sale(PaymentMethod::Cash, Some(30_000)))
            .await
            .unwrap();

        assert_eq!(receipt.sale_id, 42);
        assert_eq!(receipt.total_ugx, 27_000);
        assert_eq!(receipt.change_ugx, 3_000);
        assert_eq!(receipt.loyalty_points_earned, 27);
    }

    #[tokio::test]
    async fn exact_cash_leaves_no_change() {
        let mut sale_repo = MockSaleRepository::new();
        sale_repo
            .expect_record_sale()
            .withf(|entity| entity.change_ugx == 0)
            .returning(|_| Ok(1));

        let usecase = SalesUseCase::new(Arc::new(sale_repo));

        let receipt = usecase
            .process_sale(sample_sale(PaymentMethod::Cash, Some(27_000)))
            .await
            .unwrap();
        assert_eq!(receipt.change_ugx, 0);
    }

    #[tokio::test]
    async fn insufficient_cash_is_rejected() {
        let mut sale_repo = MockSaleRepository::new();
        sale_repo.expect_record_sale().never();

        let usecase = SalesUseCase::new(Arc::new(sale_repo));

        let err = usecase
            .process_sale(sample_sale(PaymentMethod::Cash, Some(20_000)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SalesError::InsufficientCash {
                received: 20_000,
                total: 27_000
            }
        ));
    }

    #[tokio::test]
    async fn cash_sale_without_amount_is_rejected() {
        let mut sale_repo = MockSaleRepository::new();
        sale_repo.expect_record_sale().never();

        let usecase = SalesUseCase::new(Arc::new(sale_repo));

        let err = usecase
            .process_sale(sample_sale(PaymentMethod::Cash, None))
            .await
            .unwrap_err();
        assert!(matches!(err, SalesError::CashAmountRequired));
    }

    #[tokio::test]
    async fn mobile_money_sale_ignores_cash_fields() {
        let mut sale_repo = MockSaleRepository::new();
        sale_repo
            .expect_record_sale()
            .withf(|entity| {
                entity.payment_method == "mtn_momo"
                    && entity.cash_received_ugx.is_none()
                    && entity.change_ugx == 0
            })
            .returning(|_| Ok(7));

        let usecase = SalesUseCase::new(Arc::new(sale_repo));

        let receipt = usecase
            .process_sale(sample_sale(PaymentMethod::MtnMomo, Some(50_000)))
            .await
            .unwrap();
        assert_eq!(receipt.cash_received_ugx, None);
    }

    #[tokio::test]
    async fn missing_customer_name_is_rejected() {
        let sale_repo = MockSaleRepository::new();
        let usecase = SalesUseCase::new(Arc::new(sale_repo));

        let mut model = sample_sale(PaymentMethod::Cash, Some(30_000));
        model.customer_name = " ".to_string();

        let err = usecase.process_sale(model).await.unwrap_err();
        assert!(matches!(err, SalesError::MissingField("customer_name")));
    }

    #[tokio::test]
    async fn dashboard_summary_aggregates_today_and_month() {
        let mut sale_repo = MockSaleRepository::new();
        sale_repo
            .expect_revenue_between()
            .times(2)
            .returning(|_, _| Ok(54_000));
        sale_repo.expect_count_between().returning(|_, _| Ok(12));
        sale_repo
            .expect_count_by_plan_code_between()
            .returning(|plan_code, _, _| match plan_code.as_str() {
                "daily" => Ok(8),
                "weekly" => Ok(3),
                _ => Ok(1),
            });

        let usecase = SalesUseCase::new(Arc::new(sale_repo));

        let summary = usecase.dashboard_summary().await.unwrap();
        assert_eq!(summary.today_revenue_ugx, 54_000);
        assert_eq!(summary.month_revenue_ugx, 54_000);
        assert_eq!(summary.today_transactions, 12);
        assert_eq!(summary.today_daily_plans, 8);
        assert_eq!(summary.today_weekly_plans, 3);
        assert_eq!(summary.today_monthly_plans, 1);
    }
}
