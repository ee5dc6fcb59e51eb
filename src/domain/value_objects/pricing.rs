use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::plan_codes::PlanCode;

/// Shop tariffs in UGX. Final prices are fixed amounts, not derived from the
/// discount percent (the weekly plan knocks off a flat 500).
pub const DAILY_PRICE_UGX: i32 = 1_000;
pub const WEEKLY_PRICE_UGX: i32 = 7_000;
pub const WEEKLY_FINAL_PRICE_UGX: i32 = 6_500;
pub const MONTHLY_PRICE_UGX: i32 = 30_000;
pub const MONTHLY_FINAL_PRICE_UGX: i32 = 27_000;

pub const MIN_DAILY_DAYS: i32 = 1;
pub const MAX_DAILY_DAYS: i32 = 25;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceQuote {
    pub plan_code: PlanCode,
    pub days: i32,
    pub subtotal_ugx: i32,
    pub discount_ugx: i32,
    pub total_ugx: i32,
}

impl PriceQuote {
    /// Quotes a plan sale. `days` only matters for the daily plan and is
    /// clamped to the range the shop sells.
    pub fn for_plan(plan_code: PlanCode, days: i32) -> Self {
        match plan_code {
            PlanCode::Daily => {
                let days = days.clamp(MIN_DAILY_DAYS, MAX_DAILY_DAYS);
                let subtotal_ugx = DAILY_PRICE_UGX * days;
                Self {
                    plan_code,
                    days,
                    subtotal_ugx,
                    discount_ugx: 0,
                    total_ugx: subtotal_ugx,
                }
            }
            PlanCode::Weekly => Self {
                plan_code,
                days: 7,
                subtotal_ugx: WEEKLY_PRICE_UGX,
                discount_ugx: WEEKLY_PRICE_UGX - WEEKLY_FINAL_PRICE_UGX,
                total_ugx: WEEKLY_FINAL_PRICE_UGX,
            },
            PlanCode::Monthly => Self {
                plan_code,
                days: 30,
                subtotal_ugx: MONTHLY_PRICE_UGX,
                discount_ugx: MONTHLY_PRICE_UGX - MONTHLY_FINAL_PRICE_UGX,
                total_ugx: MONTHLY_FINAL_PRICE_UGX,
            },
        }
    }

    /// Change due for a cash payment. Never negative.
    pub fn change_for_cash(&self, cash_received_ugx: i32) -> i32 {
        (cash_received_ugx - self.total_ugx).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_plan_is_discounted_to_27000() {
        let quote = PriceQuote::for_plan(PlanCode::Monthly, 1);

        assert_eq!(quote.subtotal_ugx, 30_000);
        assert_eq!(quote.discount_ugx, 3_000);
        assert_eq!(quote.total_ugx, 27_000);
        assert_eq!(quote.days, 30);
    }

    #[test]
    fn weekly_plan_is_discounted_to_6500() {
        let quote = PriceQuote::for_plan(PlanCode::Weekly, 1);

        assert_eq!(quote.subtotal_ugx, 7_000);
        assert_eq!(quote.discount_ugx, 500);
        assert_eq!(quote.total_ugx, 6_500);
        assert_eq!(quote.days, 7);
    }

    #[test]
    fn daily_plan_multiplies_by_days() {
        let quote = PriceQuote::for_plan(PlanCode::Daily, 5);

        assert_eq!(quote.subtotal_ugx, 5_000);
        assert_eq!(quote.discount_ugx, 0);
        assert_eq!(quote.total_ugx, 5_000);
    }

    #[test]
    fn daily_days_are_clamped_to_sellable_range() {
        assert_eq!(PriceQuote::for_plan(PlanCode::Daily, 0).days, 1);
        assert_eq!(PriceQuote::for_plan(PlanCode::Daily, -3).days, 1);
        assert_eq!(PriceQuote::for_plan(PlanCode::Daily, 100).days, 25);
        assert_eq!(PriceQuote::for_plan(PlanCode::Daily, 100).total_ugx, 25_000);
    }

    #[test]
    fn change_is_never_negative() {
        let quote = PriceQuote::for_plan(PlanCode::Weekly, 1);

        assert_eq!(quote.change_for_cash(10_000), 3_500);
        assert_eq!(quote.change_for_cash(6_500), 0);
        assert_eq!(quote.change_for_cash(5_000), 0);
    }
}
