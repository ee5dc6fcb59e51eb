pub mod customers;
pub mod enums;
pub mod loyalty;
pub mod plans;
pub mod pricing;
pub mod profiles;
pub mod sales;
pub mod subscriptions;
