pub mod plans;
pub mod profiles;
pub mod sales;
pub mod subscriptions;
pub mod walk_in_customers;
