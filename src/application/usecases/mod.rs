pub mod authentication;
pub mod customers;
pub mod portal;
pub mod sales;
pub mod subscriptions;
