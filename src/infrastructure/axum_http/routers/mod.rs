pub mod auth;
pub mod customers;
pub mod portal;
pub mod sales;
