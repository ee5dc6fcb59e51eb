pub mod payment_methods;
pub mod plan_codes;
pub mod roles;
