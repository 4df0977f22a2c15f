pub mod admin_plans;
pub mod billing_history;
pub mod payment_methods;
pub mod plans;
pub mod subscriptions;
pub mod tickets;
