pub mod enums;
pub mod feature_diff;
pub mod invoices;
pub mod payment_methods;
pub mod plan_form;
pub mod plans;
pub mod subscriptions;
pub mod tickets;
