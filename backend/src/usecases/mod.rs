pub mod billing_history;
pub mod payment_methods;
pub mod plan_admin;
pub mod plan_catalog;
pub mod plan_editor;
pub mod subscriptions;
pub mod support_tickets;
