pub mod billing_cycles;
pub mod invoice_statuses;
pub mod ticket_categories;
pub mod ticket_priorities;
