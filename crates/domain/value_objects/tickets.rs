use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::{
    enums::{ticket_categories::TicketCategory, ticket_priorities::TicketPriority},
    plan_form::FieldError,
};

/// A support ticket row from the admin listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketModel {
    pub ticket_id: i64,
    pub user_id: String,
    pub username: String,
    pub title: String,
    pub description: String,
}

/// Adapts a raw ticket object; the reporter name has shipped under both
/// `username` and `name`.
pub fn parse_ticket_from_api(raw: &Value) -> TicketModel {
    let username = ["username", "name"]
        .iter()
        .find_map(|key| {
            let text = raw.get(key)?.as_str()?;
            if text.is_empty() {
                return None;
            }
            Some(text.to_string())
        })
        .unwrap_or_default();

    TicketModel {
        ticket_id: raw.get("ticketId").and_then(Value::as_i64).unwrap_or(0),
        user_id: raw
            .get("userId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        username,
        title: raw
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        description: raw
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TicketFilter {
    pub search: Option<String>,
    pub title: Option<String>,
    pub ticket_id: Option<String>,
}

/// Free-text search over title, description, user id and ticket id, plus
/// dedicated title and ticket-id filters. All present conditions must hold.
pub fn filter_tickets(tickets: &[TicketModel], filter: &TicketFilter) -> Vec<TicketModel> {
    tickets
        .iter()
        .filter(|ticket| {
            let matches_search = match filter.search.as_deref() {
                Some(term) if !term.is_empty() => {
                    let lowered = term.to_lowercase();
                    ticket.title.to_lowercase().contains(&lowered)
                        || ticket.description.to_lowercase().contains(&lowered)
                        || ticket.user_id.to_lowercase().contains(&lowered)
                        || ticket.ticket_id.to_string().contains(term)
                }
                _ => true,
            };

            let matches_title = match filter.title.as_deref() {
                Some(title) if !title.is_empty() => ticket
                    .title
                    .to_lowercase()
                    .contains(&title.to_lowercase()),
                _ => true,
            };

            let matches_ticket_id = match filter.ticket_id.as_deref() {
                Some(id) if !id.is_empty() => ticket.ticket_id.to_string().contains(id),
                _ => true,
            };

            matches_search && matches_title && matches_ticket_id
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketPage {
    pub tickets: Vec<TicketModel>,
    pub page: usize,
    pub total_pages: usize,
}

/// Fixed-size pagination; there is always at least one page, and a page
/// past the end comes back empty.
pub fn paginate_tickets(tickets: &[TicketModel], page: usize, page_size: usize) -> TicketPage {
    let page = page.max(1);
    let total_pages = (tickets.len().div_ceil(page_size.max(1))).max(1);

    let start = (page - 1).saturating_mul(page_size);
    let rows = tickets
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    TicketPage {
        tickets: rows,
        page,
        total_pages,
    }
}

/// A support ticket as drafted by the user, before submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub subject: String,
    pub category: String,
    pub message: String,
    #[serde(default)]
    pub priority: TicketPriority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketFormErrors {
    pub subject: Option<FieldError>,
    pub category: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl TicketFormErrors {
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.category.is_none() && self.message.is_none()
    }
}

impl TicketDraft {
    /// Runs every check so all errors surface together, same policy as the
    /// plan form.
    pub fn validate(&self) -> TicketFormErrors {
        let subject = if self.subject.trim().is_empty() {
            Some(FieldError::Required)
        } else {
            None
        };

        let category = if TicketCategory::from_str(self.category.trim()).is_none() {
            Some(FieldError::Required)
        } else {
            None
        };

        let message = {
            let trimmed = self.message.trim();
            if trimmed.is_empty() {
                Some(FieldError::Required)
            } else if trimmed.chars().count() < 10 {
                Some(FieldError::TooShort(10))
            } else {
                None
            }
        };

        TicketFormErrors {
            subject,
            category,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tickets() -> Vec<TicketModel> {
        vec![
            TicketModel {
                ticket_id: 101,
                user_id: "user-a".to_string(),
                username: "Alice".to_string(),
                title: "Billing issue".to_string(),
                description: "Charged twice this month".to_string(),
            },
            TicketModel {
                ticket_id: 102,
                user_id: "user-b".to_string(),
                username: "Bob".to_string(),
                title: "Cannot download invoice".to_string(),
                description: "PDF button does nothing".to_string(),
            },
            TicketModel {
                ticket_id: 205,
                user_id: "user-c".to_string(),
                username: "Cara".to_string(),
                title: "Feature request".to_string(),
                description: "Dark mode please".to_string(),
            },
        ]
    }

    #[test]
    fn parses_ticket_with_name_fallback() {
        let ticket = parse_ticket_from_api(&json!({
            "ticketId": 7,
            "userId": "user-x",
            "name": "Xena",
            "title": "Login broken",
            "description": "500 on sign-in",
        }));

        assert_eq!(ticket.ticket_id, 7);
        assert_eq!(ticket.username, "Xena");
        assert_eq!(ticket.title, "Login broken");
    }

    #[test]
    fn search_spans_all_columns() {
        let filter = TicketFilter {
            search: Some("205".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_tickets(&sample_tickets(), &filter).len(), 1);

        let filter = TicketFilter {
            search: Some("user-b".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_tickets(&sample_tickets(), &filter).len(), 1);

        let filter = TicketFilter {
            search: Some("invoice".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_tickets(&sample_tickets(), &filter).len(), 1);
    }

    #[test]
    fn filters_are_conjunctive() {
        let filter = TicketFilter {
            search: Some("billing".to_string()),
            title: Some("feature".to_string()),
            ticket_id: None,
        };
        assert!(filter_tickets(&sample_tickets(), &filter).is_empty());

        let filter = TicketFilter {
            search: None,
            title: Some("billing".to_string()),
            ticket_id: Some("101".to_string()),
        };
        assert_eq!(filter_tickets(&sample_tickets(), &filter).len(), 1);
    }

    #[test]
    fn pagination_always_has_one_page() {
        let page = paginate_tickets(&[], 1, 4);
        assert_eq!(page.total_pages, 1);
        assert!(page.tickets.is_empty());
    }

    #[test]
    fn pagination_slices_fixed_pages() {
        let tickets = sample_tickets();
        let page = paginate_tickets(&tickets, 1, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.tickets.len(), 2);

        let page = paginate_tickets(&tickets, 2, 2);
        assert_eq!(page.tickets.len(), 1);
        assert_eq!(page.tickets[0].ticket_id, 205);

        let page = paginate_tickets(&tickets, 5, 2);
        assert!(page.tickets.is_empty());
    }

    #[test]
    fn draft_validation_reports_all_errors() {
        let errors = TicketDraft::default().validate();
        assert_eq!(errors.subject, Some(FieldError::Required));
        assert_eq!(errors.category, Some(FieldError::Required));
        assert_eq!(errors.message, Some(FieldError::Required));

        let errors = TicketDraft {
            subject: "Broken".to_string(),
            category: "technical".to_string(),
            message: "too short".to_string(),
            priority: TicketPriority::High,
        }
        .validate();
        assert!(errors.subject.is_none());
        assert!(errors.category.is_none());
        assert_eq!(errors.message, Some(FieldError::TooShort(10)));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let errors = TicketDraft {
            subject: "Hello".to_string(),
            category: "gardening".to_string(),
            message: "long enough message".to_string(),
            priority: TicketPriority::default(),
        }
        .validate();
        assert_eq!(errors.category, Some(FieldError::Required));
    }
}
