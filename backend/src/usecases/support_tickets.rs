use std::sync::Arc;

use crates::domain::{
    gateways::tickets::TicketGateway,
    value_objects::tickets::{
        TicketDraft, TicketFilter, TicketFormErrors, TicketPage, filter_tickets,
        paginate_tickets, parse_ticket_from_api,
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Admin ticket listing page size.
const TICKET_PAGE_SIZE: usize = 4;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("ticket validation failed")]
    Validation(TicketFormErrors),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl TicketError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            TicketError::Validation(_) => StatusCode::BAD_REQUEST,
            TicketError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type TicketResult<T> = std::result::Result<T, TicketError>;

pub struct SupportTicketUseCase<G>
where
    G: TicketGateway + Send + Sync + 'static,
{
    ticket_gateway: Arc<G>,
}

impl<G> SupportTicketUseCase<G>
where
    G: TicketGateway + Send + Sync + 'static,
{
    pub fn new(ticket_gateway: Arc<G>) -> Self {
        Self { ticket_gateway }
    }

    /// Validates the draft (all fields at once) and forwards it. Nothing is
    /// sent while any field is invalid.
    pub async fn submit(&self, user_id: Uuid, draft: TicketDraft) -> TicketResult<()> {
        let errors = draft.validate();
        if !errors.is_empty() {
            warn!(
                %user_id,
                status = TicketError::Validation(errors.clone()).status_code().as_u16(),
                "support_tickets: draft rejected by validation"
            );
            return Err(TicketError::Validation(errors));
        }

        self.ticket_gateway
            .submit_ticket(user_id, draft)
            .await
            .map_err(|err| {
                error!(%user_id, error = ?err, "support_tickets: submit failed");
                TicketError::Internal(err)
            })?;

        info!(%user_id, "support_tickets: ticket submitted");

        Ok(())
    }

    pub async fn list_tickets(&self, filter: &TicketFilter, page: usize) -> TicketResult<TicketPage> {
        let raw = self.ticket_gateway.list_tickets().await.map_err(|err| {
            error!(error = ?err, "support_tickets: listing failed");
            TicketError::Internal(err)
        })?;

        let tickets: Vec<_> = raw.iter().map(parse_ticket_from_api).collect();
        info!(ticket_count = tickets.len(), "support_tickets: tickets loaded");

        let matching = filter_tickets(&tickets, filter);
        Ok(paginate_tickets(&matching, page, TICKET_PAGE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::{
        gateways::tickets::MockTicketGateway,
        value_objects::{enums::ticket_priorities::TicketPriority, plan_form::FieldError},
    };
    use serde_json::json;

    fn valid_draft() -> TicketDraft {
        TicketDraft {
            subject: "Charged twice".to_string(),
            category: "billing".to_string(),
            message: "I was charged twice this month.".to_string(),
            priority: TicketPriority::High,
        }
    }

    #[tokio::test]
    async fn invalid_draft_is_never_submitted() {
        // no expectation on submit_ticket: any call would panic the mock
        let ticket_gateway = MockTicketGateway::new();
        let usecase = SupportTicketUseCase::new(Arc::new(ticket_gateway));

        let mut draft = valid_draft();
        draft.message = "short".to_string();
        draft.category = String::new();

        let err = usecase.submit(Uuid::new_v4(), draft).await.unwrap_err();
        match err {
            TicketError::Validation(errors) => {
                assert_eq!(errors.category, Some(FieldError::Required));
                assert_eq!(errors.message, Some(FieldError::TooShort(10)));
                assert!(errors.subject.is_none());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn valid_draft_is_forwarded() {
        let mut ticket_gateway = MockTicketGateway::new();
        ticket_gateway
            .expect_submit_ticket()
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = SupportTicketUseCase::new(Arc::new(ticket_gateway));
        usecase.submit(Uuid::new_v4(), valid_draft()).await.unwrap();
    }

    #[tokio::test]
    async fn listing_filters_and_paginates() {
        let mut ticket_gateway = MockTicketGateway::new();
        ticket_gateway.expect_list_tickets().returning(|| {
            Box::pin(async {
                Ok((1..=6)
                    .map(|n| {
                        json!({
                            "ticketId": n,
                            "userId": format!("user-{n}"),
                            "username": "Someone",
                            "title": "Billing issue",
                            "description": "details",
                        })
                    })
                    .collect())
            })
        });

        let usecase = SupportTicketUseCase::new(Arc::new(ticket_gateway));

        let filter = TicketFilter {
            search: Some("billing".to_string()),
            ..Default::default()
        };
        let page = usecase.list_tickets(&filter, 2).await.unwrap();

        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.tickets.len(), 2);
        assert_eq!(page.tickets[0].ticket_id, 5);
    }
}
