use crate::api::CardApi;
use cardpost_domain::{CardForm, Notification, SubmitBlocked};

/// Runs one full submission: validate, send a single request, settle.
///
/// Returns the notification for the settled request, or why no request was
/// sent. The form is idle again when this returns.
pub async fn submit<A>(form: &mut CardForm, api: &A) -> Result<Notification, SubmitBlocked>
where
    A: CardApi + ?Sized,
{
    let request = form.begin_submit()?;
    let outcome = api.create_card(&request).await;
    Ok(form.settle(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockCardApi;
    use cardpost_core::CardPostError;
    use cardpost_domain::{
        CardDraft, CreatedCard, DraftField, FieldError, FormPhase, NotificationKind,
    };

    fn filled_form() -> CardForm {
        CardForm::with_draft(CardDraft::new(
            "Task A",
            "Write docs",
            "2024-05-10",
            "2024-05-01",
        ))
    }

    #[tokio::test]
    async fn test_empty_field_blocks_without_network_call() {
        for field in DraftField::ALL {
            let mut api = MockCardApi::new();
            api.expect_create_card().times(0);

            let mut form = filled_form();
            form.set_field(field, "");

            let blocked = submit(&mut form, &api).await.unwrap_err();
            let SubmitBlocked::Invalid(errors) = blocked else {
                panic!("expected validation errors");
            };
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(field), Some(FieldError::MissingField));
        }
    }

    #[tokio::test]
    async fn test_invalid_date_blocks_without_network_call() {
        let mut api = MockCardApi::new();
        api.expect_create_card().times(0);

        let mut form = filled_form();
        form.set_field(DraftField::StartDate, "next week");

        let blocked = submit(&mut form, &api).await.unwrap_err();
        let SubmitBlocked::Invalid(errors) = blocked else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.get(DraftField::StartDate), Some(FieldError::InvalidDate));
    }

    #[tokio::test]
    async fn test_valid_draft_sends_one_request_and_resets() {
        let mut api = MockCardApi::new();
        api.expect_create_card()
            .withf(|request| {
                request.name == "Task A"
                    && request.desc == "Write docs"
                    && request.due == "2024-05-10"
                    && request.start == "2024-05-01"
            })
            .times(1)
            .returning(|_| Ok(CreatedCard::named("Task A")));

        let mut form = filled_form();
        let notification = submit(&mut form, &api).await.unwrap();

        assert_eq!(notification.kind, NotificationKind::Success);
        assert!(notification.message.contains("Task A"));
        assert_eq!(form.draft(), &CardDraft::default());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_remote_failure_keeps_draft() {
        let mut api = MockCardApi::new();
        api.expect_create_card().times(1).returning(|_| {
            Err(CardPostError::Remote {
                status: 401,
                detail: "Unauthorized".to_string(),
            })
        });

        let mut form = filled_form();
        let notification = submit(&mut form, &api).await.unwrap();

        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(notification.message.contains("Unauthorized"));
        assert_eq!(form.draft(), filled_form().draft());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_network_failure_leaves_form_usable() {
        let mut api = MockCardApi::new();
        let mut calls = 0;
        api.expect_create_card().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(CardPostError::Network("connection refused".to_string()))
            } else {
                Ok(CreatedCard::named("Task A"))
            }
        });

        let mut form = filled_form();
        let first = submit(&mut form, &api).await.unwrap();
        assert_eq!(first.message, "Error creating card: connection refused");

        let second = submit(&mut form, &api).await.unwrap();
        assert!(second.is_success());
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_sends_nothing() {
        let mut api = MockCardApi::new();
        api.expect_create_card().times(0);

        let mut form = filled_form();
        form.begin_submit().unwrap();

        assert_eq!(
            submit(&mut form, &api).await.unwrap_err(),
            SubmitBlocked::InFlight
        );
        assert!(form.is_submitting());
    }
}
