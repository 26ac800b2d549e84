use crate::cli::CreateArgs;
use crate::output;
use cardpost_client::CardApi;
use cardpost_domain::{CardForm, CreatedCard, SubmitBlocked};
use serde::Serialize;

#[derive(Serialize)]
struct CreatedOutput {
    message: String,
    card: CreatedCard,
}

pub async fn handle(api: &dyn CardApi, args: CreateArgs) -> anyhow::Result<()> {
    let mut form = CardForm::with_draft(args.into_draft());

    let request = match form.begin_submit() {
        Ok(request) => request,
        Err(SubmitBlocked::Invalid(errors)) => return output::output_error(&errors.to_string()),
        Err(SubmitBlocked::InFlight) => return output::output_error("a submission is already in flight"),
    };

    let outcome = api.create_card(&request).await;
    let card = outcome.as_ref().ok().cloned();
    let notification = form.settle(outcome);

    match card {
        Some(card) => output::output_success(CreatedOutput {
            message: notification.message,
            card,
        }),
        None => output::output_error(&notification.message),
    }
}
