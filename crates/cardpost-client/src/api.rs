use async_trait::async_trait;
use cardpost_core::CardPostResult;
use cardpost_domain::{CreateCardRequest, CreatedCard};

/// Remote side of the card form: one create-card call per submission.
///
/// Failures come back as `CardPostError::Network` when no response arrived
/// and `CardPostError::Remote` when the service answered with an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardApi: Send + Sync {
    async fn create_card(&self, request: &CreateCardRequest) -> CardPostResult<CreatedCard>;
}
