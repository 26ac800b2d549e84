pub mod draft;
pub mod form;
pub mod notification;
pub mod request;
pub mod validation;

pub use draft::{CardDraft, DraftField};
pub use form::{CardForm, FormPhase, SubmitBlocked};
pub use notification::{Notification, NotificationKind};
pub use request::{CreateCardRequest, CreatedCard};
pub use validation::{parse_date, validate, validate_field, FieldError, ValidationErrors};
