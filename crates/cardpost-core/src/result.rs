use crate::error::CardPostError;

pub type CardPostResult<T> = Result<T, CardPostError>;
