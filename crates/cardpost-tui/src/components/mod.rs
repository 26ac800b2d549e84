pub mod banner;
pub mod field;

pub use banner::{Banner, BannerVariant};
pub use field::{render_field, FieldView};
