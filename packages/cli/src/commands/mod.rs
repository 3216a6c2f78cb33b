pub mod check;
pub mod normalize;
pub mod templates;

pub use check::{check, CheckArgs};
pub use normalize::{normalize, NormalizeArgs};
pub use templates::{templates, TemplatesArgs};
