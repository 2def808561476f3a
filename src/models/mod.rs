mod content;
mod icon;

pub use content::*;
pub use icon::IconKind;
