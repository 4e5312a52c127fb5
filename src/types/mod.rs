//! Type definitions for picksite

mod content;
mod de;
mod error;
mod stats;
mod theme;

pub use content::*;
pub use error::*;
pub use stats::*;
pub use theme::*;
