//! Ready-made generators built on the core combinators.

pub mod common;
pub mod dates;
pub mod text;

pub use common::{append, join_all, list, prepend, range};
pub use dates::{DateFormat, date, now};
pub use text::RandomText;
