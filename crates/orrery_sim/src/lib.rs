pub mod universe;
pub mod view;

pub use universe::{TickOutcome, Universe};
pub use view::ViewState;
