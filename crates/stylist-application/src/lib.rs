pub mod render;
pub mod session;

pub use render::render_history;
pub use session::{ActionOutcome, EMPTY_INPUT_ADVISORY, StyleSession};
