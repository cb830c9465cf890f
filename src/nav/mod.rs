mod drag;
mod flipper;
mod state;

pub use drag::{DragGesture, DragTracker};
pub use flipper::{IgnoreReason, NavOutcome, PageFlipper, Transition};
pub use state::{FlipDirection, NavigationState, Position};
