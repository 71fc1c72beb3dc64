//! Search page state: the view state, its controller, and the backend seam.

pub mod backend;
pub mod controller;
pub mod state;

pub use backend::SearchBackend;
pub use controller::{SearchController, SearchOutcome};
pub use state::{SearchPhase, ViewState};
