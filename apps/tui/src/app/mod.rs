// App module for smarterp-bi
// Holds the page states and routes events and outcomes between them

pub mod actions;
pub mod input;
pub mod state;

pub use actions::AppActions;
pub use input::handle_input;
pub use state::{App, AppScreen};
