mod debounce;
mod state;
mod table;

pub use debounce::Debouncer;
pub use state::{Screen, UiState};
pub use table::{FetchTicket, TableState};
