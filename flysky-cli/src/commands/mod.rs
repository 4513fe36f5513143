//! CLI command implementations.
//!
//! Each command is one screen of the booking front end:
//! - `book`: Book a new reservation
//! - `list`: List all reservations
//! - `search`: Search reservations
//! - `show`: Show one reservation
//! - `edit`: Change fields of a reservation
//! - `cancel`: Delete a reservation
//! - `seed`: Add the sample reservations
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod cancel;
pub mod completions;
pub mod edit;
pub mod list;
pub mod search;
pub mod seed;
pub mod show;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use edit::EditCommand;
pub use list::ListCommand;
pub use search::SearchCommand;
pub use seed::SeedCommand;
pub use show::ShowCommand;
