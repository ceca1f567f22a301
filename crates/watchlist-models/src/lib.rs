mod de;
pub mod input;
pub mod output;

pub use input::{InputEntry, WatchlistInput};
pub use output::{OutputEntry, WatchlistOutput};
