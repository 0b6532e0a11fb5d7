pub mod finder;
pub mod window;

pub use finder::{Match, MatchFinder};
pub use window::Window;
