pub mod factories;

pub use factories::{ContentTree, ContentTreeFactory};
