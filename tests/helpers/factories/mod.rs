pub mod content_tree_factory;

pub use content_tree_factory::{ContentTree, ContentTreeFactory};

#[cfg(test)]
mod content_tree_factory_test;
