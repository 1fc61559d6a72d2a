pub mod classifier;
pub mod facade;
pub mod filter;
pub mod framework;
pub mod grouper;
pub mod model;
pub mod navigation;
pub mod sorter;
