pub mod graph;
pub mod parse;
