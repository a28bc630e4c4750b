#[macro_use]
extern crate error_chain;

pub mod errors;
pub mod radix_tree;
