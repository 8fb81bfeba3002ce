pub mod cli;
pub mod states;
