pub mod client;
pub mod prompts;
pub mod reasoner;
pub mod tools;
