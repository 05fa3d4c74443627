pub mod args;
pub mod running;
pub mod stack;
