pub mod errors;
pub mod logging;
pub mod notice;
pub mod observed;
pub mod stack;
