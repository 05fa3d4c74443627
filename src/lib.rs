pub mod app;
pub mod arguments;
pub mod common;
pub mod config;
pub mod features;
pub mod printer;

pub use common::{
    notice::{NoopObserver, Notice, NoticeBuffer, StackObserver},
    observed::Observed,
    stack::Stack,
};
pub use features::stack::StackLike;
