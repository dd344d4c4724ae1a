pub mod dispatch;
pub mod selector;

#[cfg(test)]
mod dispatch_tests;

pub use dispatch::CacheFacade;
pub use selector::Backend;
