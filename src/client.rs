//! Call factory configuration.

mod builder;

pub use builder::ClientBuilder;
pub use call_await_interface::client::ClientOptions;
