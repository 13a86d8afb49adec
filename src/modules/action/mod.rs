pub mod dispatcher;

pub use dispatcher::NewsDispatcher;
