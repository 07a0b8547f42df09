pub mod code_utils;
pub mod data;
pub mod generators;
pub mod judge;
pub mod model;
pub mod session;
pub mod store;

pub use session::SessionApp;
