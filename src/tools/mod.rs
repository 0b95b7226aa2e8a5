mod registry;

pub mod messaging;
pub mod news;
pub mod stock;
pub mod weather;

pub use registry::{DispatchError, Tool, ToolHandler, ToolRegistry};
