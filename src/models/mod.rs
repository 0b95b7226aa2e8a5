mod session;
mod tool;

pub use session::{Message, Session};
pub use tool::{FunctionCall, ToolCall};
