//! 控制台模块
//!
//! 交互式命令分发、表格打印与 Tab 补全

mod commands;
mod completer;
mod printer;

pub use commands::{handle_command, CommandResult};
pub use completer::CommandCompleter;
pub use printer::Printer;
