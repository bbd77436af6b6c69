//! 存储模块
//!
//! 图文本的整文件持久化，包含：
//! - 文件名约定（读 `<stem>.txt`，写 `<stem>_result.txt`）
//! - 临时文件加原子改名的整文件覆盖写

mod file;

pub use file::FileStore;
