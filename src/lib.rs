//! TextGraph - 文本持久化图存储
//!
//! 基于单个文本文件的图模型，支持：
//! - `V = {...}; A = {...};` 文本格式的解析与写出
//! - 有向 / 无向两种模式（无向边成对存储）
//! - 顶点着色、度数查询、邻接表与邻接矩阵
//! - 每次成功变更后整体回写结果文件

pub mod cli;
pub mod error;
pub mod format;
pub mod graph;
pub mod storage;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Color, Edge, Graph, Insertion, Vertex, VertexValue};
pub use storage::FileStore;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
