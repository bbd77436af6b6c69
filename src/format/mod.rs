//! 图文本格式模块
//!
//! 持久化文本格式 `V = {n1, n2, ...}; A = {(a1, b1), ...};` 的
//! 解析器与规范化写出器
//!
//! 主要特性:
//! - 整篇匹配的游标解析器（拒绝任何尾部残余）
//! - 兼容历史上的两种逗号分隔变体（`", "` 与 `","`）
//! - 空集合 `{}` 可解析、可写出，保证任意可达状态可往返
//! - 控制台边字面量 `(a, b)` 的独立解析入口

mod parser;
mod writer;

pub use parser::{parse, parse_edge_literal, ParsedText, TextParser};
pub use writer::serialize;
