//! 顶点定义
//!
//! 顶点以数值为身份，携带颜色标记与缓存的度数

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// 顶点取值（图中顶点的数值身份）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexValue(pub u64);

impl VertexValue {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexValue {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for VertexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点颜色标记（遍历预留的三态标记）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Gray,
    Black,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Gray => "gray",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "gray" => Ok(Color::Gray),
            "black" => Ok(Color::Black),
            other => Err(Error::Validation(format!(
                "未知的颜色标记: {:?}，可选 white | gray | black",
                other
            ))),
        }
    }
}

/// 顶点
///
/// 相等性与哈希仅由取值决定，颜色与度数是随载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点取值
    value: VertexValue,
    /// 颜色标记
    color: Color,
    /// 缓存的度数（由图在边变化时刷新）
    degree: usize,
}

impl Vertex {
    /// 创建新顶点（白色，度数为 0）
    pub fn new(value: VertexValue) -> Self {
        Self {
            value,
            color: Color::default(),
            degree: 0,
        }
    }

    /// 创建指定颜色的顶点
    pub fn with_color(value: VertexValue, color: Color) -> Self {
        Self {
            value,
            color,
            degree: 0,
        }
    }

    /// 获取顶点取值
    pub fn value(&self) -> VertexValue {
        self.value
    }

    /// 获取颜色标记
    pub fn color(&self) -> Color {
        self.color
    }

    /// 设置颜色标记
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// 获取缓存的度数
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// 刷新缓存的度数（仅限图内部调用）
    pub(crate) fn set_degree(&mut self, degree: usize) {
        self.degree = degree;
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
