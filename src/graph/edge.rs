//! 边定义
//!
//! 边由有序的端点对标识，权重与方向标志是随载荷

use crate::graph::vertex::VertexValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 边
///
/// 相等性与哈希仅由 (from, to) 有序对决定：
/// (a, b) 与 (b, a) 是两条不同的边
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 起点取值
    from: VertexValue,
    /// 终点取值
    to: VertexValue,
    /// 可选权重（数据模型保留，算法不使用）
    weight: Option<f64>,
    /// 方向标志
    directed: bool,
}

impl Edge {
    /// 创建新边（无权重，默认有向）
    pub fn new(from: VertexValue, to: VertexValue) -> Self {
        Self {
            from,
            to,
            weight: None,
            directed: true,
        }
    }

    /// 附加权重
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// 设置方向标志
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// 获取起点取值
    pub fn from(&self) -> VertexValue {
        self.from
    }

    /// 获取终点取值
    pub fn to(&self) -> VertexValue {
        self.to
    }

    /// 获取权重
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// 是否带方向标志
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 端点有序对（图的边表键）
    pub fn key(&self) -> (VertexValue, VertexValue) {
        (self.from, self.to)
    }

    /// 镜像边（端点互换，载荷不变）
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
            directed: self.directed,
        }
    }

    /// 是否自环
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}
