//! 图数据结构
//!
//! 带文本持久化的内存图核心：顶点表、边表、派生视图与文件回写

use super::edge::Edge;
use super::vertex::{Color, Vertex, VertexValue};
use crate::error::{Error, Result};
use crate::format;
use crate::storage::FileStore;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, info};

/// 插入操作的结构化结果
///
/// 等值元素的重复插入是幂等空操作，上报而不报错
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// 新元素已插入
    Added,
    /// 等值元素已存在，本次未做任何修改
    AlreadyPresent,
}

impl Insertion {
    pub fn is_added(&self) -> bool {
        matches!(self, Insertion::Added)
    }
}

/// 图
///
/// 方向性在构造时固定。无向图把每条逻辑边物化为互为镜像的
/// 两条存储边，加载与插入两条路径都会补齐镜像
#[derive(Debug)]
pub struct Graph {
    /// 顶点表（取值 -> 顶点记录）
    vertices: HashMap<VertexValue, Vertex>,
    /// 边表（有序端点对 -> 边记录）
    edges: HashMap<(VertexValue, VertexValue), Edge>,
    /// 是否有向
    directed: bool,
    /// 派生视图：邻居集合（任一关联边的对端）
    neighbors: HashMap<VertexValue, HashSet<VertexValue>>,
    /// 派生视图：原始关联计数（无向图物化镜像后为逻辑度数的两倍）
    degrees: HashMap<VertexValue, usize>,
    /// 可选的文件存储，挂载后每次成功变更都会整文件回写
    store: Option<FileStore>,
}

impl Graph {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: HashMap::new(),
            edges: HashMap::new(),
            directed,
            neighbors: HashMap::new(),
            degrees: HashMap::new(),
            store: None,
        }
    }

    /// 从文件加载图
    ///
    /// 文件名遵循存储约定：末尾的 `.txt` 剥离一次，读 `<stem>.txt`，
    /// 之后的变更写 `<stem>_result.txt`
    pub fn open(name: &str, directed: bool) -> Result<Self> {
        let store = FileStore::new(name);
        let text = store.load()?;

        let mut graph = Self::new(directed);
        graph.load_str(&text)?;
        graph.store = Some(store);

        Ok(graph)
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 获取挂载的文件存储
    pub fn store(&self) -> Option<&FileStore> {
        self.store.as_ref()
    }

    // ==================== 加载与序列化 ====================

    /// 解析图文本并整体替换当前内容
    ///
    /// 失败（格式或校验）时当前内容保持不变
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        let parsed = format::parse(text)?;

        // 陌生顶点：被边引用但未在顶点集合中声明的取值
        let mut strange: Vec<VertexValue> = parsed
            .edges
            .iter()
            .flat_map(|&(from, to)| [from, to])
            .filter(|value| !parsed.vertices.contains(value))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        if !strange.is_empty() {
            strange.sort_unstable();
            return Err(Error::Validation(format!(
                "边引用了未声明的顶点: {}",
                join_values(&strange)
            )));
        }

        let mut vertices = HashMap::with_capacity(parsed.vertices.len());
        for &value in &parsed.vertices {
            vertices.insert(value, Vertex::new(value));
        }

        let mut edges = HashMap::with_capacity(parsed.edges.len());
        for &(from, to) in &parsed.edges {
            let edge = Edge::new(from, to).with_directed(self.directed);
            edges.insert(edge.key(), edge);
        }
        if !self.directed {
            // 物化镜像边；端点对作键保证幂等
            let mirrors: Vec<Edge> = edges.values().map(Edge::reversed).collect();
            for mirror in mirrors {
                edges.entry(mirror.key()).or_insert(mirror);
            }
        }

        self.vertices = vertices;
        self.edges = edges;
        self.recompute_derived();

        info!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            directed = self.directed,
            "图文本已加载"
        );
        Ok(())
    }

    /// 按规范形式序列化当前内容
    pub fn to_text(&self) -> String {
        let vertices: Vec<VertexValue> = self.vertices.keys().copied().collect();
        let edges: Vec<(VertexValue, VertexValue)> = self.edges.keys().copied().collect();
        format::serialize(&vertices, &edges)
    }

    /// 导出 JSON 快照（顶点带颜色与度数，边带权重）
    pub fn export_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            directed: bool,
            vertices: Vec<&'a Vertex>,
            edges: Vec<&'a Edge>,
        }

        let mut vertices = self.vertices();
        vertices.sort_by_key(|v| v.value());
        let mut edges = self.edges();
        edges.sort_by_key(|e| e.key());

        serde_json::to_string_pretty(&Snapshot {
            directed: self.directed,
            vertices,
            edges,
        })
        .map_err(|e| Error::Serialization(e.to_string()))
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 等值顶点已存在时幂等跳过，度数不参与该判定；
    /// 真正新插入的顶点必须是全新的（度数为 0）
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<Insertion> {
        let value = vertex.value();
        if self.vertices.contains_key(&value) {
            debug!(value = value.as_u64(), "顶点已存在，幂等跳过");
            return Ok(Insertion::AlreadyPresent);
        }

        if vertex.degree() != 0 {
            return Err(Error::Validation(format!(
                "待插入顶点 {} 携带非零度数 {}",
                value,
                vertex.degree()
            )));
        }

        self.vertices.insert(value, vertex);
        self.recompute_derived();
        self.persist()?;

        debug!(value = value.as_u64(), "顶点已插入");
        Ok(Insertion::Added)
    }

    /// 删除顶点及其全部关联边，返回被删除的边数
    pub fn remove_vertex(&mut self, value: VertexValue) -> Result<usize> {
        if self.vertices.remove(&value).is_none() {
            return Err(Error::VertexNotFound(value.to_string()));
        }

        let before = self.edges.len();
        self.edges
            .retain(|&(from, to), _| from != value && to != value);
        let removed = before - self.edges.len();

        self.recompute_derived();
        self.persist()?;

        debug!(
            value = value.as_u64(),
            removed_edges = removed,
            "顶点已删除"
        );
        Ok(removed)
    }

    /// 获取顶点
    pub fn vertex(&self, value: VertexValue) -> Option<&Vertex> {
        self.vertices.get(&value)
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, value: VertexValue) -> bool {
        self.vertices.contains_key(&value)
    }

    /// 获取所有顶点
    pub fn vertices(&self) -> Vec<&Vertex> {
        self.vertices.values().collect()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 设置顶点颜色标记
    ///
    /// 颜色是内存中的遍历标记，文本格式无法表达，不触发回写
    pub fn set_color(&mut self, value: VertexValue, color: Color) -> Result<()> {
        match self.vertices.get_mut(&value) {
            Some(vertex) => {
                vertex.set_color(color);
                Ok(())
            }
            None => Err(Error::VertexNotFound(value.to_string())),
        }
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 两个端点都必须已是顶点集合的成员；无向图同时补齐镜像边。
    /// 入库记录的方向标志一律盖成图的方向性。
    /// 等值边（相同有序端点对）已存在时幂等跳过
    pub fn add_edge(&mut self, edge: Edge) -> Result<Insertion> {
        let (from, to) = edge.key();

        if self.edges.contains_key(&(from, to)) {
            debug!(
                from = from.as_u64(),
                to = to.as_u64(),
                "边已存在，幂等跳过"
            );
            return Ok(Insertion::AlreadyPresent);
        }

        let mut missing = Vec::new();
        if !self.vertices.contains_key(&from) {
            missing.push(from);
        }
        if to != from && !self.vertices.contains_key(&to) {
            missing.push(to);
        }
        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "边 ({}, {}) 引用了不存在的顶点: {}",
                from,
                to,
                join_values(&missing)
            )));
        }

        let edge = edge.with_directed(self.directed);
        let mirror = (!self.directed).then(|| edge.reversed());
        self.edges.insert((from, to), edge);
        if let Some(mirror) = mirror {
            self.edges.entry(mirror.key()).or_insert(mirror);
        }

        self.recompute_derived();
        self.persist()?;

        debug!(from = from.as_u64(), to = to.as_u64(), "边已插入");
        Ok(Insertion::Added)
    }

    /// 删除边，无向图连同其镜像一并删除
    pub fn remove_edge(&mut self, from: VertexValue, to: VertexValue) -> Result<()> {
        if self.edges.remove(&(from, to)).is_none() {
            return Err(Error::EdgeNotFound(format!("({}, {})", from, to)));
        }
        if !self.directed {
            self.edges.remove(&(to, from));
        }

        self.recompute_derived();
        self.persist()?;

        debug!(from = from.as_u64(), to = to.as_u64(), "边已删除");
        Ok(())
    }

    /// 获取边
    pub fn edge(&self, from: VertexValue, to: VertexValue) -> Option<&Edge> {
        self.edges.get(&(from, to))
    }

    /// 边是否存在（按有序端点对）
    pub fn contains_edge(&self, from: VertexValue, to: VertexValue) -> bool {
        self.edges.contains_key(&(from, to))
    }

    /// 获取所有边
    pub fn edges(&self) -> Vec<&Edge> {
        self.edges.values().collect()
    }

    /// 获取边数量（存储边口径，无向图含镜像）
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== 度数与邻接视图 ====================

    /// 获取顶点度数
    ///
    /// 统计关联的存储边（自环记一次）。无向图因镜像边整除二，
    /// 该折半只在每条插入路径都物化镜像的前提下成立
    pub fn degree(&self, value: VertexValue) -> Result<usize> {
        if !self.vertices.contains_key(&value) {
            return Err(Error::VertexNotFound(value.to_string()));
        }
        let raw = self.degrees.get(&value).copied().unwrap_or(0);
        Ok(if self.directed { raw } else { raw / 2 })
    }

    /// 获取顶点的邻居集合（任一关联边的对端，双向）
    pub fn neighbors(&self, value: VertexValue) -> Result<HashSet<VertexValue>> {
        self.neighbors
            .get(&value)
            .cloned()
            .ok_or_else(|| Error::VertexNotFound(value.to_string()))
    }

    /// 邻接表：每个顶点映射到以它为第一端点的存储边的第二端点集合
    ///
    /// 无向图两个方向都已入表，所以单向扫描即可
    pub fn adjacency_list(&self) -> HashMap<VertexValue, HashSet<VertexValue>> {
        let mut list: HashMap<VertexValue, HashSet<VertexValue>> = self
            .vertices
            .keys()
            .map(|&value| (value, HashSet::new()))
            .collect();

        for &(from, to) in self.edges.keys() {
            if let Some(set) = list.get_mut(&from) {
                set.insert(to);
            }
        }
        list
    }

    /// 邻接矩阵：n×n 的 0/1 方阵，按取值减一作下标
    ///
    /// 要求顶点取值恰为稠密的 1..=n，越界取值报校验错误。
    /// 每一行独立分配，行之间不共享底层存储
    pub fn adjacency_matrix(&self) -> Result<Vec<Vec<u8>>> {
        let n = self.vertices.len();

        let mut out_of_range: Vec<VertexValue> = self
            .vertices
            .keys()
            .copied()
            .filter(|value| value.as_u64() == 0 || value.as_u64() > n as u64)
            .collect();
        if !out_of_range.is_empty() {
            out_of_range.sort_unstable();
            return Err(Error::Validation(format!(
                "邻接矩阵要求顶点取值恰为 1..={}，越界取值: {}",
                n,
                join_values(&out_of_range)
            )));
        }

        let mut matrix = vec![vec![0u8; n]; n];
        for &(from, to) in self.edges.keys() {
            matrix[(from.as_u64() - 1) as usize][(to.as_u64() - 1) as usize] = 1;
        }
        Ok(matrix)
    }

    // ==================== 持久化 ====================

    /// 将当前内容写出到挂载的存储；未挂载时为空操作
    pub fn save(&self) -> Result<()> {
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(store) = &self.store {
            store.save(&self.to_text())?;
            debug!(path = %store.write_path().display(), "图文本已写出");
        }
        Ok(())
    }

    /// 重算派生视图：邻居集合、原始关联计数、顶点缓存度数
    fn recompute_derived(&mut self) {
        self.neighbors.clear();
        self.degrees.clear();

        for &value in self.vertices.keys() {
            self.neighbors.insert(value, HashSet::new());
            self.degrees.insert(value, 0);
        }

        for &(from, to) in self.edges.keys() {
            if let Some(set) = self.neighbors.get_mut(&from) {
                set.insert(to);
            }
            if let Some(set) = self.neighbors.get_mut(&to) {
                set.insert(from);
            }

            // 自环对计数只贡献一次
            *self.degrees.entry(from).or_insert(0) += 1;
            if to != from {
                *self.degrees.entry(to).or_insert(0) += 1;
            }
        }

        for (value, vertex) in self.vertices.iter_mut() {
            let raw = self.degrees.get(value).copied().unwrap_or(0);
            vertex.set_degree(if self.directed { raw } else { raw / 2 });
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn join_values(values: &[VertexValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use tempfile::tempdir;

    const SAMPLE: &str = "V = {1, 2, 3}; A = {(1, 2), (2, 3)};";

    fn v(value: u64) -> VertexValue {
        VertexValue::new(value)
    }

    fn directed_sample() -> Graph {
        let mut graph = Graph::new(true);
        graph.load_str(SAMPLE).unwrap();
        graph
    }

    fn undirected_sample() -> Graph {
        let mut graph = Graph::new(false);
        graph.load_str(SAMPLE).unwrap();
        graph
    }

    #[test]
    fn test_load_directed_sample() {
        let graph = directed_sample();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(v(1), v(2)));
        assert!(!graph.contains_edge(v(2), v(1)));
        assert_eq!(graph.degree(v(2)).unwrap(), 2);
    }

    #[test]
    fn test_load_undirected_materializes_mirrors() {
        let graph = undirected_sample();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.contains_edge(v(2), v(1)));
        assert!(graph.contains_edge(v(3), v(2)));
        // 折半抵消镜像，逻辑度数与有向情形一致
        assert_eq!(graph.degree(v(2)).unwrap(), 2);
        assert_eq!(graph.degree(v(1)).unwrap(), 1);
    }

    #[test]
    fn test_load_undirected_premirrored_text() {
        let mut graph = Graph::new(false);
        graph
            .load_str("V = {1, 2}; A = {(1, 2), (2, 1)};")
            .unwrap();

        // 文本里已经成对的边不再翻倍
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(v(1)).unwrap(), 1);
        assert_eq!(graph.degree(v(2)).unwrap(), 1);
    }

    #[test]
    fn test_load_strange_vertices_rejected() {
        let mut graph = directed_sample();
        let err = graph
            .load_str("V = {1, 2, 3}; A = {(1, 4), (5, 2)};")
            .unwrap_err();

        match err {
            Error::Validation(msg) => {
                assert!(msg.contains('4'), "message: {}", msg);
                assert!(msg.contains('5'), "message: {}", msg);
            }
            other => panic!("expected Validation, got {:?}", other),
        }

        // 失败的加载不得动摇已有内容
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_load_malformed_text_rejected() {
        let mut graph = Graph::new(true);
        let err = graph.load_str("V = {1, 2}; A = (1, 2);").unwrap_err();

        assert!(matches!(err, Error::Format(_)));
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_add_vertex() {
        let mut graph = directed_sample();

        assert!(graph.add_vertex(Vertex::new(v(9))).unwrap().is_added());
        assert_eq!(graph.vertex_count(), 4);

        // 等值顶点：幂等空操作
        let outcome = graph.add_vertex(Vertex::new(v(9))).unwrap();
        assert_eq!(outcome, Insertion::AlreadyPresent);
        assert_eq!(graph.vertex_count(), 4);
    }

    #[test]
    fn test_add_vertex_nonzero_degree_rejected() {
        let mut graph = Graph::new(true);
        let mut vertex = Vertex::new(v(1));
        vertex.set_degree(2);

        let err = graph.add_vertex(vertex).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_add_vertex_existing_ignores_cached_degree() {
        let mut graph = directed_sample();

        // 从图里取出的记录带着刷新过的度数，重插仍是幂等空操作
        let member = graph.vertex(v(1)).unwrap().clone();
        assert_eq!(member.degree(), 1);

        let outcome = graph.add_vertex(member).unwrap();
        assert_eq!(outcome, Insertion::AlreadyPresent);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut graph = directed_sample();

        let removed = graph.remove_vertex(v(2)).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(v(1)).unwrap(), 0);
    }

    #[test]
    fn test_remove_vertex_undirected() {
        let mut graph = undirected_sample();

        let removed = graph.remove_vertex(v(2)).unwrap();
        assert_eq!(removed, 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_vertex_not_found() {
        let mut graph = directed_sample();
        let err = graph.remove_vertex(v(42)).unwrap_err();

        assert!(matches!(err, Error::VertexNotFound(_)));
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_add_edge_missing_endpoints_rejected() {
        let mut graph = directed_sample();

        let err = graph.add_edge(Edge::new(v(1), v(9))).unwrap_err();
        match err {
            Error::Validation(msg) => assert!(msg.contains('9'), "message: {}", msg),
            other => panic!("expected Validation, got {:?}", other),
        }
        assert_eq!(graph.edge_count(), 2);

        let err = graph.add_edge(Edge::new(v(8), v(9))).unwrap_err();
        match err {
            Error::Validation(msg) => {
                assert!(msg.contains('8'), "message: {}", msg);
                assert!(msg.contains('9'), "message: {}", msg);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_duplicate_is_noop() {
        let mut graph = directed_sample();

        let outcome = graph.add_edge(Edge::new(v(1), v(2))).unwrap();
        assert_eq!(outcome, Insertion::AlreadyPresent);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_reverse_is_new_edge_when_directed() {
        let mut graph = directed_sample();

        assert!(graph.add_edge(Edge::new(v(2), v(1))).unwrap().is_added());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_add_edge_undirected_mirrors() {
        let mut graph = Graph::new(false);
        graph.add_vertex(Vertex::new(v(1))).unwrap();
        graph.add_vertex(Vertex::new(v(2))).unwrap();

        assert!(graph.add_edge(Edge::new(v(1), v(2))).unwrap().is_added());
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(v(2), v(1)));
        assert_eq!(graph.degree(v(1)).unwrap(), 1);

        // 已有镜像的再次加倍是幂等空操作
        let outcome = graph.add_edge(Edge::new(v(2), v(1))).unwrap();
        assert_eq!(outcome, Insertion::AlreadyPresent);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_undirected_mirror_keeps_weight() {
        let mut graph = Graph::new(false);
        graph.add_vertex(Vertex::new(v(1))).unwrap();
        graph.add_vertex(Vertex::new(v(2))).unwrap();

        graph
            .add_edge(Edge::new(v(1), v(2)).with_weight(2.5))
            .unwrap();

        let mirror = graph.edge(v(2), v(1)).unwrap();
        assert_eq!(mirror.weight(), Some(2.5));
    }

    #[test]
    fn test_add_edge_stamps_graph_directedness() {
        let mut graph = undirected_sample();
        graph.add_edge(Edge::new(v(1), v(3))).unwrap();

        // 加载与插入两条路径入库的记录方向标志一致
        assert!(!graph.edge(v(1), v(2)).unwrap().is_directed());
        assert!(!graph.edge(v(1), v(3)).unwrap().is_directed());
        assert!(!graph.edge(v(3), v(1)).unwrap().is_directed());
    }

    #[test]
    fn test_self_loop_degree() {
        let mut graph = Graph::new(true);
        graph.add_vertex(Vertex::new(v(1))).unwrap();
        graph.add_edge(Edge::new(v(1), v(1))).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(v(1)).unwrap(), 1);

        // 无向自环：镜像键重合，关联计数只记一次，折半后度数归零
        let mut graph = Graph::new(false);
        graph.add_vertex(Vertex::new(v(1))).unwrap();
        graph.add_edge(Edge::new(v(1), v(1))).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(v(1)).unwrap(), 0);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = directed_sample();

        graph.remove_edge(v(1), v(2)).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains_edge(v(1), v(2)));

        let err = graph.remove_edge(v(1), v(2)).unwrap_err();
        assert!(matches!(err, Error::EdgeNotFound(_)));
    }

    #[test]
    fn test_remove_edge_undirected_removes_mirror() {
        let mut graph = undirected_sample();

        graph.remove_edge(v(1), v(2)).unwrap();
        assert!(!graph.contains_edge(v(2), v(1)));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(v(1)).unwrap(), 0);
    }

    #[test]
    fn test_degree_sums() {
        // 有向：每条存储边贡献两个端点槽位
        let graph = directed_sample();
        let total: usize = [1, 2, 3]
            .iter()
            .map(|&n| graph.degree(v(n)).unwrap())
            .sum();
        assert_eq!(total, 2 * graph.edge_count());

        // 无向：折半后度数和等于存储边数，即逻辑边数的两倍
        let graph = undirected_sample();
        let total: usize = [1, 2, 3]
            .iter()
            .map(|&n| graph.degree(v(n)).unwrap())
            .sum();
        assert_eq!(total, graph.edge_count());
    }

    #[test]
    fn test_degree_unknown_vertex() {
        let graph = directed_sample();
        assert!(matches!(
            graph.degree(v(42)),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_neighbors_cover_both_directions() {
        let graph = directed_sample();

        let around = graph.neighbors(v(2)).unwrap();
        assert_eq!(around, [v(1), v(3)].into_iter().collect());

        assert!(matches!(
            graph.neighbors(v(42)),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_vertex_degree_cache_refreshed() {
        let mut graph = directed_sample();
        assert_eq!(graph.vertex(v(2)).unwrap().degree(), 2);

        graph.remove_edge(v(1), v(2)).unwrap();
        assert_eq!(graph.vertex(v(2)).unwrap().degree(), 1);
    }

    #[test]
    fn test_adjacency_list_first_endpoint_only() {
        let graph = directed_sample();
        let list = graph.adjacency_list();

        assert_eq!(list.len(), 3);
        assert_eq!(list[&v(1)], [v(2)].into_iter().collect());
        assert_eq!(list[&v(2)], [v(3)].into_iter().collect());
        assert!(list[&v(3)].is_empty());
    }

    #[test]
    fn test_adjacency_matrix() {
        let graph = directed_sample();
        let matrix = graph.adjacency_matrix().unwrap();

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[0], vec![0, 1, 0]);
        assert_eq!(matrix[1], vec![0, 0, 1]);
        assert_eq!(matrix[2], vec![0, 0, 0]);

        // 无向图矩阵对称
        let matrix = undirected_sample().adjacency_matrix().unwrap();
        assert_eq!(matrix[0][1], matrix[1][0]);
        assert_eq!(matrix[1][2], matrix[2][1]);
    }

    #[test]
    fn test_adjacency_matrix_rows_independent() {
        let graph = directed_sample();
        let mut matrix = graph.adjacency_matrix().unwrap();

        matrix[0][0] = 9;
        assert_eq!(matrix[1][0], 0);
        assert_eq!(matrix[2][0], 0);
    }

    #[test]
    fn test_adjacency_matrix_rejects_sparse_values() {
        let mut graph = Graph::new(true);
        graph.add_vertex(Vertex::new(v(1))).unwrap();
        graph.add_vertex(Vertex::new(v(5))).unwrap();

        let err = graph.adjacency_matrix().unwrap_err();
        match err {
            Error::Validation(msg) => assert!(msg.contains('5'), "message: {}", msg),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_color_marking() {
        let mut graph = directed_sample();

        graph.set_color(v(2), Color::Gray).unwrap();
        assert_eq!(graph.vertex(v(2)).unwrap().color(), Color::Gray);

        assert!(matches!(
            graph.set_color(v(42), Color::Black),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_display_is_canonical_text() {
        let graph = directed_sample();
        assert_eq!(graph.to_string(), SAMPLE);
    }

    #[test]
    fn test_export_json() {
        let graph = directed_sample();
        let json = graph.export_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["directed"], serde_json::json!(true));
        assert_eq!(value["vertices"].as_array().unwrap().len(), 3);
        assert_eq!(value["edges"].as_array().unwrap().len(), 2);
        assert_eq!(value["vertices"][0]["color"], serde_json::json!("white"));
    }

    #[test]
    fn test_open_persists_mutations() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("grafo.txt");
        std::fs::write(&name, SAMPLE).unwrap();

        let mut graph = Graph::open(name.to_str().unwrap(), true).unwrap();
        graph.add_vertex(Vertex::new(v(9))).unwrap();
        graph.add_edge(Edge::new(v(9), v(1))).unwrap();

        let written =
            std::fs::read_to_string(dir.path().join("grafo_result.txt")).unwrap();
        let parsed = format::parse(&written).unwrap();
        assert!(parsed.vertices.contains(&v(9)));
        assert!(parsed.edges.contains(&(v(9), v(1))));

        // 读取源文件保持原样
        assert_eq!(std::fs::read_to_string(&name).unwrap(), SAMPLE);

        // 删除回到初始集合，清空也能往返
        graph.remove_vertex(v(9)).unwrap();
        let written =
            std::fs::read_to_string(dir.path().join("grafo_result.txt")).unwrap();
        assert_eq!(written, SAMPLE);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("absent.txt");

        let err = Graph::open(name.to_str().unwrap(), true).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_failed_mutation_preserves_state() {
        let mut graph = directed_sample();
        let before = graph.to_text();

        assert!(graph.add_edge(Edge::new(v(1), v(9))).is_err());
        assert!(graph.remove_vertex(v(9)).is_err());
        assert!(graph.remove_edge(v(3), v(1)).is_err());

        assert_eq!(graph.to_text(), before);
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = rand::thread_rng();

        for _ in 0..16 {
            let n: u64 = rng.gen_range(1..=8);
            let mut graph = Graph::new(true);
            for value in 1..=n {
                graph.add_vertex(Vertex::new(v(value))).unwrap();
            }
            for _ in 0..rng.gen_range(0..=12) {
                let from = rng.gen_range(1..=n);
                let to = rng.gen_range(1..=n);
                graph.add_edge(Edge::new(v(from), v(to))).unwrap();
            }

            let parsed = format::parse(&graph.to_text()).unwrap();
            assert_eq!(parsed.vertices.len(), graph.vertex_count());
            assert_eq!(parsed.edges.len(), graph.edge_count());
            for edge in graph.edges() {
                assert!(parsed.edges.contains(&edge.key()));
            }
        }
    }
}
