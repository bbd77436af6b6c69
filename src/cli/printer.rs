//! 结果打印器
//!
//! 图状态与邻接视图的表格输出

use crate::error::Result;
use crate::graph::{Graph, VertexValue};
use prettytable::{format, row, Cell, Row, Table};
use std::collections::{HashMap, HashSet};

/// 结果打印器
#[derive(Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// 打印图统计信息
    pub fn print_stats(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["属性", "值"]);
        table.add_row(row![
            "是否有向",
            if graph.is_directed() { "是" } else { "否" }
        ]);
        table.add_row(row!["顶点数", graph.vertex_count().to_string()]);
        table.add_row(row!["边数（存储口径）", graph.edge_count().to_string()]);
        if let Some(store) = graph.store() {
            table.add_row(row!["读取文件", store.read_path().display().to_string()]);
            table.add_row(row!["写出文件", store.write_path().display().to_string()]);
        }
        table.to_string()
    }

    /// 打印邻接表（顶点、邻接集合都按取值升序）
    pub fn print_adjacency_list(
        &self,
        list: &HashMap<VertexValue, HashSet<VertexValue>>,
    ) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["顶点", "邻接顶点"]);

        let mut values: Vec<VertexValue> = list.keys().copied().collect();
        values.sort_unstable();

        for value in values {
            let mut around: Vec<VertexValue> = list[&value].iter().copied().collect();
            around.sort_unstable();
            let joined = around
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(row![value.to_string(), format!("{{{}}}", joined)]);
        }
        table.to_string()
    }

    /// 打印邻接矩阵，行列都以顶点取值标注
    ///
    /// 矩阵成立时取值恰为 1..=n，下标加一即是取值
    pub fn print_matrix(&self, graph: &Graph) -> Result<String> {
        let matrix = graph.adjacency_matrix()?;
        let n = matrix.len();

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut header = vec![Cell::new("")];
        for col in 1..=n {
            header.push(Cell::new(&col.to_string()));
        }
        table.set_titles(Row::new(header));

        for (i, row_bits) in matrix.iter().enumerate() {
            let mut cells = vec![Cell::new(&(i + 1).to_string())];
            for &bit in row_bits {
                cells.push(Cell::new(&bit.to_string()));
            }
            table.add_row(Row::new(cells));
        }
        Ok(table.to_string())
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   TextGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?           显示帮助
  quit, exit, q        退出程序
  stats, info          显示图统计信息
  show, print          按规范文本形式显示当前图
  clear                清屏

顶点与边:
  addv, av <v>         插入顶点
                       示例: addv 9
  rmv, rv <v>          删除顶点及其全部关联边
  adde, ae <a> <b>     插入边，也接受字面量 (a, b)
                       示例: adde 9 1
                       示例: adde (9, 1)
  rme, re <a> <b>      删除边（无向图连同镜像一并删除）
  color <v> <标记>     设置颜色标记: white | gray | black

查询视图:
  degree, deg <v>      顶点度数（无向图折半）
  neighbors, n <v>     顶点邻居集合
  list, adj            邻接表
  matrix, m            邻接矩阵（要求取值恰为 1..=n）

持久化:
  save                 立即写出 <stem>_result.txt
  export [路径]        导出 JSON 快照（缺省打印到屏幕）

每次成功的顶点/边变更都会自动整文件回写。
═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}
