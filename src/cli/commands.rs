//! 控制台命令处理
//!
//! 把一行输入分发到图操作，结果以结构化形式交回调用方渲染

use crate::cli::printer::Printer;
use crate::error::{Error, Result};
use crate::format;
use crate::graph::{Color, Edge, Graph, Insertion, Vertex, VertexValue};

/// 控制台命令执行结果
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 解析并执行一行控制台输入
pub fn handle_command(graph: &mut Graph, input: &str) -> CommandResult {
    let input = input.trim();
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("").trim();

    match cmd.as_str() {
        "" => CommandResult::Continue,

        "quit" | "exit" | "q" => CommandResult::Exit,

        "clear" => {
            print!("\x1B[2J\x1B[1;1H");
            CommandResult::Continue
        }

        _ => match dispatch(graph, &cmd, args) {
            Ok(Some(msg)) => CommandResult::Message(msg),
            Ok(None) => {
                CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        },
    }
}

fn dispatch(graph: &mut Graph, cmd: &str, args: &str) -> Result<Option<String>> {
    let printer = Printer::new();

    let msg = match cmd {
        "help" | "h" | "?" => Printer::print_help(),

        "stats" | "info" => printer.print_stats(graph),

        "show" | "print" => format!("{}\n", graph),

        "addv" | "av" => {
            let value = parse_value(args)?;
            match graph.add_vertex(Vertex::new(value))? {
                Insertion::Added => format!("顶点 {} 已插入\n", value),
                Insertion::AlreadyPresent => {
                    format!("顶点 {} 已存在，未做修改\n", value)
                }
            }
        }

        "rmv" | "rv" => {
            let value = parse_value(args)?;
            let removed = graph.remove_vertex(value)?;
            format!("顶点 {} 已删除，连带删除 {} 条边\n", value, removed)
        }

        "adde" | "ae" => {
            let (from, to) = parse_endpoints(args)?;
            match graph.add_edge(Edge::new(from, to))? {
                Insertion::Added => format!("边 ({}, {}) 已插入\n", from, to),
                Insertion::AlreadyPresent => {
                    format!("边 ({}, {}) 已存在，未做修改\n", from, to)
                }
            }
        }

        "rme" | "re" => {
            let (from, to) = parse_endpoints(args)?;
            graph.remove_edge(from, to)?;
            format!("边 ({}, {}) 已删除\n", from, to)
        }

        "color" => {
            let parts: Vec<&str> = args.split_whitespace().collect();
            if parts.len() != 2 {
                return Err(Error::InvalidArgument(
                    "用法: color <顶点> <white|gray|black>".to_string(),
                ));
            }
            let value = parse_value(parts[0])?;
            let color: Color = parts[1].parse()?;
            graph.set_color(value, color)?;
            format!("顶点 {} 已标记为 {}\n", value, color)
        }

        "degree" | "deg" => {
            let value = parse_value(args)?;
            format!("顶点 {} 的度数: {}\n", value, graph.degree(value)?)
        }

        "neighbors" | "n" => {
            let value = parse_value(args)?;
            let mut around: Vec<VertexValue> = graph.neighbors(value)?.into_iter().collect();
            around.sort_unstable();
            let joined = around
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("顶点 {} 的邻居: {{{}}}\n", value, joined)
        }

        "list" | "adj" => printer.print_adjacency_list(&graph.adjacency_list()),

        "matrix" | "m" => printer.print_matrix(graph)?,

        "save" => {
            graph.save()?;
            match graph.store() {
                Some(store) => {
                    format!("图文本已写出到 {}\n", store.write_path().display())
                }
                None => "图未挂载文件存储，未写出\n".to_string(),
            }
        }

        "export" => {
            let json = graph.export_json()?;
            if args.is_empty() {
                format!("{}\n", json)
            } else {
                std::fs::write(args, &json)?;
                format!("JSON 快照已写入 {}\n", args)
            }
        }

        _ => return Ok(None),
    };

    Ok(Some(msg))
}

/// 解析一个顶点取值参数
fn parse_value(args: &str) -> Result<VertexValue> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument("缺少顶点取值参数".to_string()));
    }
    trimmed
        .parse::<u64>()
        .map(VertexValue::new)
        .map_err(|_| Error::InvalidArgument(format!("顶点取值应为非负整数: {:?}", trimmed)))
}

/// 解析一对端点：`1 2` 或字面量 `(1, 2)`
fn parse_endpoints(args: &str) -> Result<(VertexValue, VertexValue)> {
    let trimmed = args.trim();
    if trimmed.starts_with('(') {
        return format::parse_edge_literal(trimmed);
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(Error::InvalidArgument(
            "需要两个端点，形如 `1 2` 或 `(1, 2)`".to_string(),
        ));
    }
    Ok((parse_value(parts[0])?, parse_value(parts[1])?))
}
