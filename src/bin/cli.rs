//! TextGraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use textgraph::cli::{handle_command, CommandCompleter, CommandResult};
use textgraph::graph::Graph;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "textgraph-cli")]
#[command(about = "TextGraph 命令行工具")]
struct Args {
    /// 图文本文件（末尾的 .txt 可省略）
    #[arg(short, long, default_value = "grafo.txt")]
    file: String,

    /// 日志过滤（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)),
        )
        .init();

    println!("TextGraph CLI - 文本持久化图存储");
    println!("=================================");

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandCompleter::new()));

    let history_path = history_path();
    if let Some(path) = &history_path {
        let _ = rl.load_history(path);
    }

    let directed = match prompt_directed(&mut rl)? {
        Some(directed) => directed,
        None => return Ok(()),
    };

    let mut graph = Graph::open(&args.file, directed)
        .with_context(|| format!("加载图文件 {} 失败", args.file))?;

    if let Some(store) = graph.store() {
        println!("图已加载: {}", store.read_path().display());
    }
    println!("  有向: {}", if directed { "是" } else { "否" });
    println!("  顶点数: {}", graph.vertex_count());
    println!("  边数: {}", graph.edge_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    loop {
        match rl.readline("textgraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match handle_command(&mut graph, line) {
                    CommandResult::Continue => {}
                    CommandResult::Exit => break,
                    CommandResult::Message(msg) => print!("{}", msg),
                    CommandResult::Error(msg) => {
                        println!("{}", format!("错误: {}", msg).red())
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(输入 'quit' 退出)");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &history_path {
        let _ = rl.save_history(path);
    }

    println!("再见！");
    Ok(())
}

/// 询问图的方向性，只接受 1（有向）或 2（无向），其余输入重问
fn prompt_directed(rl: &mut Editor<CommandCompleter, DefaultHistory>) -> Result<Option<bool>> {
    loop {
        match rl.readline("图是有向的吗？(1 - 是 | 2 - 否): ") {
            Ok(line) => match line.trim() {
                "1" => return Ok(Some(true)),
                "2" => return Ok(Some(false)),
                other => {
                    println!(
                        "{}",
                        format!("只接受 1 或 2，收到 {:?}，请重试", other).yellow()
                    )
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e.into()),
        }
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".textgraph_history"))
}
