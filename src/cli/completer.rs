//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 控制台命令列表
const COMMANDS: &[&str] = &[
    "help", "quit", "exit", "stats", "info", "show", "print", "clear", "addv", "rmv", "adde",
    "rme", "color", "degree", "neighbors", "list", "adj", "matrix", "save", "export",
];

/// 颜色标记列表（color 命令的第二个参数）
const COLOR_MARKERS: &[&str] = &["white", "gray", "black"];

/// TextGraph CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.ends_with(' ');

        // 正在输入第一个单词：补全命令名
        if words.len() == 1 && at_word_end {
            let current = words[0].to_lowercase();
            let start_pos = pos - words[0].len();
            let completions: Vec<Pair> = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(&current))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            return Ok((start_pos, completions));
        }

        // color 命令的颜色标记参数
        let is_color = words
            .first()
            .map(|w| w.eq_ignore_ascii_case("color"))
            .unwrap_or(false);
        if is_color {
            if at_word_end && words.len() == 3 {
                let current = words[2].to_lowercase();
                let start_pos = pos - words[2].len();
                let completions: Vec<Pair> = COLOR_MARKERS
                    .iter()
                    .filter(|marker| marker.starts_with(&current))
                    .map(|marker| Pair {
                        display: marker.to_string(),
                        replacement: marker.to_string(),
                    })
                    .collect();
                return Ok((start_pos, completions));
            }
            if !at_word_end && words.len() == 2 {
                let completions: Vec<Pair> = COLOR_MARKERS
                    .iter()
                    .map(|marker| Pair {
                        display: marker.to_string(),
                        replacement: marker.to_string(),
                    })
                    .collect();
                return Ok((pos, completions));
            }
        }

        Ok((pos, vec![]))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
