//! 图文本文件存储
//!
//! 整文件读写：读取路径与写出路径由同一个文件名词干导出，
//! 写出带 `_result` 区分后缀，避免覆盖加载源

use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// 图文本文件后缀
const TEXT_SUFFIX: &str = ".txt";
/// 写出文件的区分标记
const RESULT_MARK: &str = "_result";
/// 原子写入的临时文件后缀
const TMP_SUFFIX: &str = ".tmp";

/// 图文本文件存储
#[derive(Debug, Clone)]
pub struct FileStore {
    /// 文件名词干（末尾的 `.txt` 已剥离一次）
    stem: String,
}

impl FileStore {
    /// 按文件名约定创建存储
    pub fn new(name: &str) -> Self {
        let stem = name.strip_suffix(TEXT_SUFFIX).unwrap_or(name);
        Self {
            stem: stem.to_string(),
        }
    }

    /// 获取文件名词干
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// 读取路径：`<stem>.txt`
    pub fn read_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.stem, TEXT_SUFFIX))
    }

    /// 写出路径：`<stem>_result.txt`
    pub fn write_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}{}", self.stem, RESULT_MARK, TEXT_SUFFIX))
    }

    /// 整文件读入图文本
    pub fn load(&self) -> Result<String> {
        Ok(fs::read_to_string(self.read_path())?)
    }

    /// 整文件写出图文本
    ///
    /// 先写临时文件再原子改名，崩溃不会留下半截写出文件
    pub fn save(&self, text: &str) -> Result<()> {
        let target = self.write_path();
        let tmp = PathBuf::from(format!(
            "{}{}{}{}",
            self.stem, RESULT_MARK, TEXT_SUFFIX, TMP_SUFFIX
        ));

        fs::write(&tmp, text)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}
