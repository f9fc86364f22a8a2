// CMU 发音词典
//
// 解析 CMU 格式词典（`WORD  PH1 PH2 ...`，多音词以 `WORD(1)` 标记），
// 提供不区分大小写的查询。词典文件为 latin-1 编码，按字节宽松解码。

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// 注释行前缀
const COMMENT_PREFIX: &str = ";;;";

/// CMU 发音词典
#[derive(Debug, Clone, Default)]
pub struct CmuDictionary {
    /// 大写单词 → 全部发音（按文件顺序）
    entries: HashMap<String, Vec<String>>,
}

impl CmuDictionary {
    /// 解析词典文本
    ///
    /// 无法解析的行直接跳过
    pub fn parse(content: &str) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        let mut skipped = 0usize;

        for line in content.lines() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            match parse_line(line) {
                Some((word, phonemes)) => entries.entry(word).or_default().push(phonemes),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!("词典中有 {} 行无法解析，已跳过", skipped);
        }

        Self { entries }
    }

    /// 按字节解析（非 UTF-8 字符替换为 U+FFFD）
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// 从文件加载词典
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("加载发音词典: {:?}", path);
        let bytes = std::fs::read(path).with_context(|| format!("无法读取词典 {:?}", path))?;
        let dictionary = Self::from_bytes(&bytes);
        if dictionary.is_empty() {
            anyhow::bail!("词典为空: {:?}", path);
        }
        tracing::info!("词典加载完成，共 {} 个词条", dictionary.len());
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&normalize_key(word))
    }

    /// 查询单词的全部发音（不区分大小写）
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&normalize_key(word)).map(|v| v.as_slice())
    }

    /// 查询单词的第一个发音
    pub fn get_first(&self, word: &str) -> Option<&str> {
        self.get(word)
            .and_then(|variants| variants.first())
            .map(|s| s.as_str())
    }
}

/// 词典键：去除首尾空白并转大写
fn normalize_key(word: &str) -> String {
    word.trim().to_uppercase()
}

/// 解析单行，返回 (单词, 发音)
///
/// 标准分隔符为两个空格，兼容新版词典的单空格格式
fn parse_line(line: &str) -> Option<(String, String)> {
    let (word, phonemes) = line
        .split_once("  ")
        .or_else(|| line.split_once(char::is_whitespace))?;

    let word = strip_variant(word.trim());
    // 新版词典行尾可能带 `# 注释`
    let phonemes = phonemes.split('#').next().unwrap_or_default().trim();
    if word.is_empty() || phonemes.is_empty() {
        return None;
    }

    Some((normalize_key(word), phonemes.to_string()))
}

/// 去除多音词后缀 `(1)`
fn strip_variant(word: &str) -> &str {
    if let Some(base) = word.strip_suffix(')') {
        if let Some((stem, index)) = base.rsplit_once('(') {
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                return stem;
            }
        }
    }
    word
}
