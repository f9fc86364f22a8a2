//! 音素特征表
//!
//! 符号 → 发音特征（类别、发音方式、清浊、类）的映射，以及由此派生的谓词集合。
//! 特征表在启动时构建一次，之后只读，可在线程间共享。

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::syllable::types::PhonemeKind;

lazy_static::lazy_static! {
    /// 内置 ARPABET 特征表（进程级，只读）
    pub static ref ARPABET: Arc<FeatureTable> = Arc::new(FeatureTable::arpabet());
}

/// 发音方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Manner {
    /// 塞音
    Plosive,
    /// 塞擦音
    Affricate,
    /// 擦音
    Fricative,
    /// 近音
    Approximant,
    /// 鼻音
    Nasal,
}

/// 清浊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voicing {
    Voiced,
    Voiceless,
}

/// 辅音类（仅近音需要区分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeClass {
    /// 流音（L、R）
    Liquid,
    /// 滑音（W、Y）
    Glide,
}

/// 单个音素的特征行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeFeatures {
    pub symbol: String,
    pub category: PhonemeKind,
    /// 元音没有发音方式
    #[serde(default)]
    pub manner: Option<Manner>,
    pub voicing: Voicing,
    #[serde(default)]
    pub class: Option<PhonemeClass>,
}

/// 内置 ARPABET 特征（39 个音素）
const ARPABET_ROWS: &[(
    &str,
    PhonemeKind,
    Option<Manner>,
    Voicing,
    Option<PhonemeClass>,
)] = {
    use Manner::*;
    use PhonemeClass::*;
    use PhonemeKind::{Consonant as C, Vowel as V};
    use Voicing::*;
    &[
        // 元音
        ("AA", V, None, Voiced, None),
        ("AE", V, None, Voiced, None),
        ("AH", V, None, Voiced, None),
        ("AO", V, None, Voiced, None),
        ("AW", V, None, Voiced, None),
        ("AY", V, None, Voiced, None),
        ("EH", V, None, Voiced, None),
        ("ER", V, None, Voiced, None),
        ("EY", V, None, Voiced, None),
        ("IH", V, None, Voiced, None),
        ("IY", V, None, Voiced, None),
        ("OW", V, None, Voiced, None),
        ("OY", V, None, Voiced, None),
        ("UH", V, None, Voiced, None),
        ("UW", V, None, Voiced, None),
        // 塞音
        ("B", C, Some(Plosive), Voiced, None),
        ("D", C, Some(Plosive), Voiced, None),
        ("G", C, Some(Plosive), Voiced, None),
        ("P", C, Some(Plosive), Voiceless, None),
        ("T", C, Some(Plosive), Voiceless, None),
        ("K", C, Some(Plosive), Voiceless, None),
        // 塞擦音
        ("CH", C, Some(Affricate), Voiceless, None),
        ("JH", C, Some(Affricate), Voiced, None),
        // 擦音
        ("DH", C, Some(Fricative), Voiced, None),
        ("TH", C, Some(Fricative), Voiceless, None),
        ("F", C, Some(Fricative), Voiceless, None),
        ("V", C, Some(Fricative), Voiced, None),
        ("S", C, Some(Fricative), Voiceless, None),
        ("Z", C, Some(Fricative), Voiced, None),
        ("SH", C, Some(Fricative), Voiceless, None),
        ("ZH", C, Some(Fricative), Voiced, None),
        ("HH", C, Some(Fricative), Voiceless, None),
        // 鼻音
        ("M", C, Some(Nasal), Voiced, None),
        ("N", C, Some(Nasal), Voiced, None),
        ("NG", C, Some(Nasal), Voiced, None),
        // 近音
        ("L", C, Some(Approximant), Voiced, Some(Liquid)),
        ("R", C, Some(Approximant), Voiced, Some(Liquid)),
        ("W", C, Some(Approximant), Voiced, Some(Glide)),
        ("Y", C, Some(Approximant), Voiced, Some(Glide)),
    ]
};

/// 音素特征表
///
/// 派生集合在构建时一次性计算
#[derive(Debug, Clone)]
pub struct FeatureTable {
    rows: HashMap<String, PhonemeFeatures>,
    vowels: HashSet<String>,
    consonants: HashSet<String>,
    affricates: HashSet<String>,
    obstruents: HashSet<String>,
    voiced_obstruents: HashSet<String>,
    approximants: HashSet<String>,
    liquids: HashSet<String>,
    glides: HashSet<String>,
}

impl FeatureTable {
    /// 内置 ARPABET 特征表
    pub fn arpabet() -> Self {
        let rows = ARPABET_ROWS
            .iter()
            .map(|&(symbol, category, manner, voicing, class)| PhonemeFeatures {
                symbol: symbol.to_string(),
                category,
                manner,
                voicing,
                class,
            })
            .collect();
        Self::build(rows)
    }

    /// 由特征行构建，校验重复符号与缺失的发音方式
    pub fn from_rows(rows: Vec<PhonemeFeatures>) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("特征表为空");
        }

        let mut seen = HashSet::new();
        for row in &rows {
            let symbol = row.symbol.trim();
            if symbol.is_empty() {
                anyhow::bail!("特征表包含空符号");
            }
            if !seen.insert(symbol.to_uppercase()) {
                anyhow::bail!("特征表中音素重复: {}", symbol);
            }
            if row.category == PhonemeKind::Consonant && row.manner.is_none() {
                anyhow::bail!("辅音 {} 缺少发音方式", symbol);
            }
        }

        Ok(Self::build(rows))
    }

    /// 从 JSON 数组解析特征表
    pub fn from_json_str(content: &str) -> Result<Self> {
        let rows: Vec<PhonemeFeatures> =
            serde_json::from_str(content).context("特征表 JSON 解析失败")?;
        Self::from_rows(rows)
    }

    /// 从文件加载特征表
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("加载音素特征表: {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取特征表 {:?}", path))?;
        let table = Self::from_json_str(&content)?;
        tracing::info!("特征表加载完成，共 {} 个音素", table.len());
        Ok(table)
    }

    fn build(rows: Vec<PhonemeFeatures>) -> Self {
        let rows: HashMap<String, PhonemeFeatures> = rows
            .into_iter()
            .map(|mut row| {
                row.symbol = row.symbol.trim().to_uppercase();
                (row.symbol.clone(), row)
            })
            .collect();

        let select = |pred: &dyn Fn(&PhonemeFeatures) -> bool| -> HashSet<String> {
            rows.values()
                .filter(|row| pred(row))
                .map(|row| row.symbol.clone())
                .collect()
        };

        let is_consonant = |row: &PhonemeFeatures| row.category == PhonemeKind::Consonant;
        let has_manner = |row: &PhonemeFeatures, manner: Manner| {
            is_consonant(row) && row.manner == Some(manner)
        };

        let vowels = select(&|row| row.category == PhonemeKind::Vowel);
        let consonants = select(&is_consonant);
        let affricates = select(&|row| has_manner(row, Manner::Affricate));
        let obstruents =
            select(&|row| has_manner(row, Manner::Plosive) || has_manner(row, Manner::Fricative));
        let voiced = select(&|row| row.voicing == Voicing::Voiced);
        let voiced_obstruents = obstruents.intersection(&voiced).cloned().collect();
        let approximants = select(&|row| has_manner(row, Manner::Approximant));
        let liquids = select(&|row| is_consonant(row) && row.class == Some(PhonemeClass::Liquid));
        let glides = approximants.difference(&liquids).cloned().collect();

        Self {
            rows,
            vowels,
            consonants,
            affricates,
            obstruents,
            voiced_obstruents,
            approximants,
            liquids,
            glides,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 查询某个音素的完整特征
    pub fn features(&self, symbol: &str) -> Option<&PhonemeFeatures> {
        self.rows.get(symbol)
    }

    /// 音素类别，未知符号返回 None
    pub fn category(&self, symbol: &str) -> Option<PhonemeKind> {
        if self.vowels.contains(symbol) {
            Some(PhonemeKind::Vowel)
        } else if self.consonants.contains(symbol) {
            Some(PhonemeKind::Consonant)
        } else {
            None
        }
    }

    pub fn is_approximant(&self, symbol: &str) -> bool {
        self.approximants.contains(symbol)
    }

    /// 阻塞音 = 塞音 ∪ 擦音
    pub fn is_obstruent(&self, symbol: &str) -> bool {
        self.obstruents.contains(symbol)
    }

    pub fn is_voiced_obstruent(&self, symbol: &str) -> bool {
        self.voiced_obstruents.contains(symbol)
    }

    pub fn is_affricate(&self, symbol: &str) -> bool {
        self.affricates.contains(symbol)
    }

    pub fn is_liquid(&self, symbol: &str) -> bool {
        self.liquids.contains(symbol)
    }

    /// 滑音 = 近音 − 流音
    pub fn is_glide(&self, symbol: &str) -> bool {
        self.glides.contains(symbol)
    }
}

impl Default for FeatureTable {
    fn default() -> Self {
        Self::arpabet()
    }
}
