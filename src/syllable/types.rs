//! 音节切分类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::syllable::error::{Result, SyllabifyError};

/// 音素类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeKind {
    /// 元音
    Vowel,
    /// 辅音
    Consonant,
}

/// 单个音素（已去除重音数字）
///
/// 创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phoneme {
    symbol: String,
    kind: PhonemeKind,
}

impl Phoneme {
    pub fn new(symbol: impl Into<String>, kind: PhonemeKind) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
        }
    }

    pub fn vowel(symbol: impl Into<String>) -> Self {
        Self::new(symbol, PhonemeKind::Vowel)
    }

    pub fn consonant(symbol: impl Into<String>) -> Self {
        Self::new(symbol, PhonemeKind::Consonant)
    }

    /// 音素符号（如 "K"、"IH"）
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn kind(&self) -> PhonemeKind {
        self.kind
    }

    pub fn is_vowel(&self) -> bool {
        self.kind == PhonemeKind::Vowel
    }

    pub fn is_consonant(&self) -> bool {
        self.kind == PhonemeKind::Consonant
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// 音素簇
///
/// 非空，且所有音素同属一个类别。元音簇永远只有一个音素。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    kind: PhonemeKind,
    phonemes: Vec<Phoneme>,
}

impl Cluster {
    /// 以第一个音素开启新簇
    pub fn new(first: Phoneme) -> Self {
        Self {
            kind: first.kind(),
            phonemes: vec![first],
        }
    }

    /// 由辅音序列构建簇，序列为空时返回 None
    pub fn from_consonants(phonemes: Vec<Phoneme>) -> Result<Option<Self>> {
        let mut iter = phonemes.into_iter();
        let Some(first) = iter.next() else {
            return Ok(None);
        };
        if !first.is_consonant() {
            return Err(SyllabifyError::MalformedClusterType {
                kind: PhonemeKind::Consonant,
                phoneme: first.symbol,
            });
        }

        let mut cluster = Self::new(first);
        for phoneme in iter {
            cluster.push(phoneme)?;
        }
        Ok(Some(cluster))
    }

    pub fn kind(&self) -> PhonemeKind {
        self.kind
    }

    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }

    pub fn into_phonemes(self) -> Vec<Phoneme> {
        self.phonemes
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    /// 簇永远非空
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    /// 复杂簇：由多于一个辅音组成
    pub fn is_complex(&self) -> bool {
        self.kind == PhonemeKind::Consonant && self.phonemes.len() > 1
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.phonemes.iter().any(|p| p.symbol() == symbol)
    }

    /// 追加音素
    ///
    /// 类别不一致，或向元音簇追加第二个元音时返回 `MalformedClusterType`
    pub fn push(&mut self, phoneme: Phoneme) -> Result<()> {
        if phoneme.kind() != self.kind || self.kind == PhonemeKind::Vowel {
            return Err(SyllabifyError::MalformedClusterType {
                kind: self.kind,
                phoneme: phoneme.symbol,
            });
        }
        self.phonemes.push(phoneme);
        Ok(())
    }

    /// 合并另一个簇（追加到末尾）
    pub fn extend(&mut self, other: Cluster) -> Result<()> {
        for phoneme in other.phonemes {
            self.push(phoneme)?;
        }
        Ok(())
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phoneme in &self.phonemes {
            f.write_str(phoneme.symbol())?;
        }
        Ok(())
    }
}

/// 音节：声母（onset）、韵核（nucleus）、韵尾（coda）
///
/// 切分完成后，每个保留下来的音节都有韵核
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Syllable {
    pub(crate) onset: Option<Cluster>,
    pub(crate) nucleus: Option<Cluster>,
    pub(crate) coda: Option<Cluster>,
}

impl Syllable {
    pub fn with_onset(onset: Cluster) -> Self {
        Self {
            onset: Some(onset),
            ..Self::default()
        }
    }

    pub fn with_nucleus(nucleus: Cluster) -> Self {
        Self {
            nucleus: Some(nucleus),
            ..Self::default()
        }
    }

    pub fn onset(&self) -> Option<&Cluster> {
        self.onset.as_ref()
    }

    pub fn nucleus(&self) -> Option<&Cluster> {
        self.nucleus.as_ref()
    }

    pub fn coda(&self) -> Option<&Cluster> {
        self.coda.as_ref()
    }

    /// 三个槽位都为空
    pub fn is_empty(&self) -> bool {
        self.onset.is_none() && self.nucleus.is_none() && self.coda.is_none()
    }

    /// 向韵尾追加辅音簇，韵尾不存在时直接创建
    pub fn extend_coda(&mut self, cluster: Cluster) -> Result<()> {
        match self.coda.as_mut() {
            Some(coda) => coda.extend(cluster),
            None => {
                self.coda = Some(cluster);
                Ok(())
            }
        }
    }

    /// 按 onset → nucleus → coda 顺序遍历音素
    pub fn phonemes(&self) -> impl Iterator<Item = &Phoneme> {
        [&self.onset, &self.nucleus, &self.coda]
            .into_iter()
            .flatten()
            .flat_map(|cluster| cluster.phonemes().iter())
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |cluster: &Option<Cluster>| {
            cluster
                .as_ref()
                .map(|c| c.to_string())
                .unwrap_or_default()
        };
        write!(
            f,
            "<o:{}|n:{}|c:{}>",
            slot(&self.onset),
            slot(&self.nucleus),
            slot(&self.coda)
        )
    }
}

/// 单个单词的音节序列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SyllableSequence(Vec<Syllable>);

impl SyllableSequence {
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Self(syllables)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Syllable> {
        self.0.iter()
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Syllable> {
        self.0
    }

    /// 按顺序拼接所有音节的音素符号
    pub fn symbols(&self) -> Vec<&str> {
        self.0
            .iter()
            .flat_map(|s| s.phonemes())
            .map(|p| p.symbol())
            .collect()
    }
}

impl<'a> IntoIterator for &'a SyllableSequence {
    type Item = &'a Syllable;
    type IntoIter = std::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SyllableSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", syllable)?;
        }
        Ok(())
    }
}
