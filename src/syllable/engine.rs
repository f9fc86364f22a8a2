//! 音节切分主引擎
//!
//! 组合音素分类、簇构建、音节组装、规则切分与末尾修复

use std::sync::Arc;

use serde::Serialize;

use crate::cmudict::CmuDictionary;
use crate::syllable::assembler::SyllableAssembler;
use crate::syllable::cluster::ClusterBuilder;
use crate::syllable::error::{Result, SyllabifyError};
use crate::syllable::features::{FeatureTable, ARPABET};
use crate::syllable::phoneme::PhonemeClassifier;
use crate::syllable::repair::repair_last_syllable;
use crate::syllable::types::SyllableSequence;

/// 单词级处理结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WordOutcome {
    /// 切分成功
    Syllabified { syllables: SyllableSequence },
    /// 词典中没有该词
    NotInDictionary,
    /// 切分失败（仅影响该词）
    Failed { error: String },
}

/// 单词处理报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordReport {
    pub word: String,
    /// 词典中的第一个发音
    pub transcription: Option<String>,
    #[serde(flatten)]
    pub outcome: WordOutcome,
}

impl WordReport {
    /// 音节数（仅成功时有值）
    pub fn syllable_count(&self) -> Option<usize> {
        match &self.outcome {
            WordOutcome::Syllabified { syllables } => Some(syllables.len()),
            _ => None,
        }
    }
}

/// 音节切分引擎（可复用，特征表只读共享）
#[derive(Debug, Clone)]
pub struct SyllableEngine {
    features: Arc<FeatureTable>,
}

impl SyllableEngine {
    /// 创建引擎
    ///
    /// # Arguments
    /// * `features` - 启动时构建好的特征表
    pub fn new(features: Arc<FeatureTable>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &FeatureTable {
        &self.features
    }

    /// 将音标串切分为音节
    ///
    /// 纯函数：输出只取决于输入和特征表
    pub fn syllabify(&self, transcription: &str) -> Result<SyllableSequence> {
        // 1. 音素分类（去除重音数字）
        let phonemes = PhonemeClassifier::new(&self.features).classify_all(transcription)?;
        if phonemes.is_empty() {
            return Err(SyllabifyError::EmptyTranscription);
        }

        // 2. 构建音素簇
        let clusters = ClusterBuilder::build(phonemes)?;

        // 3. 组装音节（边界辅音簇交给规则引擎）
        let syllables = SyllableAssembler::assemble(&self.features, clusters)?;

        // 4. 修复末尾音节
        let syllables = repair_last_syllable(syllables)?;

        let sequence = SyllableSequence::new(syllables);
        tracing::debug!("音节切分: {} -> {}", transcription, sequence);
        Ok(sequence)
    }

    /// 音节数
    pub fn count_syllables(&self, transcription: &str) -> Result<usize> {
        self.syllabify(transcription).map(|s| s.len())
    }

    /// 查词典并切分
    ///
    /// 词典未收录时返回 `Ok(None)`
    pub fn syllabify_word(
        &self,
        dictionary: &CmuDictionary,
        word: &str,
    ) -> Result<Option<SyllableSequence>> {
        match dictionary.get_first(word) {
            Some(transcription) => self.syllabify(transcription).map(Some),
            None => Ok(None),
        }
    }

    /// 批量处理单词，每个单词的失败互不影响
    pub fn syllabify_words<'w, I>(&self, dictionary: &CmuDictionary, words: I) -> Vec<WordReport>
    where
        I: IntoIterator<Item = &'w str>,
    {
        words
            .into_iter()
            .map(|word| self.report(word, dictionary.get_first(word)))
            .collect()
    }

    /// 为单个单词生成报告
    ///
    /// `transcription` 为 None 表示词典未收录
    pub fn report(&self, word: &str, transcription: Option<&str>) -> WordReport {
        let outcome = match transcription {
            None => {
                tracing::warn!("词典中未找到: {}", word);
                WordOutcome::NotInDictionary
            }
            Some(phonemes) => match self.syllabify(phonemes) {
                Ok(syllables) => WordOutcome::Syllabified { syllables },
                Err(e) => {
                    tracing::warn!("切分 {} 失败: {}", word, e);
                    WordOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            },
        };

        WordReport {
            word: word.to_string(),
            transcription: transcription.map(str::to_string),
            outcome,
        }
    }
}

impl Default for SyllableEngine {
    fn default() -> Self {
        Self::new(Arc::clone(&ARPABET))
    }
}
