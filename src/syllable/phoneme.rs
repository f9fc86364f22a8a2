//! 音素分类器
//!
//! 去除重音数字后，根据特征表将符号标记为元音或辅音

use crate::syllable::error::{Result, SyllabifyError};
use crate::syllable::features::FeatureTable;
use crate::syllable::types::Phoneme;

/// 去除末尾的重音数字（"IH0" → "IH"）
pub fn strip_stress(symbol: &str) -> &str {
    symbol.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// 音素分类器
pub struct PhonemeClassifier<'a> {
    features: &'a FeatureTable,
}

impl<'a> PhonemeClassifier<'a> {
    pub fn new(features: &'a FeatureTable) -> Self {
        Self { features }
    }

    /// 分类单个符号
    ///
    /// 符号不区分大小写；既非元音也非辅音时返回 `UnrecognizedPhoneme`
    pub fn classify(&self, symbol: &str) -> Result<Phoneme> {
        let bare = strip_stress(symbol.trim()).to_ascii_uppercase();

        match self.features.category(&bare) {
            Some(kind) => Ok(Phoneme::new(bare, kind)),
            None => Err(SyllabifyError::UnrecognizedPhoneme(symbol.to_string())),
        }
    }

    /// 分类以空白分隔的整条音标串
    ///
    /// 任一符号无法识别即整体失败，不返回部分结果
    pub fn classify_all(&self, transcription: &str) -> Result<Vec<Phoneme>> {
        transcription
            .split_whitespace()
            .map(|symbol| self.classify(symbol))
            .collect()
    }
}
