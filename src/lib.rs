pub mod cmudict;
pub mod config;
pub mod syllable;

pub use cmudict::CmuDictionary;
pub use config::{OutputFormat, SyllabifierConfig};
pub use syllable::{
    Cluster, FeatureTable, Phoneme, PhonemeKind, Syllable, SyllabifyError, SyllableEngine,
    SyllableSequence, WordOutcome, WordReport,
};

/// 使用内置 ARPABET 特征表切分音标串
pub fn syllabify(transcription: &str) -> syllable::Result<SyllableSequence> {
    SyllableEngine::default().syllabify(transcription)
}

/// 使用内置 ARPABET 特征表统计音节数
pub fn count_syllables(transcription: &str) -> syllable::Result<usize> {
    SyllableEngine::default().count_syllables(transcription)
}
