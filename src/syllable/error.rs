//! 音节切分错误类型

use thiserror::Error;

/// 单个单词切分过程中可能出现的错误
///
/// 所有错误都只作用于当前单词，批量处理时不影响其他单词
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyllabifyError {
    /// 音素既不在元音表也不在辅音表中
    #[error("无法识别的音素: {0}")]
    UnrecognizedPhoneme(String),

    /// 音素簇混入了不同类别的音素
    ///
    /// 内部不变量被破坏（簇构建器保证不会出现），属于程序错误
    #[error("音素簇类型不一致: 无法将 {phoneme} 加入 {kind:?} 簇")]
    MalformedClusterType {
        kind: crate::syllable::types::PhonemeKind,
        phoneme: String,
    },

    /// 末尾音节没有韵核，且无法并入前一个音节
    #[error("无法修复末尾音节: {0}")]
    UnresolvableLastSyllable(String),

    /// 输入中没有任何音素
    #[error("音标串为空")]
    EmptyTranscription,
}

/// 音节切分结果
pub type Result<T> = std::result::Result<T, SyllabifyError>;
