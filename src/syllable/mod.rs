//! 音节切分层
//!
//! 将 ARPABET 音标串切分为音节，每个音节分解为声母/韵核/韵尾。
//!
//! ## 处理流程
//! 1. 音素分类（去除重音数字，区分元音/辅音）
//! 2. 构建音素簇（元音单独成簇，辅音连续成簇，NG 之后强制断簇）
//! 3. 组装音节（边界辅音簇交给规则引擎）
//! 4. 六条音系规则切分边界辅音簇
//! 5. 修复末尾缺少韵核的音节

mod assembler;
mod cluster;
mod engine;
mod error;
mod features;
mod phoneme;
mod repair;
mod rules;
mod types;

pub use assembler::SyllableAssembler;
pub use cluster::{ClusterBuilder, VELAR_NASAL};
pub use engine::{SyllableEngine, WordOutcome, WordReport};
pub use error::{Result, SyllabifyError};
pub use features::{FeatureTable, Manner, PhonemeClass, PhonemeFeatures, Voicing, ARPABET};
pub use phoneme::{strip_stress, PhonemeClassifier};
pub use repair::repair_last_syllable;
pub use rules::{BoundarySplit, PhonotacticRule, RuleEngine, GLOTTAL_FRICATIVE};
pub use types::{Cluster, Phoneme, PhonemeKind, Syllable, SyllableSequence};
