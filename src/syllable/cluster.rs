//! 音素簇构建器
//!
//! 将音素序列切分为同类音素的最大连续段：元音各自成簇，辅音连续成簇

use crate::syllable::error::Result;
use crate::syllable::types::{Cluster, Phoneme, PhonemeKind};

/// 软腭鼻音，永远不出现在声母中
pub const VELAR_NASAL: &str = "NG";

/// 簇构建器
pub struct ClusterBuilder;

impl ClusterBuilder {
    /// 构建音素簇
    ///
    /// 辅音只有在当前簇也是辅音簇、且当前簇尚未包含 NG 时才会并入，否则开启新簇
    pub fn build(phonemes: Vec<Phoneme>) -> Result<Vec<Cluster>> {
        let mut clusters: Vec<Cluster> = Vec::new();
        let mut current: Option<Cluster> = None;

        for phoneme in phonemes {
            match current.as_mut() {
                Some(open) if Self::can_extend(open, &phoneme) => {
                    open.push(phoneme)?;
                }
                _ => {
                    // 当前簇已封闭，交给后续阶段
                    if let Some(done) = current.take() {
                        clusters.push(done);
                    }
                    current = Some(Cluster::new(phoneme));
                }
            }
        }

        if let Some(done) = current {
            clusters.push(done);
        }

        Ok(clusters)
    }

    fn can_extend(open: &Cluster, next: &Phoneme) -> bool {
        match (open.kind(), next.kind()) {
            (PhonemeKind::Consonant, PhonemeKind::Consonant) => !open.contains(VELAR_NASAL),
            _ => false,
        }
    }
}
