//! 音节组装器
//!
//! 逐个消费音素簇，把它放进当前（最后一个）音节的声母/韵核/韵尾槽位。
//! 音节边界上的辅音簇交给规则引擎切分。

use crate::syllable::error::Result;
use crate::syllable::features::FeatureTable;
use crate::syllable::rules::RuleEngine;
use crate::syllable::types::{Cluster, PhonemeKind, Syllable};

/// 音节组装器
///
/// 音节按下标归属于输出序列，只通过下标修改
pub struct SyllableAssembler<'a> {
    rules: RuleEngine<'a>,
    syllables: Vec<Syllable>,
}

impl<'a> SyllableAssembler<'a> {
    pub fn new(features: &'a FeatureTable) -> Self {
        Self {
            rules: RuleEngine::new(features),
            syllables: Vec::new(),
        }
    }

    /// 组装整条簇序列（不含末尾修复）
    pub fn assemble(features: &'a FeatureTable, clusters: Vec<Cluster>) -> Result<Vec<Syllable>> {
        let mut assembler = Self::new(features);
        for cluster in clusters {
            assembler.push(cluster)?;
        }
        Ok(assembler.into_syllables())
    }

    /// 放入下一个音素簇
    pub fn push(&mut self, cluster: Cluster) -> Result<()> {
        if self.syllables.is_empty() {
            self.syllables.push(Syllable::default());
        }
        let last = self.syllables.len() - 1;
        let current = &mut self.syllables[last];

        match cluster.kind() {
            PhonemeKind::Vowel => {
                if current.nucleus.is_none() {
                    current.nucleus = Some(cluster);
                } else {
                    self.syllables.push(Syllable::with_nucleus(cluster));
                }
            }
            PhonemeKind::Consonant => {
                if current.is_empty() {
                    current.onset = Some(cluster);
                } else if current.coda.is_some() {
                    // 前一音节已有韵尾（NG 强制断簇），NG 仍归入该韵尾，其余做下一音节的声母
                    let split = self.rules.resolve_velar_nasal(cluster)?;
                    if let Some(coda) = split.coda {
                        current.extend_coda(coda)?;
                    }
                    if let Some(onset) = split.onset {
                        self.syllables.push(Syllable::with_onset(onset));
                    }
                } else if current.nucleus.is_some() {
                    let split = self.rules.resolve_boundary(cluster)?;
                    if let Some(coda) = split.coda {
                        current.extend_coda(coda)?;
                    }
                    if let Some(onset) = split.onset {
                        self.syllables.push(Syllable::with_onset(onset));
                    }
                } else {
                    // 只有声母的音节（NG 强制断簇后出现），继续延长声母
                    let merged = match current.onset.take() {
                        Some(mut onset) => {
                            onset.extend(cluster)?;
                            onset
                        }
                        None => cluster,
                    };
                    if last == 0 {
                        // 词首声母没有前一音节可并
                        current.onset = Some(merged);
                    } else {
                        let split = self.rules.resolve_velar_nasal(merged)?;
                        current.onset = split.onset;
                        if current.is_empty() {
                            self.syllables.pop();
                        }
                        if let Some(coda) = split.coda {
                            self.syllables[last - 1].extend_coda(coda)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    pub fn into_syllables(self) -> Vec<Syllable> {
        self.syllables
    }
}
