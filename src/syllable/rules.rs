//! 音系规则引擎
//!
//! 音节边界上的辅音簇可能一部分属于前一音节的韵尾，一部分属于后一音节的声母。
//! 六条规则按固定顺序执行，每条规则都是纯函数 `(onset) -> (onset', coda_delta)`：
//! 只会把声母开头的一段连续辅音移入韵尾片段，后一条规则看到的是前一条处理后的声母。
//!
//! 规则 3–6 只对复杂声母（多于一个辅音）生效，因此声母一旦被缩减为单个辅音或清空，
//! 后续规则自然不再触发。

use crate::syllable::cluster::VELAR_NASAL;
use crate::syllable::error::Result;
use crate::syllable::features::FeatureTable;
use crate::syllable::types::{Cluster, Phoneme};

/// 声门擦音，永远不出现在韵尾中
pub const GLOTTAL_FRICATIVE: &str = "HH";

/// 唯一允许后接非近音的声母首辅音
const S: &str = "S";

/// 音系规则（按执行顺序排列）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonotacticRule {
    /// 1. NG 不出现在声母中：NG 及其之前的辅音归入韵尾
    NoVelarNasalOnset,
    /// 2. HH 不出现在韵尾中：HH 之前的辅音归入韵尾，HH 留在声母
    NoGlottalCoda,
    /// 3. 塞擦音与 HH 不出现在复杂声母中：该音素及其之前的辅音归入韵尾
    NoComplexAffricate,
    /// 4. 复杂声母的第一个辅音必须是阻塞音：否则首辅音归入韵尾
    ObstruentFirst,
    /// 5. 复杂声母的第二个辅音不能是浊阻塞音：否则前两个辅音归入韵尾
    NoVoicedObstruentSecond,
    /// 6. 首辅音不是 S 时，第二个辅音必须是近音：否则前两个辅音归入韵尾
    ApproximantSecond,
}

impl PhonotacticRule {
    /// 全部规则，按执行顺序
    pub const ALL: [PhonotacticRule; 6] = [
        PhonotacticRule::NoVelarNasalOnset,
        PhonotacticRule::NoGlottalCoda,
        PhonotacticRule::NoComplexAffricate,
        PhonotacticRule::ObstruentFirst,
        PhonotacticRule::NoVoicedObstruentSecond,
        PhonotacticRule::ApproximantSecond,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PhonotacticRule::NoVelarNasalOnset => "no-velar-nasal-onset",
            PhonotacticRule::NoGlottalCoda => "no-glottal-coda",
            PhonotacticRule::NoComplexAffricate => "no-complex-affricate",
            PhonotacticRule::ObstruentFirst => "obstruent-first",
            PhonotacticRule::NoVoicedObstruentSecond => "no-voiced-obstruent-second",
            PhonotacticRule::ApproximantSecond => "approximant-second",
        }
    }

    /// 计算需要从声母开头移入韵尾的辅音个数（0 表示规则不触发）
    pub fn split_len(&self, features: &FeatureTable, onset: &[Phoneme]) -> usize {
        let position = |symbol: &str| onset.iter().position(|p| p.symbol() == symbol);
        let complex = onset.len() > 1;

        match self {
            PhonotacticRule::NoVelarNasalOnset => onset
                .iter()
                .rposition(|p| p.symbol() == VELAR_NASAL)
                .map_or(0, |i| i + 1),
            PhonotacticRule::NoGlottalCoda => position(GLOTTAL_FRICATIVE).unwrap_or(0),
            PhonotacticRule::NoComplexAffricate if complex => onset
                .iter()
                .rposition(|p| {
                    p.symbol() == GLOTTAL_FRICATIVE || features.is_affricate(p.symbol())
                })
                .map_or(0, |i| i + 1),
            PhonotacticRule::ObstruentFirst if complex => {
                if features.is_obstruent(onset[0].symbol()) {
                    0
                } else {
                    1
                }
            }
            PhonotacticRule::NoVoicedObstruentSecond if complex => {
                if features.is_voiced_obstruent(onset[1].symbol()) {
                    2
                } else {
                    0
                }
            }
            PhonotacticRule::ApproximantSecond if complex => {
                if onset[0].symbol() != S && !features.is_approximant(onset[1].symbol()) {
                    2
                } else {
                    0
                }
            }
            _ => 0,
        }
    }

    /// 执行规则：返回 (剩余声母, 移入韵尾的片段)
    pub fn apply(
        &self,
        features: &FeatureTable,
        mut onset: Vec<Phoneme>,
    ) -> (Vec<Phoneme>, Vec<Phoneme>) {
        let n = self.split_len(features, &onset).min(onset.len());
        if n == 0 {
            return (onset, Vec::new());
        }

        let remaining = onset.split_off(n);
        tracing::debug!(
            "规则 {} 触发: {:?} 移入韵尾",
            self.name(),
            onset.iter().map(|p| p.symbol()).collect::<Vec<_>>()
        );
        (remaining, onset)
    }
}

/// 边界切分结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySplit {
    /// 归入前一音节韵尾的片段
    pub coda: Option<Cluster>,
    /// 留给下一音节的声母
    pub onset: Option<Cluster>,
}

/// 规则引擎
pub struct RuleEngine<'a> {
    features: &'a FeatureTable,
}

impl<'a> RuleEngine<'a> {
    pub fn new(features: &'a FeatureTable) -> Self {
        Self { features }
    }

    /// 切分音节边界上的辅音簇
    ///
    /// 只返回切分结果，不修改调用方的音节
    pub fn resolve_boundary(&self, cluster: Cluster) -> Result<BoundarySplit> {
        let mut onset = cluster.into_phonemes();
        let mut coda: Vec<Phoneme> = Vec::new();

        for rule in PhonotacticRule::ALL {
            let (remaining, delta) = rule.apply(self.features, onset);
            coda.extend(delta);
            onset = remaining;
        }

        Ok(BoundarySplit {
            coda: Cluster::from_consonants(coda)?,
            onset: Cluster::from_consonants(onset)?,
        })
    }

    /// 只执行规则 1：NG 及其之前的辅音归入韵尾
    ///
    /// 用于前一音节已有韵尾、或正在延长非词首声母的辅音簇
    pub fn resolve_velar_nasal(&self, cluster: Cluster) -> Result<BoundarySplit> {
        let (onset, coda) =
            PhonotacticRule::NoVelarNasalOnset.apply(self.features, cluster.into_phonemes());

        Ok(BoundarySplit {
            coda: Cluster::from_consonants(coda)?,
            onset: Cluster::from_consonants(onset)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consonants(symbols: &[&str]) -> Vec<Phoneme> {
        symbols.iter().map(|s| Phoneme::consonant(*s)).collect()
    }

    fn split(symbols: &[&str]) -> (String, String) {
        let table = FeatureTable::arpabet();
        let engine = RuleEngine::new(&table);
        let cluster = Cluster::from_consonants(consonants(symbols))
            .unwrap()
            .unwrap();
        let result = engine.resolve_boundary(cluster).unwrap();
        let render = |c: Option<Cluster>| c.map(|c| c.to_string()).unwrap_or_default();
        (render(result.coda), render(result.onset))
    }

    #[test]
    fn test_rule_velar_nasal() {
        assert_eq!(split(&["NG"]), ("NG".to_string(), String::new()));
        assert_eq!(split(&["N", "NG"]), ("NNG".to_string(), String::new()));
    }

    #[test]
    fn test_resolve_velar_nasal_only() {
        let table = FeatureTable::arpabet();
        let engine = RuleEngine::new(&table);
        let cluster = |symbols: &[&str]| {
            Cluster::from_consonants(consonants(symbols))
                .unwrap()
                .unwrap()
        };

        let split = engine.resolve_velar_nasal(cluster(&["NG"])).unwrap();
        assert_eq!(split.coda.map(|c| c.to_string()), Some("NG".to_string()));
        assert_eq!(split.onset, None);

        // 规则 4–6 不参与
        let split = engine.resolve_velar_nasal(cluster(&["M", "Y"])).unwrap();
        assert_eq!(split.coda, None);
        assert_eq!(split.onset.map(|c| c.to_string()), Some("MY".to_string()));

        // 多个 NG 时移到最后一个为止
        let split = engine.resolve_velar_nasal(cluster(&["NG", "NG", "K"])).unwrap();
        assert_eq!(split.coda.map(|c| c.to_string()), Some("NGNG".to_string()));
        assert_eq!(split.onset.map(|c| c.to_string()), Some("K".to_string()));
    }

    #[test]
    fn test_rule_glottal_fricative_stays_in_onset() {
        // doghouse: G | HH
        assert_eq!(split(&["G", "HH"]), ("G".to_string(), "HH".to_string()));
        // inhale: N | HH
        assert_eq!(split(&["N", "HH"]), ("N".to_string(), "HH".to_string()));
        assert_eq!(split(&["HH"]), (String::new(), "HH".to_string()));
    }

    #[test]
    fn test_rule_complex_affricate() {
        // textual: K S CH 全部归入韵尾
        assert_eq!(split(&["K", "S", "CH"]), ("KSCH".to_string(), String::new()));
        // 单个塞擦音可以做声母
        assert_eq!(split(&["CH"]), (String::new(), "CH".to_string()));
        assert_eq!(split(&["JH"]), (String::new(), "JH".to_string()));
    }

    #[test]
    fn test_rule_obstruent_first() {
        // amused: M | Y
        assert_eq!(split(&["M", "Y"]), ("M".to_string(), "Y".to_string()));
        // complex: M | P L
        assert_eq!(split(&["M", "P", "L"]), ("M".to_string(), "PL".to_string()));
    }

    #[test]
    fn test_rule_voiced_obstruent_second() {
        // amused: Z D 全部归入韵尾
        assert_eq!(split(&["Z", "D"]), ("ZD".to_string(), String::new()));
        // toothbrush: TH B | R
        assert_eq!(split(&["TH", "B", "R"]), ("THB".to_string(), "R".to_string()));
    }

    #[test]
    fn test_rule_approximant_second() {
        // attract: K T 全部归入韵尾
        assert_eq!(split(&["K", "T"]), ("KT".to_string(), String::new()));
        // asthma: Z M 全部归入韵尾
        assert_eq!(split(&["Z", "M"]), ("ZM".to_string(), String::new()));
        // S 开头的声母不受限制
        assert_eq!(split(&["S", "K", "R"]), (String::new(), "SKR".to_string()));
        assert_eq!(split(&["P", "L"]), (String::new(), "PL".to_string()));
    }

    #[test]
    fn test_rules_chain() {
        // handbag: N | D B → N D B 全部归入韵尾
        assert_eq!(split(&["N", "D", "B"]), ("NDB".to_string(), String::new()));
        // heartbreak: R | T B | R
        assert_eq!(split(&["R", "T", "B", "R"]), ("RTB".to_string(), "R".to_string()));
        // handling: N | D L
        assert_eq!(split(&["N", "D", "L"]), ("N".to_string(), "DL".to_string()));
    }

    #[test]
    fn test_single_consonant_passes_through() {
        for symbol in ["K", "M", "Z", "L", "CH", "Y"] {
            assert_eq!(split(&[symbol]), (String::new(), symbol.to_string()));
        }
    }

    #[test]
    fn test_rules_are_noops_on_short_onsets() {
        let table = FeatureTable::arpabet();
        for rule in PhonotacticRule::ALL {
            let (onset, delta) = rule.apply(&table, Vec::new());
            assert!(onset.is_empty() && delta.is_empty(), "{}", rule.name());
        }

        // 规则 3–6 只作用于复杂声母
        for rule in &PhonotacticRule::ALL[2..] {
            for symbol in ["M", "JH", "Z", "T"] {
                let (onset, delta) = rule.apply(&table, consonants(&[symbol]));
                assert_eq!(onset.len(), 1, "{} on {}", rule.name(), symbol);
                assert!(delta.is_empty());
            }
        }
    }

    #[test]
    fn test_rules_move_prefixes_only() {
        // 每条规则移出的都是声母的前缀，剩余部分保持原有顺序
        let table = FeatureTable::arpabet();
        let samples: [&[&str]; 6] = [
            &["N", "NG"],
            &["K", "S", "HH", "Y"],
            &["S", "CH", "R"],
            &["L", "T", "R"],
            &["D", "Z"],
            &["F", "N", "R"],
        ];

        for sample in samples {
            for rule in PhonotacticRule::ALL {
                let input = consonants(sample);
                let (onset, delta) = rule.apply(&table, input.clone());
                let mut rejoined = delta.clone();
                rejoined.extend(onset);
                assert_eq!(rejoined, input, "{} on {:?}", rule.name(), sample);
            }
        }
    }
}
