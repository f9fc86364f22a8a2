//! 末尾音节修复
//!
//! 词尾辅音后面没有元音时，会留下一个只有声母的音节。英语音节必须有韵核，
//! 因此把这个声母并入前一音节的韵尾，并删除末尾音节。

use crate::syllable::error::{Result, SyllabifyError};
use crate::syllable::types::{Syllable, SyllableSequence};

/// 修复末尾缺少韵核的音节
///
/// 只操作最后两个位置，且只通过 `Vec` 访问
pub fn repair_last_syllable(mut syllables: Vec<Syllable>) -> Result<Vec<Syllable>> {
    let Some(last) = syllables.last() else {
        return Err(SyllabifyError::UnresolvableLastSyllable(String::new()));
    };

    if last.nucleus.is_some() {
        return Ok(syllables);
    }

    // 只有纯声母音节可以合并；没有前一音节时无处可并
    if last.onset.is_none() || last.coda.is_some() || syllables.len() < 2 {
        return Err(unresolvable(syllables));
    }

    let Some(onset) = syllables.pop().and_then(|s| s.onset) else {
        return Err(unresolvable(syllables));
    };

    let penultimate = syllables.len() - 1;
    tracing::debug!(
        "末尾音节无韵核，将声母 {} 并入前一音节韵尾",
        onset
    );
    syllables[penultimate].extend_coda(onset)?;

    Ok(syllables)
}

fn unresolvable(syllables: Vec<Syllable>) -> SyllabifyError {
    SyllabifyError::UnresolvableLastSyllable(SyllableSequence::new(syllables).to_string())
}
