//! Property-based tests for the syllabification pipeline.
//!
//! For arbitrary ARPABET sequences containing at least one vowel:
//!
//! 1. **Losslessness**: onset+nucleus+coda across all syllables reproduces the input
//! 2. **Nucleus**: every syllable has exactly one vowel as its nucleus
//! 3. **Count**: the number of syllables equals the number of vowels
//! 4. **Determinism**: syllabifying twice yields identical output
//! 5. **Velar nasal**: NG only appears in the onset of the word-initial syllable

use proptest::prelude::*;
use syllabifier_lib::syllable::{strip_stress, VELAR_NASAL};
use syllabifier_lib::{count_syllables, syllabify, SyllabifyError};

const VOWELS: &[&str] = &[
    "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY", "OW", "OY", "UH", "UW",
];

const CONSONANTS: &[&str] = &[
    "B", "CH", "D", "DH", "F", "G", "HH", "JH", "K", "L", "M", "N", "NG", "P", "R", "S", "SH",
    "T", "TH", "V", "W", "Y", "Z", "ZH",
];

fn arb_vowel() -> impl Strategy<Value = String> {
    (prop::sample::select(VOWELS), 0u8..3).prop_map(|(v, stress)| format!("{}{}", v, stress))
}

fn arb_consonant() -> impl Strategy<Value = String> {
    prop::sample::select(CONSONANTS).prop_map(str::to_string)
}

fn arb_phoneme() -> impl Strategy<Value = String> {
    prop_oneof![arb_vowel(), arb_consonant(), arb_consonant()]
}

/// Transcriptions with at least one vowel somewhere in them
fn arb_transcription() -> impl Strategy<Value = Vec<String>> {
    (
        prop::collection::vec(arb_phoneme(), 0..8),
        arb_vowel(),
        prop::collection::vec(arb_phoneme(), 0..8),
    )
        .prop_map(|(mut before, vowel, after)| {
            before.push(vowel);
            before.extend(after);
            before
        })
}

fn vowel_count(symbols: &[String]) -> usize {
    symbols
        .iter()
        .filter(|s| VOWELS.contains(&strip_stress(s)))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn syllabify_is_lossless(symbols in arb_transcription()) {
        let transcription = symbols.join(" ");
        let syllables = syllabify(&transcription).unwrap();

        let expected: Vec<&str> = symbols.iter().map(|s| strip_stress(s)).collect();
        prop_assert_eq!(syllables.symbols(), expected);
    }

    #[test]
    fn every_syllable_has_a_single_vowel_nucleus(symbols in arb_transcription()) {
        let syllables = syllabify(&symbols.join(" ")).unwrap();

        for syllable in &syllables {
            let nucleus = syllable.nucleus();
            prop_assert!(nucleus.is_some(), "syllable without nucleus: {}", syllable);
            prop_assert_eq!(nucleus.map(|n| n.len()), Some(1));
            prop_assert!(syllable.onset().map_or(true, |c| c.phonemes().iter().all(|p| p.is_consonant())));
            prop_assert!(syllable.coda().map_or(true, |c| c.phonemes().iter().all(|p| p.is_consonant())));
        }
    }

    #[test]
    fn syllable_count_matches_vowel_count(symbols in arb_transcription()) {
        let count = count_syllables(&symbols.join(" ")).unwrap();
        prop_assert_eq!(count, vowel_count(&symbols));
    }

    #[test]
    fn single_vowel_gives_single_syllable(
        before in prop::collection::vec(arb_consonant(), 0..5),
        vowel in arb_vowel(),
        after in prop::collection::vec(arb_consonant(), 0..5),
    ) {
        let mut symbols = before;
        symbols.push(vowel);
        symbols.extend(after);

        prop_assert_eq!(count_syllables(&symbols.join(" ")), Ok(1));
    }

    #[test]
    fn velar_nasal_never_opens_a_later_syllable(symbols in arb_transcription()) {
        let syllables = syllabify(&symbols.join(" ")).unwrap();

        for syllable in syllables.iter().skip(1) {
            prop_assert!(
                syllable.onset().map_or(true, |c| !c.contains(VELAR_NASAL)),
                "NG in onset: {}",
                syllables
            );
        }
    }

    #[test]
    fn velar_nasal_runs_stay_in_coda(
        vowel in arb_vowel(),
        nasals in 1usize..4,
        tail in prop::collection::vec(arb_consonant(), 0..3),
        next in arb_vowel(),
    ) {
        let mut symbols = vec![vowel];
        symbols.extend(std::iter::repeat(VELAR_NASAL.to_string()).take(nasals));
        symbols.extend(tail);
        symbols.push(next);

        let syllables = syllabify(&symbols.join(" ")).unwrap();
        prop_assert_eq!(syllables.len(), 2);
        let coda = syllables.syllables()[0].coda().map(|c| c.to_string()).unwrap_or_default();
        prop_assert!(coda.contains(&VELAR_NASAL.repeat(nasals)), "{}", syllables);
    }

    #[test]
    fn syllabify_is_deterministic(symbols in arb_transcription()) {
        let transcription = symbols.join(" ");
        prop_assert_eq!(syllabify(&transcription), syllabify(&transcription));
    }

    #[test]
    fn consonant_only_input_is_rejected(symbols in prop::collection::vec(arb_consonant(), 1..6)) {
        let result = syllabify(&symbols.join(" "));
        prop_assert!(matches!(result, Err(SyllabifyError::UnresolvableLastSyllable(_))));
    }
}
