//! 자모 획수 세기

use super::jamo::{compat_jamo, split_multi_element};
use super::{is_syllable, split_compat};

/// 단일 자모의 획수
#[rustfmt::skip]
fn base_stroke(c: char) -> u32 {
    match c {
        'ㄱ' => 1, 'ㄴ' => 1, 'ㄷ' => 2, 'ㄹ' => 3, 'ㅁ' => 3,
        'ㅂ' => 4, 'ㅅ' => 2, 'ㅇ' => 1, 'ㅈ' => 3, 'ㅊ' => 4,
        'ㅋ' => 2, 'ㅌ' => 3, 'ㅍ' => 4, 'ㅎ' => 3,
        'ㅏ' => 2, 'ㅑ' => 3, 'ㅓ' => 2, 'ㅕ' => 3, 'ㅗ' => 2,
        'ㅛ' => 3, 'ㅜ' => 2, 'ㅠ' => 3, 'ㅡ' => 1, 'ㅣ' => 1,
        _ => 0,
    }
}

/// 문자의 획수
///
/// 완성형 음절은 초성/중성/종성 획수의 합,
/// 겹자모는 구성 요소 획수의 합입니다.
/// 한글이 아닌 문자는 0.
pub fn stroke(c: char) -> u32 {
    if is_syllable(c) {
        if let Some((l, m, t)) = split_compat(c) {
            return stroke(l) + stroke(m) + t.map_or(0, stroke);
        }
        return 0;
    }

    let jm = match compat_jamo(c) {
        Some(jm) => jm,
        None => return 0,
    };
    match split_multi_element(jm) {
        Some(elements) => elements.iter().map(|&e| base_stroke(e)).sum(),
        None => base_stroke(jm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_sentence() {
        let expected = [5, 5, 3, 0, 4, 5];
        for (c, want) in "세상아 안녕".chars().zip(expected) {
            assert_eq!(stroke(c), want, "{}", c);
        }
    }

    #[test]
    fn test_stroke_multi_element_jamo() {
        assert_eq!(stroke('ㅉ'), 6); // ㅈ + ㅈ
        assert_eq!(stroke('ㅒ'), 4); // ㅑ + ㅣ
        assert_eq!(stroke('ㅙ'), 5); // ㅗ + ㅏ + ㅣ
    }

    #[test]
    fn test_stroke_single_jamo() {
        assert_eq!(stroke('ㄱ'), 1);
        assert_eq!(stroke('ㅂ'), 4);
        assert_eq!(stroke('ㅣ'), 1);
    }

    #[test]
    fn test_stroke_non_hangul() {
        assert_eq!(stroke('a'), 0);
        assert_eq!(stroke(' '), 0);
    }
}
