//! 한글 음절 조합/분해와 자모 유틸리티
//!
//! CP949 코덱과는 독립적인 언어 유틸리티 모듈입니다.
//! 완성형 음절(가~힣)의 초성/중성/종성 분해, 자모 조합,
//! 획수 세기, 조사 선택을 제공합니다.

mod jamo;
mod postposition;
mod stroke;

pub use jamo::{
    compat_jamo, is_jaeum, is_lead, is_medial, is_moeum, is_tail, lead, medial,
    split_multi_element, tail,
};
pub use postposition::{append_postposition, last_consonant};
pub use stroke::stroke;

/// 완성형 음절 시작 코드포인트 (가)
const SYLLABLE_BASE: u32 = 0xAC00;
/// 완성형 음절 끝 코드포인트 (힣)
const SYLLABLE_LAST: u32 = 0xD7A3;
/// 중성 개수
const MEDIAL_COUNT: u32 = 21;
/// 종성 칸 수 (종성 없음 포함)
const TAIL_COUNT: u32 = 28;

/// 완성형 음절인지 확인
fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// 한글(완성형 음절 또는 자모)인지 확인
pub fn is_hangul(c: char) -> bool {
    is_syllable(c) || is_jaeum(c) || is_moeum(c)
}

/// 초성/중성/종성을 완성형 음절로 조합 (NFD → NFC)
///
/// 호환 자모와 조합형 자모 모두 받습니다.
/// 조합할 수 없는 입력이면 U+FFFD를 돌려줍니다.
pub fn join(l: char, m: char, t: Option<char>) -> char {
    let li = match jamo::lead(l) {
        Some(c) => c as u32 - 0x1100,
        None => return '\u{FFFD}',
    };
    let mi = match jamo::medial(m) {
        Some(c) => c as u32 - 0x1161,
        None => return '\u{FFFD}',
    };
    let ti = match t {
        None => 0,
        Some(tc) => match jamo::tail(tc) {
            Some(c) => c as u32 - 0x11A8 + 1,
            None => return '\u{FFFD}',
        },
    };
    char::from_u32(SYLLABLE_BASE + (li * MEDIAL_COUNT + mi) * TAIL_COUNT + ti)
        .unwrap_or('\u{FFFD}')
}

/// 완성형 음절을 조합형 자모로 분해 (NFC → NFD)
///
/// 반환: (초성, 중성, 종성). 음절이 아니면 None.
pub fn split(c: char) -> Option<(char, char, Option<char>)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - SYLLABLE_BASE;
    let ti = offset % TAIL_COUNT;
    let mi = (offset / TAIL_COUNT) % MEDIAL_COUNT;
    let li = offset / (TAIL_COUNT * MEDIAL_COUNT);

    let l = char::from_u32(0x1100 + li)?;
    let m = char::from_u32(0x1161 + mi)?;
    let t = if ti == 0 {
        None
    } else {
        char::from_u32(0x11A8 + ti - 1)
    };
    Some((l, m, t))
}

/// 완성형 음절을 호환 자모로 분해
pub fn split_compat(c: char) -> Option<(char, char, Option<char>)> {
    let (l, m, t) = split(c)?;
    Some((
        jamo::compat_jamo(l)?,
        jamo::compat_jamo(m)?,
        match t {
            Some(tc) => Some(jamo::compat_jamo(tc)?),
            None => None,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join('ㅅ', 'ㅓ', None), '서');
        assert_eq!(join('ㅇ', 'ㅜ', Some('ㄹ')), '울');
        assert_eq!(join('ㅍ', 'ㅕ', Some('ㅇ')), '평');
        assert_eq!(join('ㅇ', 'ㅑ', Some('ㅇ')), '양');
    }

    #[test]
    fn test_join_conjoining_jamo() {
        // 조합형 자모로도 조합 가능
        assert_eq!(join('\u{1109}', '\u{1165}', None), '서');
        assert_eq!(join('\u{110B}', '\u{116E}', Some('\u{11AF}')), '울');
    }

    #[test]
    fn test_join_invalid() {
        assert_eq!(join('a', 'ㅏ', None), '\u{FFFD}');
        assert_eq!(join('ㄱ', 'ㄱ', None), '\u{FFFD}');
        assert_eq!(join('ㄱ', 'ㅏ', Some('ㄸ')), '\u{FFFD}'); // ㄸ은 종성 불가
    }

    #[test]
    fn test_split_compat() {
        let expected = [
            ('자', ('ㅈ', 'ㅏ', None)),
            ('모', ('ㅁ', 'ㅗ', None)),
            ('한', ('ㅎ', 'ㅏ', Some('ㄴ'))),
            ('글', ('ㄱ', 'ㅡ', Some('ㄹ'))),
            ('안', ('ㅇ', 'ㅏ', Some('ㄴ'))),
            ('녕', ('ㄴ', 'ㅕ', Some('ㅇ'))),
        ];
        for (c, lmt) in expected {
            assert_eq!(split_compat(c), Some(lmt), "{}", c);
        }
    }

    #[test]
    fn test_split_non_syllable() {
        assert_eq!(split('a'), None);
        assert_eq!(split('ㄱ'), None);
    }

    #[test]
    fn test_split_join_roundtrip() {
        for c in "가각힣뷁떫한글".chars() {
            let (l, m, t) = split(c).unwrap();
            assert_eq!(join(l, m, t), c);
        }
    }

    #[test]
    fn test_is_hangul() {
        assert!(is_hangul('가'));
        assert!(is_hangul('힣'));
        assert!(is_hangul('ㄱ'));
        assert!(is_hangul('ㅣ'));
        assert!(is_hangul('\u{1100}'));
        assert!(!is_hangul('a'));
        assert!(!is_hangul('漢'));
    }
}
