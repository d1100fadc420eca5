//! 자모 판별과 호환 자모 ↔ 조합형 자모 변환
//!
//! 호환 자모(U+3131~U+3163)는 키보드에서 단독으로 쓰는 형태,
//! 조합형 자모(초성 U+1100~, 중성 U+1161~, 종성 U+11A8~)는
//! 음절 분해/조합에 쓰는 형태입니다.

/// 초성 19자의 호환 자모 형태 (U+1100부터 순서대로)
#[rustfmt::skip]
const LEAD_TO_COMPAT: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 종성 27자의 호환 자모 형태 (U+11A8부터 순서대로)
#[rustfmt::skip]
const TAIL_TO_COMPAT: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 조합형 초성인지 확인
pub fn is_lead(c: char) -> bool {
    ('\u{1100}'..='\u{1112}').contains(&c)
}

/// 조합형 중성인지 확인
pub fn is_medial(c: char) -> bool {
    ('\u{1161}'..='\u{1175}').contains(&c)
}

/// 조합형 종성인지 확인
pub fn is_tail(c: char) -> bool {
    ('\u{11A8}'..='\u{11C2}').contains(&c)
}

/// 자음(호환 자모 또는 조합형 초성/종성)인지 확인
pub fn is_jaeum(c: char) -> bool {
    ('ㄱ'..='ㅎ').contains(&c) || is_lead(c) || is_tail(c)
}

/// 모음(호환 자모 또는 조합형 중성)인지 확인
pub fn is_moeum(c: char) -> bool {
    ('ㅏ'..='ㅣ').contains(&c) || is_medial(c)
}

/// 조합형 자모를 호환 자모로 변환
///
/// 이미 호환 자모면 그대로 돌려줍니다.
pub fn compat_jamo(c: char) -> Option<char> {
    if ('ㄱ'..='ㅎ').contains(&c) || ('ㅏ'..='ㅣ').contains(&c) {
        return Some(c);
    }
    if is_lead(c) {
        return Some(LEAD_TO_COMPAT[(c as u32 - 0x1100) as usize]);
    }
    if is_medial(c) {
        // 중성 ㅏ~ㅣ는 호환 자모와 순서가 같음
        return char::from_u32(c as u32 - 0x1161 + 'ㅏ' as u32);
    }
    if is_tail(c) {
        return Some(TAIL_TO_COMPAT[(c as u32 - 0x11A8) as usize]);
    }
    None
}

/// 호환 자음을 조합형 초성으로 변환
///
/// 이미 조합형 초성이면 그대로 돌려줍니다.
/// 초성이 될 수 없는 자음(ㄳ 등 겹받침)은 None.
pub fn lead(c: char) -> Option<char> {
    if is_lead(c) {
        return Some(c);
    }
    let i = LEAD_TO_COMPAT.iter().position(|&j| j == c)?;
    char::from_u32(0x1100 + i as u32)
}

/// 호환 모음을 조합형 중성으로 변환
pub fn medial(c: char) -> Option<char> {
    if is_medial(c) {
        return Some(c);
    }
    if ('ㅏ'..='ㅣ').contains(&c) {
        return char::from_u32(c as u32 - 'ㅏ' as u32 + 0x1161);
    }
    None
}

/// 호환 자음을 조합형 종성으로 변환
///
/// 종성이 될 수 없는 자음(ㄸ, ㅃ, ㅉ)은 None.
pub fn tail(c: char) -> Option<char> {
    if is_tail(c) {
        return Some(c);
    }
    let i = TAIL_TO_COMPAT.iter().position(|&j| j == c)?;
    char::from_u32(0x11A8 + i as u32)
}

/// 겹자모를 구성 요소로 분해
///
/// 겹받침(ㄳ → ㄱ+ㅅ), 쌍자음(ㄲ → ㄱ+ㄱ), 복합 모음(ㅙ → ㅗ+ㅏ+ㅣ)을
/// 호환 자모 배열로 돌려줍니다. 단일 자모는 None.
pub fn split_multi_element(c: char) -> Option<&'static [char]> {
    let jm = compat_jamo(c)?;
    let elements: &[char] = match jm {
        'ㄲ' => &['ㄱ', 'ㄱ'],
        'ㄳ' => &['ㄱ', 'ㅅ'],
        'ㄵ' => &['ㄴ', 'ㅈ'],
        'ㄶ' => &['ㄴ', 'ㅎ'],
        'ㄸ' => &['ㄷ', 'ㄷ'],
        'ㄺ' => &['ㄹ', 'ㄱ'],
        'ㄻ' => &['ㄹ', 'ㅁ'],
        'ㄼ' => &['ㄹ', 'ㅂ'],
        'ㄽ' => &['ㄹ', 'ㅅ'],
        'ㄾ' => &['ㄹ', 'ㅌ'],
        'ㄿ' => &['ㄹ', 'ㅍ'],
        'ㅀ' => &['ㄹ', 'ㅎ'],
        'ㅃ' => &['ㅂ', 'ㅂ'],
        'ㅄ' => &['ㅂ', 'ㅅ'],
        'ㅆ' => &['ㅅ', 'ㅅ'],
        'ㅉ' => &['ㅈ', 'ㅈ'],
        'ㅐ' => &['ㅏ', 'ㅣ'],
        'ㅒ' => &['ㅑ', 'ㅣ'],
        'ㅔ' => &['ㅓ', 'ㅣ'],
        'ㅖ' => &['ㅕ', 'ㅣ'],
        'ㅘ' => &['ㅗ', 'ㅏ'],
        'ㅙ' => &['ㅗ', 'ㅏ', 'ㅣ'],
        'ㅚ' => &['ㅗ', 'ㅣ'],
        'ㅝ' => &['ㅜ', 'ㅓ'],
        'ㅞ' => &['ㅜ', 'ㅔ'],
        'ㅟ' => &['ㅜ', 'ㅣ'],
        'ㅢ' => &['ㅡ', 'ㅣ'],
        _ => return None,
    };
    Some(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compat_jamo_from_lead() {
        assert_eq!(compat_jamo('\u{1100}'), Some('ㄱ')); // ᄀ
        assert_eq!(compat_jamo('\u{1112}'), Some('ㅎ')); // ᄒ
    }

    #[test]
    fn test_compat_jamo_from_tail() {
        assert_eq!(compat_jamo('\u{11C2}'), Some('ㅎ')); // ᇂ
        assert_eq!(compat_jamo('\u{11AA}'), Some('ㄳ')); // ᆪ
    }

    #[test]
    fn test_compat_jamo_from_medial() {
        assert_eq!(compat_jamo('\u{1161}'), Some('ㅏ'));
        assert_eq!(compat_jamo('\u{1175}'), Some('ㅣ'));
    }

    #[test]
    fn test_compat_jamo_passthrough() {
        assert_eq!(compat_jamo('ㄱ'), Some('ㄱ'));
        assert_eq!(compat_jamo('ㅣ'), Some('ㅣ'));
        assert_eq!(compat_jamo('a'), None);
    }

    #[test]
    fn test_lead_medial_tail_conversion() {
        assert_eq!(lead('ㄱ'), Some('\u{1100}'));
        assert_eq!(lead('ㅎ'), Some('\u{1112}'));
        assert_eq!(lead('ㄳ'), None); // 겹받침은 초성 불가
        assert_eq!(medial('ㅏ'), Some('\u{1161}'));
        assert_eq!(medial('ㅣ'), Some('\u{1175}'));
        assert_eq!(tail('ㄳ'), Some('\u{11AA}'));
        assert_eq!(tail('ㄸ'), None); // ㄸ은 종성 불가
    }

    #[test]
    fn test_conversion_roundtrip() {
        for i in 0..19u32 {
            let l = char::from_u32(0x1100 + i).unwrap();
            assert_eq!(lead(compat_jamo(l).unwrap()), Some(l));
        }
        for i in 0..27u32 {
            let t = char::from_u32(0x11A8 + i).unwrap();
            assert_eq!(tail(compat_jamo(t).unwrap()), Some(t));
        }
    }

    #[test]
    fn test_predicates() {
        assert!(is_jaeum('ㄱ'));
        assert!(is_jaeum('\u{1100}'));
        assert!(is_jaeum('\u{11C2}'));
        assert!(is_moeum('ㅏ'));
        assert!(is_moeum('\u{1175}'));
        assert!(!is_jaeum('ㅏ'));
        assert!(!is_moeum('ㄱ'));
        assert!(!is_jaeum('a'));
    }

    #[test]
    fn test_multi_elements() {
        assert_eq!(split_multi_element('ㄲ'), Some(&['ㄱ', 'ㄱ'][..]));
        assert_eq!(split_multi_element('ㅄ'), Some(&['ㅂ', 'ㅅ'][..]));
        assert_eq!(split_multi_element('ㅙ'), Some(&['ㅗ', 'ㅏ', 'ㅣ'][..]));
        assert_eq!(split_multi_element('ㄱ'), None);
        // 조합형 종성도 호환 자모로 바꾼 뒤 분해
        assert_eq!(split_multi_element('\u{11AA}'), Some(&['ㄱ', 'ㅅ'][..]));
    }
}
