//! 받침 유무에 따른 조사 선택
//!
//! 이/가, 은/는처럼 앞말의 받침에 따라 형태가 갈리는 조사를
//! 단어에 맞게 붙여줍니다.

use super::split;

/// 단어 마지막 음절의 종성 (조합형 자모)
///
/// 마지막 글자가 완성형 음절이 아니거나 받침이 없으면 None.
pub fn last_consonant(word: &str) -> Option<char> {
    let c = word.chars().last()?;
    let (_, _, t) = split(c)?;
    t
}

/// 받침 유무에 맞는 조사를 골라 단어 뒤에 붙인 문자열 반환
///
/// `with_tail`은 받침이 있을 때(이, 은, 을, 과, 이랑, 으로),
/// `without_tail`은 받침이 없을 때(가, 는, 를, 와, 랑, 로) 형태입니다.
/// (으)로 계열은 예외로 ㄹ 받침에도 받침 없는 형태를 씁니다 (마을로).
pub fn append_postposition(word: &str, with_tail: &str, without_tail: &str) -> String {
    let chosen = match last_consonant(word) {
        None => without_tail,
        Some('\u{11AF}') if with_tail.strip_prefix('으') == Some(without_tail) => without_tail,
        Some(_) => with_tail,
    };
    let mut out = String::with_capacity(word.len() + chosen.len());
    out.push_str(word);
    out.push_str(chosen);
    out
}
