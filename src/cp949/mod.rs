//! CP949(확장 완성형, UHC) ↔ UTF-8 변환
//!
//! 정렬된 대응 테이블과 이진 탐색으로 양방향 변환을 수행합니다.
//! 변환은 실패하지 않습니다: 테이블에 없는 코드는 디코드 시 U+FFFD,
//! 인코드 시 `?`로 대체되어 큰 스트림도 끝까지 변환됩니다.
//!
//! 전체 버퍼를 한 번에 변환하는 [`decode`]/[`encode`]와,
//! 청크 경계에서 쪼개진 멀티바이트 시퀀스를 올바르게 버퍼링하는
//! 스트리밍 어댑터 [`Reader`]/[`Writer`]를 제공합니다.

mod encoding;
mod stream;
mod table;
mod transcoder;

pub use encoding::{Cp949, Decoder, Encoder};
pub use stream::{Reader, Writer};
pub use table::{shared, CodeEntry, CodeTable, TableError};
pub use transcoder::{Direction, Transcoder};

/// CP949 바이트열을 UTF-8 바이트열로 변환
///
/// 입력 끝에 홀로 남은 리드 바이트는 U+FFFD로 강제 소비됩니다.
pub fn decode(cp949: &[u8]) -> Vec<u8> {
    let mut tr = Transcoder::new(Direction::Decode);
    let (_, out) = tr.translate(cp949, true);
    out.to_vec()
}

/// CP949 바이트열을 `String`으로 변환
pub fn decode_to_string(cp949: &[u8]) -> String {
    // 디코드 출력은 스칼라 단위로 인코딩되므로 항상 유효한 UTF-8
    String::from_utf8(decode(cp949))
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// UTF-8 바이트열을 CP949 바이트열로 변환
///
/// 입력 끝의 잘린 UTF-8 시퀀스는 `?` 하나로 강제 소비됩니다.
pub fn encode(utf8: &[u8]) -> Vec<u8> {
    let mut tr = Transcoder::new(Direction::Encode);
    let (_, out) = tr.translate(utf8, true);
    out.to_vec()
}

/// 문자열을 CP949 바이트열로 변환
pub fn encode_str(s: &str) -> Vec<u8> {
    encode(s.as_bytes())
}
