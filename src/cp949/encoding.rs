//! 범용 텍스트 인코딩 어댑터
//!
//! 변환기를 디코더/인코더 변환 객체로 노출하는 얇은 통로입니다.
//! 호스트 쪽 텍스트 인코딩 프레임워크와 연동할 때 쓰는 보조 표면이며
//! 핵심 계약의 일부는 아닙니다.

use super::transcoder::{Direction, Transcoder};

/// CP949 인코딩 마커
#[derive(Debug, Default, Clone, Copy)]
pub struct Cp949;

impl Cp949 {
    pub fn new() -> Self {
        Cp949
    }

    pub fn name(&self) -> &'static str {
        "cp949"
    }

    /// CP949 → UTF-8 변환 객체 생성
    pub fn new_decoder(&self) -> Decoder {
        Decoder {
            transcoder: Transcoder::new(Direction::Decode),
        }
    }

    /// UTF-8 → CP949 변환 객체 생성
    pub fn new_encoder(&self) -> Encoder {
        Encoder {
            transcoder: Transcoder::new(Direction::Encode),
        }
    }
}

/// CP949 → UTF-8 변환 객체
pub struct Decoder {
    transcoder: Transcoder,
}

impl Decoder {
    /// (소비한 입력 바이트 수, 변환 결과) 반환
    ///
    /// `at_eof`가 false면 말미의 불완전한 2바이트 코드는 소비하지 않으므로
    /// 남은 입력을 다음 호출 앞에 다시 붙여야 합니다.
    pub fn transform(&mut self, src: &[u8], at_eof: bool) -> (usize, Vec<u8>) {
        let (n, out) = self.transcoder.translate(src, at_eof);
        (n, out.to_vec())
    }

    /// 내부 상태 초기화 (호출 간 상태가 없으므로 no-op)
    pub fn reset(&mut self) {}
}

/// UTF-8 → CP949 변환 객체
pub struct Encoder {
    transcoder: Transcoder,
}

impl Encoder {
    /// (소비한 입력 바이트 수, 변환 결과) 반환
    pub fn transform(&mut self, src: &[u8], at_eof: bool) -> (usize, Vec<u8>) {
        let (n, out) = self.transcoder.translate(src, at_eof);
        (n, out.to_vec())
    }

    pub fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_transform() {
        let mut dec = Cp949::new().new_decoder();
        let (n, out) = dec.transform(&[0xB0, 0xA1], true);
        assert_eq!(n, 2);
        assert_eq!(out, "가".as_bytes());
    }

    #[test]
    fn test_encoder_transform() {
        let mut enc = Cp949::new().new_encoder();
        let (n, out) = enc.transform("가".as_bytes(), true);
        assert_eq!(n, 3);
        assert_eq!(out, [0xB0, 0xA1]);
    }

    #[test]
    fn test_decoder_declines_partial_without_eof() {
        let mut dec = Cp949::new().new_decoder();
        let (n, out) = dec.transform(&[0xB0], false);
        assert_eq!(n, 0);
        assert!(out.is_empty());

        let (n, out) = dec.transform(&[0xB0, 0xA1], true);
        assert_eq!(n, 2);
        assert_eq!(out, "가".as_bytes());
    }
}
