//! 방향 매개변수화된 변환기
//!
//! CP949 → UTF-8(디코드), UTF-8 → CP949(인코드) 두 방향을
//! 하나의 타입으로 처리합니다. 방향에 따라 정렬 뷰와 대체 문자가 다를 뿐
//! 제어 흐름은 동일합니다: 왼쪽부터 소비하며 이진 탐색으로 대응을 찾고,
//! 테이블에 없는 코드는 대체 문자로 치환합니다. 변환 자체는 실패하지 않습니다.

use super::table::{self, CodeEntry};

/// 변환 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// CP949 → UTF-8
    Decode,
    /// UTF-8 → CP949
    Encode,
}

/// 디코드 방향 대체 문자
const REPLACEMENT: char = '\u{FFFD}';
/// 인코드 방향 대체 바이트 (CP949에는 예약된 다바이트 대체 코드가 없음)
const SUBSTITUTE: u8 = b'?';

/// 단방향 변환기
///
/// 방향에 맞는 정렬 뷰를 생성 시점에 붙잡아두고,
/// 출력 스크래치 버퍼를 호출 간에 재사용합니다.
pub struct Transcoder {
    direction: Direction,
    table: &'static [CodeEntry],
    scratch: Vec<u8>,
}

impl Transcoder {
    pub fn new(direction: Direction) -> Self {
        let table = match direction {
            Direction::Decode => table::shared().native_order(),
            Direction::Encode => table::shared().scalar_order(),
        };
        Transcoder {
            direction,
            table,
            scratch: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// 입력을 가능한 만큼 변환하고 (소비한 바이트 수, 변환 결과)를 반환
    ///
    /// `at_eof`가 false면 말미의 불완전한 멀티바이트 시퀀스는 소비하지 않고
    /// 남겨둡니다. 다음 호출에서 나머지 바이트가 도착해 완성될 수 있기 때문입니다.
    /// `at_eof`가 true면 남은 바이트를 대체 문자로 강제 소비합니다.
    /// 반환된 슬라이스는 다음 `translate` 호출 전까지만 유효합니다.
    pub fn translate(&mut self, data: &[u8], at_eof: bool) -> (usize, &[u8]) {
        self.scratch.clear();
        let consumed = match self.direction {
            Direction::Decode => self.translate_decode(data, at_eof),
            Direction::Encode => self.translate_encode(data, at_eof),
        };
        (consumed, &self.scratch)
    }

    /// CP949 바이트열 → UTF-8
    fn translate_decode(&mut self, data: &[u8], at_eof: bool) -> usize {
        let mut pos = 0;
        while pos < data.len() {
            let b = data[pos];
            if b & 0x80 == 0 {
                // ASCII 단일 바이트는 그대로 통과
                self.scratch.push(b);
                pos += 1;
                continue;
            }
            if pos + 1 >= data.len() {
                if !at_eof {
                    // 리드 바이트만 남음: 다음 입력에서 완성될 수 있으므로 보류
                    break;
                }
                // 입력 끝에 홀로 남은 리드 바이트는 대체 문자 하나로 강제 소비
                self.push_scalar(REPLACEMENT);
                pos += 1;
                continue;
            }
            let code = u16::from_be_bytes([data[pos], data[pos + 1]]);
            match lookup_native(self.table, code) {
                Some(entry) => self.push_scalar(entry.scalar),
                None => self.push_scalar(REPLACEMENT),
            }
            pos += 2;
        }
        pos
    }

    /// UTF-8 바이트열 → CP949
    fn translate_encode(&mut self, data: &[u8], at_eof: bool) -> usize {
        let mut pos = 0;
        while pos < data.len() {
            let b = data[pos];
            if b & 0x80 == 0 {
                self.scratch.push(b);
                pos += 1;
                continue;
            }
            match decode_utf8(&data[pos..], at_eof) {
                Utf8Step::NeedMore => break,
                Utf8Step::Invalid(n) => {
                    self.scratch.push(SUBSTITUTE);
                    pos += n;
                }
                Utf8Step::Scalar(scalar, n) => {
                    match lookup_scalar(self.table, scalar) {
                        Some(entry) => {
                            self.scratch.extend_from_slice(&entry.native.to_be_bytes())
                        }
                        None => self.scratch.push(SUBSTITUTE),
                    }
                    pos += n;
                }
            }
        }
        pos
    }

    fn push_scalar(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.scratch
            .extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }
}

/// native 순서 뷰에서 code와 정확히 일치하는 엔트리 탐색
fn lookup_native(table: &[CodeEntry], code: u16) -> Option<&CodeEntry> {
    let i = table.partition_point(|e| e.native < code);
    table.get(i).filter(|e| e.native == code)
}

/// 스칼라 순서 뷰에서 scalar와 정확히 일치하는 엔트리 탐색
///
/// 동일 스칼라 엔트리가 여러 개면 테이블 순서상 첫 번째를 돌려줍니다.
fn lookup_scalar(table: &[CodeEntry], scalar: char) -> Option<&CodeEntry> {
    let i = table.partition_point(|e| e.scalar < scalar);
    table.get(i).filter(|e| e.scalar == scalar)
}

/// UTF-8 스칼라 하나를 디코드한 결과
enum Utf8Step {
    /// (스칼라, 소비한 바이트 수)
    Scalar(char, usize),
    /// 유효한 프리픽스지만 바이트가 더 필요함
    NeedMore,
    /// 잘못된 시퀀스: 해당 바이트 수만큼 소비하고 대체
    Invalid(usize),
}

fn decode_utf8(data: &[u8], at_eof: bool) -> Utf8Step {
    let b0 = data[0];
    // 두 번째 바이트의 허용 범위는 리드 바이트에 따라 좁아집니다.
    // 과잉 길이 인코딩(0xE0 0x80..0x9F, 0xF0 0x80..0x8F), 서로게이트(0xED 0xA0..),
    // U+10FFFF 초과(0xF4 0x90..)가 여기서 걸러지므로 잘린 프리픽스도
    // 완성 가능성이 없으면 보류하지 않고 즉시 무효 처리됩니다.
    let (len, init, second) = match b0 {
        0x00..=0x7F => return Utf8Step::Scalar(b0 as char, 1),
        0xC2..=0xDF => (2, (b0 & 0x1F) as u32, 0x80..=0xBF),
        0xE0 => (3, (b0 & 0x0F) as u32, 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, (b0 & 0x0F) as u32, 0x80..=0xBF),
        0xED => (3, (b0 & 0x0F) as u32, 0x80..=0x9F),
        0xF0 => (4, (b0 & 0x07) as u32, 0x90..=0xBF),
        0xF1..=0xF3 => (4, (b0 & 0x07) as u32, 0x80..=0xBF),
        0xF4 => (4, (b0 & 0x07) as u32, 0x80..=0x8F),
        // 연속 바이트 단독, 과잉 길이 리드(0xC0/0xC1), 범위 밖 리드
        _ => return Utf8Step::Invalid(1),
    };
    let avail = data.len().min(len);
    let mut value = init;
    for (i, &b) in data[1..avail].iter().enumerate() {
        let ok = if i == 0 {
            second.contains(&b)
        } else {
            (0x80..=0xBF).contains(&b)
        };
        if !ok {
            return Utf8Step::Invalid(1);
        }
        value = (value << 6) | (b & 0x3F) as u32;
    }
    if data.len() < len {
        // 프리픽스는 유효: EOF면 남은 전부를 하나의 잘린 시퀀스로 소비
        return if at_eof {
            Utf8Step::Invalid(data.len())
        } else {
            Utf8Step::NeedMore
        };
    }
    match char::from_u32(value) {
        Some(c) if c.len_utf8() == len => Utf8Step::Scalar(c, len),
        _ => Utf8Step::Invalid(1),
    }
}
