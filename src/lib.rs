//! CP949(확장 완성형) ↔ UTF-8 변환기와 한글 자모 유틸리티
//!
//! - [`cp949`]: 정렬 테이블 기반 양방향 변환. 전체 버퍼 변환과
//!   스트리밍(`Reader`/`Writer`) 모두 지원합니다.
//! - [`hangul`]: 음절 조합/분해, 자모 변환, 획수, 조사 선택.

pub mod cp949;
pub mod hangul;

pub use cp949::{decode, decode_to_string, encode, encode_str};
