//! CP949 ↔ 유니코드 대응 테이블
//!
//! 압축된 바이너리 리소스(table.bin)를 파싱해
//! native 코드 순서와 스칼라 순서의 두 정렬 뷰를 만듭니다.
//! 테이블은 프로세스 전체에서 최초 사용 시 한 번만 구축됩니다.

use std::fmt;
use std::sync::LazyLock;

/// 임베디드 테이블 리소스
///
/// 형식 (모두 빅엔디언):
/// - 헤더: 엔트리 수(u16), 청크 수(u16)
/// - 청크: 시작 native 코드(u16), 텍스트 길이(u16), UTF-8 텍스트
///
/// 청크 텍스트의 i번째 문자가 native 코드 (시작 코드 + i)에 대응합니다.
static RESOURCE: &[u8] = include_bytes!("table.bin");

/// 프로세스 전역 공유 테이블
static TABLE: LazyLock<CodeTable> = LazyLock::new(|| match CodeTable::load(RESOURCE) {
    Ok(table) => table,
    // 임베디드 리소스 손상은 빌드 타임 불변식 위반이므로 복구하지 않음
    Err(e) => panic!("CP949 테이블 리소스 손상: {}", e),
});

/// 공유 테이블 반환 (최초 호출 시 구축, 이후 불변)
pub fn shared() -> &'static CodeTable {
    &TABLE
}

/// native 2바이트 코드 하나와 유니코드 스칼라 하나의 대응
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    /// CP949 2바이트 코드 (빅엔디언으로 직렬화)
    pub native: u16,
    /// 대응하는 유니코드 스칼라
    pub scalar: char,
}

/// 테이블 리소스 파싱 에러
#[derive(Debug)]
pub enum TableError {
    /// 선언된 크기보다 리소스가 먼저 끝남
    Truncated,
    /// 청크 텍스트가 유효한 UTF-8이 아님
    InvalidUtf8(std::str::Utf8Error),
    /// 청크 확장 중 native 코드가 u16 범위를 벗어남
    CodeOverflow,
    /// 헤더의 엔트리 수와 실제 확장 결과가 다름
    EntryCountMismatch { expected: usize, actual: usize },
    /// 모든 청크를 읽은 뒤 남은 바이트가 있음
    TrailingBytes(usize),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Truncated => write!(f, "리소스가 선언된 크기보다 짧음"),
            TableError::InvalidUtf8(e) => write!(f, "청크 텍스트 UTF-8 오류: {}", e),
            TableError::CodeOverflow => write!(f, "native 코드 범위 초과"),
            TableError::EntryCountMismatch { expected, actual } => {
                write!(f, "엔트리 수 불일치: 헤더 {} / 실제 {}", expected, actual)
            }
            TableError::TrailingBytes(n) => write!(f, "청크 뒤에 남은 {}바이트", n),
        }
    }
}

impl std::error::Error for TableError {}

/// 정렬된 대응 테이블
///
/// native 순서 뷰는 native 코드 오름차순이며 중복이 없습니다.
/// 스칼라 순서 뷰는 native 순서 뷰를 스칼라 기준으로 재정렬한 복사본으로,
/// 동일 스칼라가 여러 개면 원본 순서를 유지합니다 (안정 정렬).
pub struct CodeTable {
    native_order: Vec<CodeEntry>,
    scalar_order: Vec<CodeEntry>,
}

impl CodeTable {
    /// 바이너리 리소스를 파싱해 테이블 구축
    ///
    /// 구조적 손상(길이 불일치, UTF-8 오류 등)은 `TableError`로 반환합니다.
    /// 확장 결과가 native 코드 순으로 정렬되어 있지 않으면 panic합니다.
    /// 정렬이 깨진 테이블은 이후 모든 변환을 조용히 오염시키기 때문입니다.
    pub fn load(resource: &[u8]) -> Result<CodeTable, TableError> {
        let mut pos = 0usize;
        let entry_count = read_u16(resource, &mut pos)? as usize;
        let chunk_count = read_u16(resource, &mut pos)? as usize;

        let mut entries = Vec::with_capacity(entry_count);
        for _ in 0..chunk_count {
            let start = read_u16(resource, &mut pos)?;
            let text_len = read_u16(resource, &mut pos)? as usize;
            let text_bytes = resource
                .get(pos..pos + text_len)
                .ok_or(TableError::Truncated)?;
            pos += text_len;

            let text = std::str::from_utf8(text_bytes).map_err(TableError::InvalidUtf8)?;
            for (i, scalar) in text.chars().enumerate() {
                let native = start
                    .checked_add(i as u16)
                    .ok_or(TableError::CodeOverflow)?;
                entries.push(CodeEntry { native, scalar });
            }
        }

        if pos != resource.len() {
            return Err(TableError::TrailingBytes(resource.len() - pos));
        }
        if entries.len() != entry_count {
            return Err(TableError::EntryCountMismatch {
                expected: entry_count,
                actual: entries.len(),
            });
        }

        // native 순서 불변식: 순증가(중복 없음)
        for w in entries.windows(2) {
            assert!(
                w[0].native < w[1].native,
                "테이블 native 코드 정렬 위반: {:#06x} 다음에 {:#06x}",
                w[0].native,
                w[1].native
            );
        }

        let mut scalar_order = entries.clone();
        // 안정 정렬: 동일 스칼라 엔트리의 테이블 순서 유지
        scalar_order.sort_by_key(|e| e.scalar);

        log::debug!(
            "CP949 테이블 구축 완료: 엔트리 {}개, 청크 {}개",
            entries.len(),
            chunk_count
        );

        Ok(CodeTable {
            native_order: entries,
            scalar_order,
        })
    }

    /// native 코드 오름차순 뷰
    pub fn native_order(&self) -> &[CodeEntry] {
        &self.native_order
    }

    /// 유니코드 스칼라 오름차순 뷰
    pub fn scalar_order(&self) -> &[CodeEntry] {
        &self.scalar_order
    }

    /// 엔트리 수
    pub fn len(&self) -> usize {
        self.native_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.native_order.is_empty()
    }
}

fn read_u16(data: &[u8], pos: &mut usize) -> Result<u16, TableError> {
    let bytes = data.get(*pos..*pos + 2).ok_or(TableError::Truncated)?;
    *pos += 2;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}
