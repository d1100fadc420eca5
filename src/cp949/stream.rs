//! CP949 스트리밍 어댑터
//!
//! 변환기를 `io::Read`/`io::Write`에 맞춰 감쌉니다.
//! 핵심은 경계 버퍼링입니다: 2바이트 CP949 코드나 멀티바이트 UTF-8 스칼라가
//! I/O 청크 경계에서 쪼개져 도착해도 절대 독립된 바이트로 오역하지 않고,
//! 미완성 꼬리를 다음 호출까지 들고 갑니다.

use std::io::{self, Read, Write};

use super::transcoder::{Direction, Transcoder};

/// 소스 종료 상태
enum Terminal {
    /// 소스가 아직 살아 있음
    None,
    /// 정상 EOF (또는 이미 에러를 전달한 뒤)
    Eof,
    /// 소스 에러: 버퍼된 출력을 모두 전달한 뒤 한 번 surfaced
    Failed(io::Error),
}

/// CP949 소스를 UTF-8로 읽는 리더
///
/// 인스턴스는 내부 가변 버퍼를 소유하므로 동시 사용에 안전하지 않습니다.
/// 공유가 필요하면 호출자가 외부에서 동기화해야 합니다.
pub struct Reader<R: Read> {
    inner: R,
    transcoder: Transcoder,
    /// 읽었지만 아직 변환되지 않은 바이트 (미완성 꼬리 포함 가능)
    pending_in: Vec<u8>,
    /// 변환됐지만 아직 호출자에게 전달되지 않은 바이트
    pending_out: Vec<u8>,
    terminal: Terminal,
}

impl<R: Read> Reader<R> {
    pub fn new(inner: R) -> Self {
        Reader {
            inner,
            transcoder: Transcoder::new(Direction::Decode),
            pending_in: Vec::new(),
            pending_out: Vec::new(),
            terminal: Terminal::None,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            // 이미 변환된 출력이 있으면 소스 읽기보다 우선 전달
            if !self.pending_out.is_empty() {
                let n = buf.len().min(self.pending_out.len());
                buf[..n].copy_from_slice(&self.pending_out[..n]);
                self.pending_out.drain(..n);
                return Ok(n);
            }

            match self.terminal {
                Terminal::None => {
                    let start = self.pending_in.len();
                    self.pending_in.resize(start + buf.len(), 0);
                    match self.inner.read(&mut self.pending_in[start..]) {
                        // 에러 없는 0바이트 읽기는 EOF로 간주 (무한 루프 방지)
                        Ok(0) => {
                            self.pending_in.truncate(start);
                            self.terminal = Terminal::Eof;
                        }
                        Ok(n) => self.pending_in.truncate(start + n),
                        Err(e) => {
                            self.pending_in.truncate(start);
                            if e.kind() == io::ErrorKind::Interrupted {
                                // 재시도 가능한 중단은 종료 상태가 아님
                                return Err(e);
                            }
                            self.terminal = Terminal::Failed(e);
                        }
                    }
                }
                _ => {
                    if self.pending_in.is_empty() {
                        break;
                    }
                }
            }

            let at_eof = !matches!(self.terminal, Terminal::None);
            let (consumed, out) = self.transcoder.translate(&self.pending_in, at_eof);
            self.pending_out.extend_from_slice(out);
            // 소비되지 않은 꼬리를 앞으로 당겨 다음 라운드에 사용
            self.pending_in.drain(..consumed);
        }

        // 종료 상태 도달: 에러는 한 번만 전달하고 이후에는 EOF
        match std::mem::replace(&mut self.terminal, Terminal::Eof) {
            Terminal::Failed(e) => Err(e),
            _ => Ok(0),
        }
    }
}

/// UTF-8 입력을 CP949로 써 내려가는 라이터
///
/// 출력은 즉시 싱크로 밀어내므로 출력 버퍼가 없고,
/// 미완성 UTF-8 꼬리만 다음 write까지 보관합니다.
pub struct Writer<W: Write> {
    inner: W,
    transcoder: Transcoder,
    /// 아직 스칼라로 완성되지 않은 입력 꼬리
    pending_in: Vec<u8>,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Writer {
            inner,
            transcoder: Transcoder::new(Direction::Encode),
            pending_in: Vec::new(),
        }
    }

    /// 보관 중인 꼬리를 EOF 의미론으로 강제 변환해 내보내고 싱크를 돌려준다
    ///
    /// 스트림 끝에 남은 불완전한 UTF-8 시퀀스는 `'?'` 1바이트로 대체됩니다.
    /// `flush`는 이 처리를 하지 않으므로, 스트림을 끝낼 때는 반드시
    /// 이 메서드를 호출해야 잘린 꼬리가 조용히 사라지지 않습니다.
    pub fn finish(mut self) -> io::Result<W> {
        if !self.pending_in.is_empty() {
            log::warn!(
                "스트림 끝의 불완전한 UTF-8 시퀀스 {}바이트를 대체 문자로 소비",
                self.pending_in.len()
            );
            let (_, out) = self.transcoder.translate(&self.pending_in, true);
            self.inner.write_all(out)?;
            self.pending_in.clear();
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for Writer<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if data.is_empty() {
            return Ok(0);
        }

        // 이전 호출의 꼬리를 새 청크 앞에 붙여 변환
        let combined: Vec<u8>;
        let input: &[u8] = if self.pending_in.is_empty() {
            data
        } else {
            combined = [self.pending_in.as_slice(), data].concat();
            &combined
        };

        let (consumed, out) = self.transcoder.translate(input, false);
        if !out.is_empty() {
            // 싱크 에러는 그대로 전파, 보관 상태는 갱신하지 않음
            self.inner.write_all(out)?;
        }
        self.pending_in = input[consumed..].to_vec();

        // 호출자의 바이트는 전부 흡수됨 (내보냈거나 완성 대기로 보관)
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // 미완성 꼬리는 다음 write에서 완성될 수 있으므로 여기서 소비하지 않음
        self.inner.flush()
    }
}
