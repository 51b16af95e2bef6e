//! 한글 분해/조합 에러 타입

use std::fmt;

/// 분해/조합 에러
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangulError {
    /// 한글 음절 범위 밖이고 자모도 아닌 문자
    NotHangul(char),
    /// 자모 테이블에 없는 구성 요소
    InvalidJamo(char),
    /// 자모 열을 음절로 재조합 실패
    ReconstructionFailure,
}

impl fmt::Display for HangulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HangulError::NotHangul(c) => write!(f, "한글이 아닌 문자: {:?}", c),
            HangulError::InvalidJamo(c) => write!(f, "유효하지 않은 자모: {:?}", c),
            HangulError::ReconstructionFailure => write!(f, "자모 열 재조합 실패"),
        }
    }
}

impl std::error::Error for HangulError {}
