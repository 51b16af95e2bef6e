//! 한글 자모 테이블 및 문자 범위 상수
//!
//! 유니코드 한글 음절 블록(U+AC00~U+D7A3)의 산술 구조를 따르는
//! 초성/중성/종성 테이블. 인덱스 위치가 곧 음절 인코딩의 자릿수.

use lazy_static::lazy_static;

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_FIRST: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 한자 시작 코드포인트 (一)
pub const HANJA_FIRST: u32 = 0x4E00;
/// 한자 끝 코드포인트 (龥)
pub const HANJA_LAST: u32 = 0x9FA5;

/// 호환용 자음 자모 시작 코드포인트 (ㄱ)
pub const COMPAT_CONSONANT_FIRST: u32 = 0x3131;
/// 호환용 자음 자모 끝 코드포인트 (ㅎ)
pub const COMPAT_CONSONANT_LAST: u32 = 0x314E;

/// 초성 개수
pub const CHOSEONG_COUNT: usize = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: usize = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: usize = 28;

/// 초성 테이블 (19개)
#[rustfmt::skip]
pub const CHOSEONG: [char; CHOSEONG_COUNT] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블 (21개)
#[rustfmt::skip]
pub const JUNGSEONG: [char; JUNGSEONG_COUNT] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 테이블 (28개, 인덱스 0 = 종성 없음)
#[rustfmt::skip]
pub const JONGSEONG: [Option<char>; JONGSEONG_COUNT] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'),
    Some('ㄶ'), Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'),
    Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'), Some('ㅀ'),
    Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'),
    Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'),
    Some('ㅍ'), Some('ㅎ'),
];

lazy_static! {
    /// 초성/중성/종성을 합친 전체 자모 집합 (중복 제거, 코드포인트 순 정렬)
    pub static ref ALL_JAMO: Vec<char> = {
        let mut jamo: Vec<char> = CHOSEONG
            .iter()
            .copied()
            .chain(JUNGSEONG.iter().copied())
            .chain(JONGSEONG.iter().flatten().copied())
            .collect();
        jamo.sort_unstable();
        jamo.dedup();
        jamo
    };
}

/// 초성 문자의 테이블 인덱스 (0~18)
pub fn choseong_index(cho: char) -> Option<usize> {
    CHOSEONG.iter().position(|&c| c == cho)
}

/// 중성 문자의 테이블 인덱스 (0~20)
pub fn jungseong_index(jung: char) -> Option<usize> {
    JUNGSEONG.iter().position(|&c| c == jung)
}

/// 종성 문자의 테이블 인덱스 (1~27, None = 종성 없음 = 0)
pub fn jongseong_index(jong: Option<char>) -> Option<usize> {
    match jong {
        None => Some(0),
        Some(c) => JONGSEONG.iter().position(|&j| j == Some(c)),
    }
}
