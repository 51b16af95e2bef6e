//! 한글 음절 분해/조합 코덱
//!
//! 완성형 음절 <-> (초성, 중성, 종성) 변환과 문자열 단위 분해/재조합.
//! 음절 코드포인트 구조:
//! `0xAC00 + (초성 인덱스 * 21 + 중성 인덱스) * 28 + 종성 인덱스`

use crate::alphabet::{
    choseong_index, jongseong_index, jungseong_index, CHOSEONG, HANGUL_SYLLABLE_FIRST,
    HANGUL_SYLLABLE_LAST, JONGSEONG, JONGSEONG_COUNT, JUNGSEONG, JUNGSEONG_COUNT,
};
use crate::classify::{is_hangul_syllable, is_lead_jamo, is_trail_jamo, is_vowel_jamo};
use crate::error::HangulError;

/// 분해 결과: (초성, 중성, 종성), 빈 자리는 None
pub type Decomposed = (Option<char>, Option<char>, Option<char>);

/// 음절 하나를 (초성, 중성, 종성)으로 분해
///
/// 낱자모는 해당 자리에 그대로 통과시킴: 초성 가능 자모는 초성 자리,
/// 모음은 중성 자리, 종성 전용 자모는 종성 자리. 음절도 자모도 아니면
/// `NotHangul`.
pub fn split(c: char) -> Result<Decomposed, HangulError> {
    if is_lead_jamo(c) {
        return Ok((Some(c), None, None));
    }
    if is_vowel_jamo(c) {
        return Ok((None, Some(c), None));
    }
    if is_trail_jamo(c) {
        return Ok((None, None, Some(c)));
    }

    let code = c as u32;
    if !(HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return Err(HangulError::NotHangul(c));
    }
    let offset = (code - HANGUL_SYLLABLE_FIRST) as usize;
    let cho = CHOSEONG[offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT)];
    let jung = JUNGSEONG[(offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT];
    let jong = JONGSEONG[offset % JONGSEONG_COUNT];
    Ok((Some(cho), Some(jung), jong))
}

/// (초성, 중성, 종성)을 음절 하나로 조합
///
/// 초성/중성 중 하나라도 없으면 남은 쪽을 그대로 반환 (낱자모 통과).
/// 테이블에 없는 구성 요소는 `InvalidJamo`.
pub fn join(
    cho: Option<char>,
    jung: Option<char>,
    jong: Option<char>,
) -> Result<Option<char>, HangulError> {
    let (cho, jung) = match (cho, jung) {
        (Some(cho), Some(jung)) => (cho, jung),
        (cho, jung) => return Ok(cho.or(jung)),
    };

    let cho_index = choseong_index(cho).ok_or(HangulError::InvalidJamo(cho))?;
    let jung_index = jungseong_index(jung).ok_or(HangulError::InvalidJamo(jung))?;
    let jong_index = match jong {
        Some(jong) => jongseong_index(Some(jong)).ok_or(HangulError::InvalidJamo(jong))?,
        None => 0,
    };

    let offset = (cho_index * JUNGSEONG_COUNT + jung_index) * JONGSEONG_COUNT + jong_index;
    Ok(char::from_u32(HANGUL_SYLLABLE_FIRST + offset as u32))
}

/// 음절에 종성 접미사 결합 (예: '가' + 'ㄴ' = '간')
///
/// 초성과 중성이 있고 종성이 비어 있을 때만 재조합. 이미 종성이
/// 있거나 음절이 아니면 그대로 이어 붙임.
pub fn join_suffix(c: char, suffix: char) -> String {
    if let Ok((Some(cho), Some(jung), None)) = split(c) {
        if let Ok(Some(joined)) = join(Some(cho), Some(jung), Some(suffix)) {
            return joined.to_string();
        }
    }
    format!("{}{}", c, suffix)
}

/// 문자열을 자모 열로 분해
///
/// 완성형 음절은 (초성, 중성, 종성) 순으로 펼치고 (종성 없으면 생략),
/// 그 외 문자는 그대로 유지. 순서 보존.
pub fn split_string(text: &str) -> Vec<char> {
    let mut components = Vec::new();
    for c in text.chars() {
        match split(c) {
            Ok((cho, jung, jong)) if is_hangul_syllable(c) => {
                components.extend(cho);
                components.extend(jung);
                components.extend(jong);
            }
            _ => components.push(c),
        }
    }
    components
}

/// 자모 열을 음절 문자열로 재조합
///
/// 종성이 음절 경계의 가장 강한 신호이므로 끝에서부터 (오른쪽 -> 왼쪽)
/// 탐욕적으로 긴 묶음부터 시도:
/// - 종성 가능 자모: 3묶음(초성+중성+종성) -> 2묶음 -> 낱자 순으로 시도
/// - 모음: 2묶음(초성+중성) -> 낱자 순으로 시도
/// - 그 외: 낱자 그대로
///
/// 단어 경계 정보가 없으므로 모호한 자모 배열은 의도와 다르게 조합될
/// 수 있음. 묶음 우선순위를 바꾸면 어떤 입력이 조합되는지가 달라지므로
/// 순서 유지.
pub fn join_string(components: &[char]) -> Result<String, HangulError> {
    let mut letters: Vec<char> = Vec::new();
    let mut i = components.len();

    while i > 0 {
        let idx = i - 1;
        let c = components[idx];
        if is_trail_jamo(c) {
            if idx >= 2 {
                if let Ok(Some(syllable)) =
                    join(Some(components[idx - 2]), Some(components[idx - 1]), Some(c))
                {
                    letters.push(syllable);
                    i -= 3;
                    continue;
                }
            }
            if idx >= 1 {
                if let Ok(Some(syllable)) = join(Some(components[idx - 1]), Some(c), None) {
                    letters.push(syllable);
                    i -= 2;
                    continue;
                }
            }
            letters.push(c);
            i -= 1;
        } else if is_vowel_jamo(c) {
            if idx >= 1 {
                if let Ok(Some(syllable)) = join(Some(components[idx - 1]), Some(c), None) {
                    letters.push(syllable);
                    i -= 2;
                    continue;
                }
            }
            letters.push(c);
            i -= 1;
        } else {
            letters.push(c);
            i -= 1;
        }
    }

    letters.reverse();
    Ok(letters.into_iter().collect())
}
