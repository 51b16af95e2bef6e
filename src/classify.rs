//! 문자/문자열 분류 술어 및 필터
//!
//! 한글 음절, 자모, 한자, 영문 판별과 텍스트 정제 필터.
//! 빈 문자열에 대해 `contains_*`는 false, `is_fully_*`는 true (공허하게 참).

use crate::alphabet::{
    CHOSEONG, COMPAT_CONSONANT_FIRST, COMPAT_CONSONANT_LAST, HANGUL_SYLLABLE_FIRST,
    HANGUL_SYLLABLE_LAST, HANJA_FIRST, HANJA_LAST, JONGSEONG, JUNGSEONG,
};

/// 텍스트 정제 시 유지하는 기호 집합
const ALLOWED_SYMBOLS: &str = "~!@#=^$%&_+:\";',.?/(){}[]";

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 영문 알파벳(a-z, A-Z)인지 확인
pub fn is_latin(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_uppercase()
}

/// 한자(一-龥)인지 확인
pub fn is_hanja(c: char) -> bool {
    (HANJA_FIRST..=HANJA_LAST).contains(&(c as u32))
}

/// 초성으로 쓸 수 있는 자모인지 확인
pub fn is_lead_jamo(c: char) -> bool {
    CHOSEONG.contains(&c)
}

/// 중성으로 쓸 수 있는 자모인지 확인
pub fn is_vowel_jamo(c: char) -> bool {
    JUNGSEONG.contains(&c)
}

/// 종성으로 쓸 수 있는 자모인지 확인 (종성 없음 엔트리는 해당 없음)
pub fn is_trail_jamo(c: char) -> bool {
    JONGSEONG.iter().any(|&j| j == Some(c))
}

/// 자모(자음 또는 모음 낱자)인지 확인
pub fn is_jamo(c: char) -> bool {
    is_lead_jamo(c) || is_vowel_jamo(c) || is_trail_jamo(c)
}

/// 한글 음절을 하나라도 포함하는지 확인
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul_syllable)
}

/// 영문 알파벳을 하나라도 포함하는지 확인
pub fn contains_latin(text: &str) -> bool {
    text.chars().any(is_latin)
}

/// 한자를 하나라도 포함하는지 확인
pub fn contains_hanja(text: &str) -> bool {
    text.chars().any(is_hanja)
}

/// 모든 문자가 한글 음절인지 확인
///
/// 공백은 항상 허용, `exceptions`에 포함된 문자도 허용.
pub fn is_fully_hangul(text: &str, exceptions: &str) -> bool {
    text.chars()
        .all(|c| c == ' ' || exceptions.contains(c) || is_hangul_syllable(c))
}

/// 모든 문자가 한글 음절 또는 영문인지 확인
///
/// 공백은 항상 허용, `exceptions`에 포함된 문자도 허용.
pub fn is_fully_hangul_or_latin(text: &str, exceptions: &str) -> bool {
    text.chars()
        .all(|c| c == ' ' || exceptions.contains(c) || is_hangul_syllable(c) || is_latin(c))
}

/// 호환용 자음 자모(ㄱ-ㅎ)인지 확인
fn is_compat_consonant(c: char) -> bool {
    (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&(c as u32))
}

/// 한글, 영문, 숫자, 일부 기호만 남기고 제거
///
/// 유지 대상이 아닌 문자는 공백으로 치환한 뒤 연속 공백을 하나로
/// 접고 앞뒤 공백을 제거. 유지되는 문자의 순서는 바뀌지 않음.
pub fn remain_hangul_latin(text: &str) -> String {
    let filtered: String = text
        .chars()
        .map(|c| {
            if is_hangul_syllable(c)
                || is_compat_consonant(c)
                || c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || ALLOWED_SYMBOLS.contains(c)
            {
                c
            } else {
                ' '
            }
        })
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 한글 음절을 제외한 문자열 반환
pub fn strip_hangul(text: &str) -> String {
    text.chars().filter(|&c| !is_hangul_syllable(c)).collect()
}

/// 영문 알파벳을 제외한 문자열 반환
pub fn strip_latin(text: &str) -> String {
    text.chars().filter(|&c| !is_latin(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_predicates() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('ㄱ')); // 낱자모는 음절이 아님
        assert!(!is_hangul_syllable('a'));

        assert!(is_latin('a'));
        assert!(is_latin('Z'));
        assert!(!is_latin('가'));
        assert!(!is_latin('1'));

        assert!(is_hanja('一'));
        assert!(is_hanja('龥'));
        assert!(!is_hanja('가'));
    }

    #[test]
    fn test_jamo_predicates() {
        assert!(is_lead_jamo('ㄱ'));
        assert!(is_lead_jamo('ㅉ'));
        assert!(!is_lead_jamo('ㄳ')); // 종성 전용
        assert!(!is_lead_jamo('ㅏ'));

        assert!(is_vowel_jamo('ㅏ'));
        assert!(is_vowel_jamo('ㅢ'));
        assert!(!is_vowel_jamo('ㄱ'));

        assert!(is_trail_jamo('ㄱ'));
        assert!(is_trail_jamo('ㄳ'));
        assert!(!is_trail_jamo('ㄸ')); // 종성 불가 쌍자음
        assert!(!is_trail_jamo('ㅏ'));

        assert!(is_jamo('ㄸ'));
        assert!(is_jamo('ㅏ'));
        assert!(!is_jamo('가'));
    }

    #[test]
    fn test_contains() {
        assert!(contains_hangul("한f ㅎㅎ"));
        assert!(!contains_hangul("ㅎㅎㅎ")); // 낱자모만으로는 음절 없음
        assert!(contains_latin("한f"));
        assert!(!contains_latin("한글"));
        assert!(contains_hanja("수출입銀"));
        assert!(!contains_hanja("수출입"));

        // 빈 문자열
        assert!(!contains_hangul(""));
        assert!(!contains_latin(""));
        assert!(!contains_hanja(""));
    }

    #[test]
    fn test_is_fully_hangul() {
        assert!(is_fully_hangul("가나다", ""));
        assert!(is_fully_hangul("하 바", "")); // 공백은 항상 허용
        assert!(is_fully_hangul("합병한다.", ".,"));
        assert!(!is_fully_hangul("합병한다.", ""));
        assert!(!is_fully_hangul("차세대-폐렴구균백신", ""));
        assert!(!is_fully_hangul("raw", ""));
        assert!(is_fully_hangul("", ""));
    }

    #[test]
    fn test_is_fully_hangul_or_latin() {
        assert!(is_fully_hangul_or_latin("Hello세상", ""));
        assert!(!is_fully_hangul_or_latin("Hello, 세상!", ""));
        assert!(is_fully_hangul_or_latin("Hello, 세상!", ",!"));
    }

    #[test]
    fn test_remain_hangul_latin() {
        assert_eq!(remain_hangul_latin("한글abc123"), "한글abc123");
        assert_eq!(remain_hangul_latin("한글★abc"), "한글 abc");
        assert_eq!(remain_hangul_latin("  한글   abc  "), "한글 abc");
        assert_eq!(remain_hangul_latin("물음표? 느낌표!"), "물음표? 느낌표!");
        // 호환용 자음 자모는 유지, 모음 낱자는 제거
        assert_eq!(remain_hangul_latin("ㅋㅋㅋ"), "ㅋㅋㅋ");
        assert_eq!(remain_hangul_latin("aㅏb"), "a b");
        assert_eq!(remain_hangul_latin(""), "");
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip_hangul("한a글b"), "ab");
        assert_eq!(strip_latin("한a글b"), "한글");
        // 상보성: 한글+영문만으로 된 문자열에서 두 필터는 서로의 여집합
        let text = "한글abc세상xyz";
        assert_eq!(strip_hangul(text), "abcxyz");
        assert_eq!(strip_latin(text), "한글세상");
    }
}
