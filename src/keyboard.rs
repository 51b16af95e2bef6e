//! 두벌식 자판 기준 QWERTY 영문 키 -> 한글 자모 역매핑
//!
//! 한글 자판인 줄 알고 영문 상태로 타이핑된 문자열을 자모로 되돌린 뒤
//! 음절로 재조합.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::codec::join_string;

/// 영문 키 순서 (쌍자음/복합 모음은 시프트 키)
const KEY_ENG: &str = "qwertyuiopasdfghjklzxcvbnmQWERTOP";
/// 대응하는 한글 자모 (KEY_ENG와 같은 순서)
const KEY_HAN: &str = "ㅂㅈㄷㄱㅅㅛㅕㅑㅐㅔㅁㄴㅇㄹㅎㅗㅓㅏㅣㅋㅌㅊㅍㅠㅜㅡㅃㅉㄸㄲㅆㅒㅖ";

lazy_static! {
    /// 영문 키 -> 한글 자모 매핑 테이블
    static ref KEY_ENG_TO_HAN: HashMap<char, char> =
        KEY_ENG.chars().zip(KEY_HAN.chars()).collect();
}

/// 영문 키 하나를 한글 자모로 변환 (매핑에 없으면 None)
pub fn map_key(c: char) -> Option<char> {
    KEY_ENG_TO_HAN.get(&c).copied()
}

/// 영문 키 입력 문자열을 한글 문자열로 변환
///
/// 매핑에 없는 문자(숫자, 특수문자 등)는 그대로 통과. 재조합에
/// 실패하거나 결과가 비면 입력을 훼손하지 않고 원본 그대로 반환.
pub fn qwerty_to_hangul(text: &str) -> String {
    let components: Vec<char> = text.chars().map(|c| map_key(c).unwrap_or(c)).collect();
    match join_string(&components) {
        Ok(hangul) if !hangul.is_empty() => hangul,
        Ok(_) => text.to_string(),
        Err(e) => {
            log::debug!("한글 재조합 실패 ({}), 원본 유지: {:?}", e, text);
            text.to_string()
        }
    }
}
