use std::collections::HashMap;

/// Name -> code table for KOSPI-listed instruments. Fixed at process start,
/// read-only thereafter.
const INSTRUMENT_TABLE: &[(&str, &str)] = &[
    ("삼성전자", "005930"),
    ("SK하이닉스", "000660"),
    ("NAVER", "035420"),
    ("카카오", "035720"),
    ("현대차", "005380"),
    ("기아", "000270"),
    ("셀트리온", "068270"),
    ("POSCO홀딩스", "005490"),
    ("KB금융", "105560"),
    ("신한지주", "055550"),
];

/// Every entry whose name contains the keyword as a case-insensitive
/// substring. No matches is an empty mapping, never an error.
pub fn search(keyword: &str) -> HashMap<String, String> {
    let needle = keyword.to_lowercase();
    INSTRUMENT_TABLE
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&needle))
        .map(|(name, code)| (name.to_string(), code.to_string()))
        .collect()
}
