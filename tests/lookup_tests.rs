use stock_analysis::lookup;

#[test]
fn hangul_keyword_returns_exactly_the_matching_entry() {
    let results = lookup::search("전자");
    assert_eq!(results.len(), 1);
    assert_eq!(results.get("삼성전자").map(String::as_str), Some("005930"));
}

#[test]
fn unmatched_keyword_returns_an_empty_mapping() {
    assert!(lookup::search("zz").is_empty());
}

#[test]
fn ascii_keyword_is_case_insensitive() {
    let lower = lookup::search("naver");
    let upper = lookup::search("NAVER");
    assert_eq!(lower, upper);
    assert_eq!(lower.get("NAVER").map(String::as_str), Some("035420"));
}

#[test]
fn partial_hangul_keyword_matches() {
    let results = lookup::search("하이닉스");
    assert_eq!(results.get("SK하이닉스").map(String::as_str), Some("000660"));
}
