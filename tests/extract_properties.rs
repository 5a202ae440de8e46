// Contract cases for the rate extractor.

use currency_rates_scraper::extract_rate;

#[test]
fn documented_cases() {
    assert_eq!(extract_rate("88,60").as_deref(), Some("88.60"));
    assert_eq!(extract_rate("-"), None);
    assert_eq!(extract_rate(""), None);
    assert_eq!(extract_rate("123").as_deref(), Some("123"));
}

#[test]
fn first_pattern_wins_over_bare_integer() {
    // "92,10 руб. (за 1)" must yield the decimal, not the trailing integer.
    assert_eq!(extract_rate("92,10 руб. (за 1)").as_deref(), Some("92.10"));
}

#[test]
fn idempotent_over_repeated_calls() {
    for input in ["88,60", "-", "", "101.25", "руб."] {
        assert_eq!(extract_rate(input), extract_rate(input));
    }
}
