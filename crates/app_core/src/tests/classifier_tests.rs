use super::*;

#[test]
fn design_keyword_matches_in_any_case() {
    for query in ["design", "How is DESIGN going?", "redesigning the flow", "DeSiGn"] {
        assert_eq!(classify(query), DESIGN_RESPONSE, "query: {query}");
    }
}

#[test]
fn bottleneck_without_design_returns_review_latency() {
    assert_eq!(classify("Any BOTTLENECKS this week?"), BOTTLENECK_RESPONSE);
    assert_eq!(classify("bottleneck"), BOTTLENECK_RESPONSE);
}

#[test]
fn design_wins_when_both_keywords_present() {
    assert_eq!(
        classify("is the bottleneck in design or review?"),
        DESIGN_RESPONSE
    );
    assert_eq!(classify("Bottleneck: Design"), DESIGN_RESPONSE);
}

#[test]
fn everything_else_falls_through_to_default() {
    for query in ["", "   ", "velocity?", "desig n", "bottle neck"] {
        assert_eq!(classify(query), DEFAULT_RESPONSE, "query: {query:?}");
    }
}

#[test]
fn suggestion_prompts_route_to_expected_replies() {
    assert_eq!(classify(SUGGESTIONS[0].prompt), DEFAULT_RESPONSE);
    assert_eq!(classify(SUGGESTIONS[1].prompt), BOTTLENECK_RESPONSE);
    assert_eq!(classify(SUGGESTIONS[2].prompt), DEFAULT_RESPONSE);
}
