use crate::analysis::aggregate::{aggregate, overall_score};
use crate::analysis::domain::{AttributeScore, Verdict};

fn attrs(prefix: &str, scores: &[u8]) -> Vec<AttributeScore> {
    scores
        .iter()
        .enumerate()
        .map(|(index, score)| AttributeScore::new(format!("{prefix}{}", index + 1), *score, "test"))
        .collect()
}

#[test]
fn verdict_thresholds_are_inclusive() {
    assert_eq!(Verdict::from_score(80), Verdict::Buy);
    assert_eq!(Verdict::from_score(79), Verdict::Wait);
    assert_eq!(Verdict::from_score(46), Verdict::Wait);
    assert_eq!(Verdict::from_score(45), Verdict::No);
    assert_eq!(Verdict::from_score(100), Verdict::Buy);
    assert_eq!(Verdict::from_score(0), Verdict::No);
}

#[test]
fn overall_weights_general_sixty_purpose_forty() {
    assert_eq!(overall_score(93, 92), 93);
    assert_eq!(overall_score(90, 89), 90);
    assert_eq!(overall_score(100, 0), 60);
    assert_eq!(overall_score(0, 100), 40);
}

#[test]
fn averages_round_half_up() {
    let result = aggregate(attrs("G", &[85, 90]), attrs("P", &[70, 71]), "general");
    assert_eq!(result.general_average, 88);
    assert_eq!(result.purpose_average, 71);
}

#[test]
fn every_attribute_is_either_pro_or_con() {
    let result = aggregate(attrs("G", &[80, 79]), attrs("P", &[100, 0]), "gaming");
    assert_eq!(result.pros, ["G1", "P1"]);
    assert_eq!(result.cons, ["G2", "P2"]);
    assert_eq!(result.attributes.len(), 4);
    assert_eq!(result.attributes[2].name, "P1");
}

#[test]
fn buy_comment_lists_at_most_five_pros() {
    let result = aggregate(attrs("G", &[100; 8]), attrs("P", &[100]), "gaming");
    assert_eq!(result.verdict, Verdict::Buy);
    assert_eq!(
        result.comment,
        "🎉 Great choice! Overall score 100/100. Pros: G1, G2, G3, G4, G5. This laptop meets most general and gaming needs."
    );
}

#[test]
fn wait_comment_lists_four_pros_and_four_cons() {
    let result = aggregate(
        attrs("G", &[90, 90, 90, 90, 60, 60, 60, 60]),
        attrs("P", &[90, 50]),
        "business",
    );
    assert_eq!(result.overall, 73);
    assert_eq!(result.verdict, Verdict::Wait);
    assert_eq!(result.pros.len(), 5);
    assert_eq!(
        result.comment,
        "🤔 Not bad. Overall score 73/100. Pros: G1, G2, G3, G4. Cons: G5, G6, G7, G8. Consider checking the points mentioned or waiting for a better option."
    );
}

#[test]
fn no_comment_lists_at_most_six_cons() {
    let result = aggregate(attrs("G", &[10; 8]), attrs("P", &[10]), "medical");
    assert_eq!(result.verdict, Verdict::No);
    assert!(result.pros.is_empty());
    assert_eq!(
        result.comment,
        "🚫 Not recommended. Overall score 10/100. Main issues: G1, G2, G3, G4, G5, G6. You might want to increase budget or choose another model."
    );
}
