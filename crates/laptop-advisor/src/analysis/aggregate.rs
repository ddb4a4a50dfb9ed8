use super::domain::{AttributeScore, Verdict};

const GENERAL_WEIGHT: f64 = 0.6;
const PURPOSE_WEIGHT: f64 = 0.4;

const BUY_PRO_LIMIT: usize = 5;
const WAIT_PRO_LIMIT: usize = 4;
const WAIT_CON_LIMIT: usize = 4;
const NO_CON_LIMIT: usize = 6;

/// Combined verdict over the general and purpose attribute lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub general_average: u8,
    pub purpose_average: u8,
    pub overall: u8,
    pub verdict: Verdict,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub comment: String,
    pub attributes: Vec<AttributeScore>,
}

/// Rounds halves up, matching the scores' non-negative domain.
fn round_half_up(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}

fn rounded_mean(attributes: &[AttributeScore]) -> u8 {
    if attributes.is_empty() {
        return 0;
    }
    let total: u32 = attributes.iter().map(|attr| u32::from(attr.score)).sum();
    round_half_up(f64::from(total) / attributes.len() as f64)
}

pub fn overall_score(general_average: u8, purpose_average: u8) -> u8 {
    round_half_up(
        f64::from(general_average) * GENERAL_WEIGHT + f64::from(purpose_average) * PURPOSE_WEIGHT,
    )
}

fn leading(names: &[String], limit: usize) -> String {
    names
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn comment(verdict: Verdict, overall: u8, pros: &[String], cons: &[String], purpose: &str) -> String {
    match verdict {
        Verdict::Buy => format!(
            "🎉 Great choice! Overall score {overall}/100. Pros: {}. This laptop meets most general and {purpose} needs.",
            leading(pros, BUY_PRO_LIMIT)
        ),
        Verdict::Wait => format!(
            "🤔 Not bad. Overall score {overall}/100. Pros: {}. Cons: {}. Consider checking the points mentioned or waiting for a better option.",
            leading(pros, WAIT_PRO_LIMIT),
            leading(cons, WAIT_CON_LIMIT)
        ),
        Verdict::No => format!(
            "🚫 Not recommended. Overall score {overall}/100. Main issues: {}. You might want to increase budget or choose another model.",
            leading(cons, NO_CON_LIMIT)
        ),
    }
}

/// Weighted 60/40 combination; `attributes` is general followed by purpose.
pub fn aggregate(
    general: Vec<AttributeScore>,
    purpose: Vec<AttributeScore>,
    purpose_tag: &str,
) -> Aggregate {
    let general_average = rounded_mean(&general);
    let purpose_average = rounded_mean(&purpose);
    let overall = overall_score(general_average, purpose_average);
    let verdict = Verdict::from_score(overall);

    let mut attributes = general;
    attributes.extend(purpose);

    let (pros, cons): (Vec<&AttributeScore>, Vec<&AttributeScore>) =
        attributes.iter().partition(|attr| attr.is_pro());
    let pros: Vec<String> = pros.into_iter().map(|attr| attr.name.clone()).collect();
    let cons: Vec<String> = cons.into_iter().map(|attr| attr.name.clone()).collect();

    let comment = comment(verdict, overall, &pros, &cons, purpose_tag);

    Aggregate {
        general_average,
        purpose_average,
        overall,
        verdict,
        pros,
        cons,
        comment,
        attributes,
    }
}
