use clap::Args;
use laptop_advisor::analysis::{AnalysisEngine, AnalysisOutcome, AnalysisReport, RawProductText};
use laptop_advisor::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Product title as listed by the retailer
    #[arg(long)]
    pub(crate) title: String,
    /// Technical detail text (spec table rows, descriptions)
    #[arg(long, default_value = "")]
    pub(crate) details: String,
    /// Feature bullet text
    #[arg(long, default_value = "")]
    pub(crate) bullets: String,
    /// Listed price, echoed in the JSON output
    #[arg(long)]
    pub(crate) price: Option<String>,
    /// Intended usage, e.g. gaming, programming, business
    #[arg(long)]
    pub(crate) purpose: Option<String>,
    /// Budget in the listing currency (recorded, not scored)
    #[arg(long)]
    pub(crate) budget: Option<f64>,
    /// Emit the full outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        title,
        details,
        bullets,
        price,
        purpose,
        budget,
        json,
    } = args;

    let text = RawProductText {
        title: title.trim().to_string(),
        price,
        bullet_text: bullets,
        detail_text: details,
    };
    let outcome = AnalysisEngine::new().evaluate(text, budget, purpose.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_outcome(&outcome);
    }
    Ok(())
}

fn render_outcome(outcome: &AnalysisOutcome) {
    println!("Product: {}", outcome.specs.title);
    if let Some(price) = &outcome.specs.price {
        println!("Price: {price}");
    }

    match (&outcome.analysis, &outcome.message) {
        (Some(report), _) => render_report(report),
        (None, Some(message)) => println!("{message}"),
        (None, None) => println!("No analysis produced"),
    }
}

fn render_report(report: &AnalysisReport) {
    println!(
        "Purpose: {} ({})",
        report.purpose,
        report.profile.label()
    );
    println!(
        "Overall: {}% -> {} (general {}%, purpose {}%)",
        report.overall,
        report.verdict.label(),
        report.general_average,
        report.purpose_average
    );

    println!("\nAttributes");
    for attribute in &report.attributes {
        println!("- {}: {}", attribute.name, attribute.short);
    }

    if !report.pros.is_empty() {
        println!("\nPros: {}", report.pros.join(", "));
    }
    if !report.cons.is_empty() {
        println!("Cons: {}", report.cons.join(", "));
    }

    println!("\n{}", report.comment);
}
