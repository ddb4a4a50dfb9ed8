use once_cell::sync::Lazy;
use regex::Regex;

static LAPTOP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)laptop|notebook|macbook|chromebook|zenbook|spectre|thinkpad")
        .expect("laptop identity pattern must compile")
});

/// Identity check run before any scoring, over title and details only.
pub fn is_laptop(title: &str, details: &str) -> bool {
    LAPTOP_RE.is_match(&format!("{title} {details}"))
}

pub fn rejection_message(title: &str) -> String {
    format!(
        "🚨 Oops! That doesn't look like a laptop — it seems to be: \"{title}\".\nAre you trying to review a {title} as a laptop? 😄 Please paste a laptop product link."
    )
}
