//! Heuristic attribute detectors.
//!
//! Each detector is an ordered table of patterns evaluated against the lower-cased
//! corpus; the first pattern that matches decides. Detectors never fail: a miss
//! degrades to `None` or the unknown tier.

use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{
    CpuClass, DisplaySpec, GpuSpec, RawProductText, StorageSpec, TypedSpecification,
};

const POUNDS_TO_KG: f64 = 0.453592;

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("detector pattern must compile")
}

/// Pattern paired with the value it yields when it matches.
struct Rule<T> {
    pattern: Regex,
    outcome: T,
}

impl<T: Copy> Rule<T> {
    fn new(pattern: &str, outcome: T) -> Self {
        Self {
            pattern: compile(pattern),
            outcome,
        }
    }
}

fn first_outcome<T: Copy>(rules: &[Rule<T>], corpus: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(corpus))
        .map(|rule| rule.outcome)
}

/// Capture group 1 of the first pattern, in table order, that matches anywhere.
fn first_capture<'a>(patterns: &[Regex], corpus: &'a str) -> Option<&'a str> {
    patterns
        .iter()
        .find_map(|pattern| pattern.captures(corpus))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

fn positive_u32(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|value| *value > 0)
}

static CPU_RULES: Lazy<Vec<Rule<CpuClass>>> = Lazy::new(|| {
    vec![
        Rule::new(r"intel\s*core\s*i9|\bi9\b|ryzen\s*9", CpuClass::I9Ryzen9),
        Rule::new(r"intel\s*core\s*i7|\bi7\b|ryzen\s*7", CpuClass::I7Ryzen7),
        Rule::new(r"intel\s*core\s*i5|\bi5\b|ryzen\s*5", CpuClass::I5Ryzen5),
        Rule::new(r"intel\s*core\s*i3|\bi3\b|ryzen\s*3", CpuClass::I3Ryzen3),
        Rule::new(r"apple\s*m\d+", CpuClass::AppleM),
    ]
});

static RAM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(\d{1,3})\s*gb\s*(?:ram|memory)"),
        compile(r"(\d{1,3})gb"),
    ]
});

static SSD_RE: Lazy<Regex> = Lazy::new(|| compile(r"ssd"));
static HDD_RE: Lazy<Regex> = Lazy::new(|| compile(r"hdd|hard\s*disk"));
static STORAGE_SIZE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d{2,4})\s*(gb|tb)"));

static GPU_GATE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"nvidia|rtx|gtx|radeon|mx250|mx450|intel iris xe|geforce"));

static GPU_TIERS: Lazy<Vec<Rule<u8>>> = Lazy::new(|| {
    vec![
        Rule::new(r"rtx|radeon\s*rx|nvidia\s*geforce\s*rtx|rtx\s*40|rtx\s*30", 100),
        Rule::new(r"gtx|radeon|mx|intel iris xe", 75),
    ]
});

const GPU_GATED_ONLY_SCORE: u8 = 70;

static BATTERY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(\d{1,2})\s*(?:-hour|hours?|hrs)"),
        compile(r"battery.*?(\d{1,2})\s*hours"),
    ]
});

static KG_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(\d\.\d)\s*kg"),
        compile(r"(\d\.\d)\s*kilograms"),
    ]
});

static LB_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(\d{1,3})\s*lb"),
        compile(r"(\d{1,3})\s*pounds"),
    ]
});

static RESOLUTION_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d{3,4})\s*[x×]\s*(\d{3,4})"));
static REFRESH_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d{2,3})hz"));
static PORTS_RE: Lazy<Regex> = Lazy::new(|| compile(r"usb|hdmi|thunderbolt|type-c|usb-c"));

/// Highest tier wins regardless of where each token sits in the text.
pub fn detect_cpu(corpus: &str) -> CpuClass {
    first_outcome(&CPU_RULES, corpus).unwrap_or(CpuClass::Unknown)
}

/// Explicit `RAM`/`memory` mentions beat the first bare `NNGB` token.
pub fn detect_ram(corpus: &str) -> Option<u32> {
    first_capture(&RAM_PATTERNS, corpus).and_then(positive_u32)
}

/// The size is the first GB/TB token in the whole corpus, which may belong to RAM
/// when memory is listed first.
pub fn detect_storage(corpus: &str) -> StorageSpec {
    let size_gb = STORAGE_SIZE_RE.captures(corpus).and_then(|captures| {
        let amount = positive_u32(captures.get(1)?.as_str())?;
        let unit = captures.get(2)?.as_str();
        if unit.eq_ignore_ascii_case("tb") {
            amount.checked_mul(1024)
        } else {
            Some(amount)
        }
    });

    StorageSpec {
        is_ssd: SSD_RE.is_match(corpus),
        is_hdd: HDD_RE.is_match(corpus),
        size_gb,
    }
}

pub fn detect_gpu(corpus: &str) -> GpuSpec {
    if !GPU_GATE_RE.is_match(corpus) {
        return GpuSpec::ABSENT;
    }

    GpuSpec::detected(first_outcome(&GPU_TIERS, corpus).unwrap_or(GPU_GATED_ONLY_SCORE))
}

pub fn detect_battery_hours(corpus: &str) -> Option<u32> {
    first_capture(&BATTERY_PATTERNS, corpus).and_then(positive_u32)
}

/// Kilograms take precedence over pounds when both appear.
pub fn detect_weight_kg(corpus: &str) -> Option<f64> {
    if let Some(kg) = first_capture(&KG_PATTERNS, corpus) {
        return kg.parse::<f64>().ok().filter(|kg| *kg > 0.0);
    }

    first_capture(&LB_PATTERNS, corpus)
        .and_then(positive_u32)
        .map(|pounds| f64::from(pounds) * POUNDS_TO_KG)
}

pub fn detect_display(corpus: &str) -> DisplaySpec {
    let resolution = RESOLUTION_RE.captures(corpus).and_then(|captures| {
        let width = captures.get(1)?.as_str();
        let height = captures.get(2)?.as_str();
        Some(format!("{width}x{height}"))
    });
    let refresh_hz = REFRESH_RE
        .captures(corpus)
        .and_then(|captures| captures.get(1))
        .and_then(|m| positive_u32(m.as_str()));

    DisplaySpec {
        resolution,
        refresh_hz,
    }
}

pub fn detect_ports(corpus: &str) -> bool {
    PORTS_RE.is_match(corpus)
}

/// Run every detector once over the product corpus.
pub fn extract(text: &RawProductText) -> TypedSpecification {
    let corpus = text.corpus();

    TypedSpecification {
        cpu: detect_cpu(&corpus),
        ram_gb: detect_ram(&corpus),
        storage: detect_storage(&corpus),
        gpu: detect_gpu(&corpus),
        battery_hours: detect_battery_hours(&corpus),
        weight_kg: detect_weight_kg(&corpus),
        display: detect_display(&corpus),
        has_ports: detect_ports(&corpus),
    }
}
