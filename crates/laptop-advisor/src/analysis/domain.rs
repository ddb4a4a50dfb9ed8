use serde::{Deserialize, Serialize};

/// Product text as delivered by the retrieval collaborator: whitespace-collapsed,
/// possibly empty, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProductText {
    #[serde(default)]
    pub title: String,
    /// Listed price as displayed. Echoed back to callers, never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, rename = "bullets")]
    pub bullet_text: String,
    #[serde(default, rename = "details")]
    pub detail_text: String,
}

impl RawProductText {
    /// Lower-cased `title details bullets` string scanned by every detector.
    pub fn corpus(&self) -> String {
        format!("{} {} {}", self.title, self.detail_text, self.bullet_text).to_lowercase()
    }
}

/// Processor tier recognised in the product text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuClass {
    #[serde(rename = "i9/ryzen9")]
    I9Ryzen9,
    #[serde(rename = "i7/ryzen7")]
    I7Ryzen7,
    #[serde(rename = "i5/ryzen5")]
    I5Ryzen5,
    #[serde(rename = "i3/ryzen3")]
    I3Ryzen3,
    #[serde(rename = "apple-m")]
    AppleM,
    #[serde(rename = "unknown")]
    Unknown,
}

impl CpuClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::I9Ryzen9 => "i9/ryzen9",
            Self::I7Ryzen7 => "i7/ryzen7",
            Self::I5Ryzen5 => "i5/ryzen5",
            Self::I3Ryzen3 => "i3/ryzen3",
            Self::AppleM => "apple-m",
            Self::Unknown => "unknown",
        }
    }

    pub const fn capability_score(self) -> u8 {
        match self {
            Self::I9Ryzen9 => 100,
            Self::I7Ryzen7 => 90,
            Self::I5Ryzen5 => 75,
            Self::I3Ryzen3 => 50,
            Self::AppleM => 95,
            Self::Unknown => 45,
        }
    }
}

/// Drive flags are independent: both may be unset (unknown) or both set (hybrid claim).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSpec {
    pub is_ssd: bool,
    pub is_hdd: bool,
    pub size_gb: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuSpec {
    pub present: bool,
    pub capability_score: u8,
}

impl GpuSpec {
    pub const ABSENT: GpuSpec = GpuSpec {
        present: false,
        capability_score: 10,
    };

    pub const fn detected(capability_score: u8) -> Self {
        Self {
            present: true,
            capability_score,
        }
    }
}

impl Default for GpuSpec {
    fn default() -> Self {
        Self::ABSENT
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySpec {
    /// `"WxH"` exactly as matched, without unit validation.
    pub resolution: Option<String>,
    pub refresh_hz: Option<u32>,
}

/// Typed view of the product derived from its text. Optional fields hold a positive
/// value or `None`; a failed match is never encoded as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedSpecification {
    pub cpu: CpuClass,
    pub ram_gb: Option<u32>,
    pub storage: StorageSpec,
    pub gpu: GpuSpec,
    pub battery_hours: Option<u32>,
    pub weight_kg: Option<f64>,
    pub display: DisplaySpec,
    pub has_ports: bool,
}

impl Default for TypedSpecification {
    fn default() -> Self {
        Self {
            cpu: CpuClass::Unknown,
            ram_gb: None,
            storage: StorageSpec::default(),
            gpu: GpuSpec::ABSENT,
            battery_hours: None,
            weight_kg: None,
            display: DisplaySpec::default(),
            has_ports: false,
        }
    }
}

/// One scored dimension of the product with its justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScore {
    pub name: String,
    pub score: u8,
    pub reason: String,
    pub short: String,
}

impl AttributeScore {
    pub fn new(name: impl Into<String>, score: u8, reason: impl Into<String>) -> Self {
        let score = score.min(100);
        let reason = reason.into();
        Self {
            name: name.into(),
            short: format!("{score}% — {reason}"),
            score,
            reason,
        }
    }

    pub fn is_pro(&self) -> bool {
        self.score >= 80
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Buy,
    Wait,
    No,
}

impl Verdict {
    /// 80 and 45 are inclusive: 46..=79 waits.
    pub const fn from_score(overall: u8) -> Self {
        if overall >= 80 {
            Self::Buy
        } else if overall <= 45 {
            Self::No
        } else {
            Self::Wait
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Wait => "wait",
            Self::No => "no",
        }
    }
}

/// Usage profile selecting the purpose rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageProfile {
    ComputerScience,
    Gaming,
    Design,
    Architecture,
    Business,
    #[serde(rename = "film")]
    FilmMedia,
    Medical,
    General,
}

const PROFILE_TAGS: &[(&str, UsageProfile)] = &[
    ("computer-science", UsageProfile::ComputerScience),
    ("programming", UsageProfile::ComputerScience),
    ("cse", UsageProfile::ComputerScience),
    ("gaming", UsageProfile::Gaming),
    ("design", UsageProfile::Design),
    ("graphic-design", UsageProfile::Design),
    ("media", UsageProfile::Design),
    ("architecture", UsageProfile::Architecture),
    ("cad", UsageProfile::Architecture),
    ("business", UsageProfile::Business),
    ("liberal-arts", UsageProfile::Business),
    ("film", UsageProfile::FilmMedia),
    ("media-arts", UsageProfile::FilmMedia),
    ("medical", UsageProfile::Medical),
];

impl UsageProfile {
    /// Case-normalised exact match; anything unrecognised is `General`.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase();
        PROFILE_TAGS
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|(_, profile)| *profile)
            .unwrap_or(Self::General)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::Gaming => "Gaming",
            Self::Design => "Design",
            Self::Architecture => "Architecture / CAD",
            Self::Business => "Business / Liberal Arts",
            Self::FilmMedia => "Film / Media Arts",
            Self::Medical => "Medical",
            Self::General => "General",
        }
    }
}

/// Terminal artifact of the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall: u8,
    pub verdict: Verdict,
    pub comment: String,
    /// General attributes first, then purpose attributes.
    pub attributes: Vec<AttributeScore>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub general_average: u8,
    pub purpose_average: u8,
    pub profile: UsageProfile,
    /// Lower-cased purpose as requested; `general` when none was given.
    pub purpose: String,
    pub summary: TypedSpecification,
}

/// Response of the gated pipeline. A non-laptop carries a message and no report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub is_laptop: bool,
    pub specs: RawProductText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisOutcome {
    pub fn laptop(specs: RawProductText, analysis: AnalysisReport) -> Self {
        Self {
            is_laptop: true,
            specs,
            analysis: Some(analysis),
            message: None,
        }
    }

    pub fn not_laptop(specs: RawProductText, message: String) -> Self {
        Self {
            is_laptop: false,
            specs,
            analysis: None,
            message: Some(message),
        }
    }
}
