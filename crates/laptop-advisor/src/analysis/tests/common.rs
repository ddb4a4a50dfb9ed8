use std::sync::Arc;

use crate::analysis::domain::{
    CpuClass, DisplaySpec, GpuSpec, RawProductText, StorageSpec, TypedSpecification,
};
use crate::analysis::{analysis_router, AnalysisService};
use crate::retrieval::{ProductTextSource, RetrievalError};

pub(super) fn product(title: &str, details: &str, bullets: &str) -> RawProductText {
    RawProductText {
        title: title.to_string(),
        price: None,
        bullet_text: bullets.to_string(),
        detail_text: details.to_string(),
    }
}

pub(super) fn zenbook() -> RawProductText {
    product(
        "ASUS ZenBook 14 Laptop",
        "Intel Core i7, 16GB RAM, 512GB SSD, NVIDIA GeForce RTX 3050, 10 hours battery, 1.3 kg, 1920x1080 144Hz",
        "USB-C, HDMI, Thunderbolt",
    )
}

pub(super) fn monitor() -> RawProductText {
    product(
        "Samsung 27-inch Monitor",
        "IPS panel, 2560x1440, 75Hz, HDMI",
        "Eye saver mode",
    )
}

/// Well-specified mid-range machine used as a base for rubric edge cases.
pub(super) fn spec() -> TypedSpecification {
    TypedSpecification {
        cpu: CpuClass::I5Ryzen5,
        ram_gb: Some(8),
        storage: StorageSpec {
            is_ssd: true,
            is_hdd: false,
            size_gb: Some(512),
        },
        gpu: GpuSpec::ABSENT,
        battery_hours: Some(7),
        weight_kg: Some(1.8),
        display: DisplaySpec {
            resolution: Some("1920x1080".to_string()),
            refresh_hz: Some(60),
        },
        has_ports: true,
    }
}

pub(super) enum StubSource {
    Page(RawProductText),
    Unreachable,
}

impl ProductTextSource for StubSource {
    async fn fetch(&self, _url: &str) -> Result<RawProductText, RetrievalError> {
        match self {
            StubSource::Page(text) => Ok(text.clone()),
            StubSource::Unreachable => Err(RetrievalError::Status { status: 503 }),
        }
    }
}

pub(super) fn service(source: StubSource) -> Arc<AnalysisService<StubSource>> {
    Arc::new(AnalysisService::new(Arc::new(source)))
}

pub(super) fn router(source: StubSource) -> axum::Router {
    analysis_router(service(source))
}
