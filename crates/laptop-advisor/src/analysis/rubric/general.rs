use super::tiered;
use crate::analysis::domain::{AttributeScore, TypedSpecification};

/// The eight profile-independent attributes, always in this order.
pub fn score_general(spec: &TypedSpecification) -> Vec<AttributeScore> {
    vec![
        processor(spec),
        memory(spec),
        storage(spec),
        battery(spec),
        portability(spec),
        display(spec),
        ports(spec),
        graphics(spec),
    ]
}

fn processor(spec: &TypedSpecification) -> AttributeScore {
    AttributeScore::new(
        "Processor (CPU)",
        spec.cpu.capability_score(),
        format!("Detected {}", spec.cpu.label()),
    )
}

fn memory(spec: &TypedSpecification) -> AttributeScore {
    let score = tiered(spec.ram_gb, &[(16, 100), (8, 80), (1, 40)], 30);
    let reason = match spec.ram_gb {
        Some(gb) => format!("{gb} GB detected"),
        None => "RAM not found".to_string(),
    };
    AttributeScore::new("Memory (RAM)", score, reason)
}

/// Unknown drive type (40) ranks above a confirmed HDD (30).
fn storage(spec: &TypedSpecification) -> AttributeScore {
    let storage = &spec.storage;
    let (score, reason) = if storage.is_ssd {
        let size = storage
            .size_gb
            .map(|gb| gb.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        (
            tiered(storage.size_gb, &[(512, 100), (256, 85)], 60),
            format!("SSD ~ {size} GB"),
        )
    } else if storage.is_hdd {
        (30, "HDD".to_string())
    } else {
        (40, "Drive type not specified".to_string())
    };
    AttributeScore::new("Storage", score, reason)
}

fn battery(spec: &TypedSpecification) -> AttributeScore {
    let score = tiered(spec.battery_hours, &[(8, 100), (6, 80), (1, 50)], 40);
    let reason = match spec.battery_hours {
        Some(hours) => format!("{hours} hours"),
        None => "Battery life not specified".to_string(),
    };
    AttributeScore::new("Battery Life", score, reason)
}

fn portability(spec: &TypedSpecification) -> AttributeScore {
    let (score, reason) = match spec.weight_kg {
        Some(kg) if kg <= 1.6 => (100, format!("{kg:.2} kg")),
        Some(kg) if kg <= 2.2 => (80, format!("{kg:.2} kg")),
        Some(kg) => (50, format!("{kg:.2} kg")),
        None => (60, "Weight not specified".to_string()),
    };
    AttributeScore::new("Portability", score, reason)
}

/// Two independent overrides; a 3840 match always ends at 100.
fn display(spec: &TypedSpecification) -> AttributeScore {
    let resolution = spec.display.resolution.as_deref();
    let mut score = 70;
    if resolution.is_some_and(|res| res.contains("1920")) {
        score = 85;
    }
    if resolution.is_some_and(|res| res.contains("3840")) {
        score = 100;
    }
    let reason = resolution.unwrap_or("Resolution not specified");
    AttributeScore::new("Display (Resolution)", score, reason)
}

fn ports(spec: &TypedSpecification) -> AttributeScore {
    if spec.has_ports {
        AttributeScore::new("Ports & Connectivity", 85, "Ports detected")
    } else {
        AttributeScore::new("Ports & Connectivity", 40, "Port info missing")
    }
}

/// No GPU keyword scores 40 here, not the extractor's absent tier of 10.
fn graphics(spec: &TypedSpecification) -> AttributeScore {
    if spec.gpu.present {
        AttributeScore::new(
            "Graphics (GPU)",
            spec.gpu.capability_score,
            "Dedicated GPU detected",
        )
    } else {
        AttributeScore::new("Graphics (GPU)", 40, "Integrated or not specified")
    }
}
