use super::{size_reason, tiered};
use crate::analysis::domain::{AttributeScore, TypedSpecification, UsageProfile};

type PurposeRubric = fn(&TypedSpecification) -> Vec<AttributeScore>;

/// Purpose-specific attributes for the selected profile.
pub fn score_purpose(spec: &TypedSpecification, profile: UsageProfile) -> Vec<AttributeScore> {
    rubric_for(profile)(spec)
}

fn rubric_for(profile: UsageProfile) -> PurposeRubric {
    match profile {
        UsageProfile::ComputerScience => computer_science,
        UsageProfile::Gaming => gaming,
        UsageProfile::Design => design,
        UsageProfile::Architecture => architecture,
        UsageProfile::Business => business,
        UsageProfile::FilmMedia => film_media,
        UsageProfile::Medical => medical,
        UsageProfile::General => general,
    }
}

fn cpu(name: &str, spec: &TypedSpecification) -> AttributeScore {
    AttributeScore::new(name, spec.cpu.capability_score(), spec.cpu.label())
}

/// CPU judged only as "capable enough": i5-class and above take `capable`.
fn cpu_floor(name: &str, spec: &TypedSpecification, capable: u8, otherwise: u8) -> AttributeScore {
    let score = if spec.cpu.capability_score() >= 75 {
        capable
    } else {
        otherwise
    };
    AttributeScore::new(name, score, spec.cpu.label())
}

fn ram(name: &str, spec: &TypedSpecification, tiers: &[(u32, u8)], fallback: u8) -> AttributeScore {
    AttributeScore::new(name, tiered(spec.ram_gb, tiers, fallback), size_reason(spec.ram_gb))
}

fn storage_size(
    name: &str,
    spec: &TypedSpecification,
    tiers: &[(u32, u8)],
    fallback: u8,
) -> AttributeScore {
    let size = spec.storage.size_gb;
    AttributeScore::new(name, tiered(size, tiers, fallback), size_reason(size))
}

fn gpu(name: &str, spec: &TypedSpecification, missing: u8, missing_reason: &str) -> AttributeScore {
    if spec.gpu.present {
        AttributeScore::new(name, spec.gpu.capability_score, "GPU present")
    } else {
        AttributeScore::new(name, missing, missing_reason)
    }
}

fn computer_science(spec: &TypedSpecification) -> Vec<AttributeScore> {
    vec![
        cpu("CPU for Compilation/VMs", spec),
        ram(
            "RAM for VMs & IDEs",
            spec,
            &[(32, 100), (16, 90), (8, 60)],
            30,
        ),
        storage_size("Storage for projects", spec, &[(500, 100), (256, 80)], 50),
        gpu(
            "Graphics (for ML/Acceleration)",
            spec,
            30,
            "GPU missing or integrated",
        ),
    ]
}

fn gaming(spec: &TypedSpecification) -> Vec<AttributeScore> {
    let refresh = match spec.display.refresh_hz {
        Some(hz) if hz >= 144 => AttributeScore::new("Display Refresh", 100, format!("{hz} Hz")),
        Some(hz) => AttributeScore::new("Display Refresh", 80, format!("{hz} Hz")),
        None => AttributeScore::new("Display Refresh", 50, "Not specified"),
    };

    vec![
        cpu("CPU (Gaming)", spec),
        gpu("GPU (Gaming)", spec, 10, "No dedicated GPU"),
        ram("RAM (Gaming)", spec, &[(32, 100), (16, 85)], 50),
        refresh,
        AttributeScore::new(
            "Cooling & Build",
            70,
            "Automatic check limited; please inspect thermal design",
        ),
    ]
}

fn design(spec: &TypedSpecification) -> Vec<AttributeScore> {
    let resolution = spec.display.resolution.as_deref();
    let color_score = match resolution {
        Some(res) if res.contains("4k") || res.contains("3840") => 100,
        Some(res) if res.contains("1920") => 70,
        _ => 40,
    };

    vec![
        cpu("CPU (Rendering)", spec),
        ram("RAM (Design)", spec, &[(32, 100), (16, 90)], 60),
        storage_size("Storage (Large files)", spec, &[(512, 100), (256, 80)], 50),
        gpu("GPU (Acceleration)", spec, 40, "GPU recommended"),
        AttributeScore::new(
            "Display Color Accuracy",
            color_score,
            resolution.unwrap_or("Not specified"),
        ),
    ]
}

fn architecture(spec: &TypedSpecification) -> Vec<AttributeScore> {
    vec![
        cpu("CPU (CAD/Rendering)", spec),
        ram("RAM (CAD)", spec, &[(32, 100), (16, 85)], 50),
        storage_size("Storage", spec, &[(1024, 100), (512, 85)], 55),
        gpu("GPU (3D Accel)", spec, 30, "GPU needed"),
    ]
}

fn business(spec: &TypedSpecification) -> Vec<AttributeScore> {
    vec![
        cpu_floor("CPU (Office)", spec, 90, 70),
        ram("RAM (Office)", spec, &[(16, 90), (8, 75)], 40),
        AttributeScore::new(
            "Portability & Battery",
            80,
            "Prefer lightweight and long battery",
        ),
        storage_size("Storage", spec, &[(256, 80)], 50),
    ]
}

fn film_media(spec: &TypedSpecification) -> Vec<AttributeScore> {
    vec![
        cpu("CPU (Video Editing)", spec),
        ram("RAM (Video)", spec, &[(32, 100), (16, 85)], 55),
        storage_size("Storage (Fast)", spec, &[(1024, 100), (512, 85)], 60),
        gpu("GPU (Render Accel)", spec, 40, "Recommended"),
    ]
}

fn medical(spec: &TypedSpecification) -> Vec<AttributeScore> {
    vec![
        cpu_floor("CPU (Medical Apps)", spec, 85, 60),
        ram("RAM (Medical)", spec, &[(16, 85), (8, 65)], 35),
        AttributeScore::new(
            "Portability & Battery",
            90,
            "Prefer long battery for clinical rotations",
        ),
    ]
}

fn general(_spec: &TypedSpecification) -> Vec<AttributeScore> {
    vec![AttributeScore::new(
        "General Purpose Fit",
        70,
        "Fallback generic checks",
    )]
}
