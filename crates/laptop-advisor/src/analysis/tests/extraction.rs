use super::common::*;
use crate::analysis::domain::{CpuClass, GpuSpec, RawProductText, TypedSpecification};
use crate::analysis::extraction::{
    detect_battery_hours, detect_cpu, detect_display, detect_gpu, detect_ports, detect_ram,
    detect_storage, detect_weight_kg, extract,
};

#[test]
fn highest_cpu_tier_wins_regardless_of_order() {
    assert_eq!(
        detect_cpu("i9-13900h paired with legacy i7 dock"),
        CpuClass::I9Ryzen9
    );
    assert_eq!(
        detect_cpu("legacy i7 dock next to a ryzen 9 7940hs"),
        CpuClass::I9Ryzen9
    );
}

#[test]
fn cpu_classes_cover_each_tier() {
    assert_eq!(detect_cpu("intel core i7-1255u"), CpuClass::I7Ryzen7);
    assert_eq!(detect_cpu("amd ryzen 5 5600h"), CpuClass::I5Ryzen5);
    assert_eq!(detect_cpu("amd ryzen3 7320u"), CpuClass::I3Ryzen3);
    assert_eq!(detect_cpu("apple m2 chip"), CpuClass::AppleM);
    assert_eq!(detect_cpu("intel celeron n4020"), CpuClass::Unknown);
    assert_eq!(detect_cpu(""), CpuClass::Unknown);
}

#[test]
fn explicit_ram_mention_beats_bare_gb_token() {
    assert_eq!(detect_ram("16gb ram, 512gb storage"), Some(16));
    assert_eq!(detect_ram("512gb ssd with 8 gb memory"), Some(8));
}

#[test]
fn ram_falls_back_to_first_bare_gb_token() {
    assert_eq!(detect_ram("512gb ssd, 16 gb ddr4"), Some(512));
    assert_eq!(detect_ram("no numbers here"), None);
}

#[test]
fn zero_ram_is_absent_not_zero() {
    assert_eq!(detect_ram("0 gb ram"), None);
}

#[test]
fn storage_flags_are_independent() {
    let ssd = detect_storage("1tb ssd");
    assert!(ssd.is_ssd);
    assert!(!ssd.is_hdd);
    assert_eq!(ssd.size_gb, None, "single-digit sizes are not read");

    let hdd = detect_storage("500 gb hard disk");
    assert!(!hdd.is_ssd);
    assert!(hdd.is_hdd);
    assert_eq!(hdd.size_gb, Some(500));

    let hybrid = detect_storage("256gb ssd + 1tb hdd");
    assert!(hybrid.is_ssd && hybrid.is_hdd);

    let unknown = detect_storage("plenty of space");
    assert!(!unknown.is_ssd && !unknown.is_hdd);
    assert_eq!(unknown.size_gb, None);
}

#[test]
fn terabytes_convert_to_gigabytes() {
    assert_eq!(detect_storage("16 tb nas ssd").size_gb, Some(16384));
    assert_eq!(detect_storage("10tb hdd").size_gb, Some(10240));
}

#[test]
fn storage_size_takes_first_gb_token_even_when_it_is_ram() {
    let storage = detect_storage("16gb ram, 512gb ssd");
    assert!(storage.is_ssd);
    assert_eq!(storage.size_gb, Some(16));
}

#[test]
fn gpu_tiers_follow_keyword_priority() {
    assert_eq!(detect_gpu("nvidia geforce rtx 3050"), GpuSpec::detected(100));
    assert_eq!(detect_gpu("amd radeon rx 6500m"), GpuSpec::detected(100));
    assert_eq!(detect_gpu("nvidia gtx 1650"), GpuSpec::detected(75));
    assert_eq!(detect_gpu("intel iris xe graphics"), GpuSpec::detected(75));
    assert_eq!(detect_gpu("nvidia quadro t1000"), GpuSpec::detected(70));
    assert_eq!(detect_gpu("intel uhd graphics"), GpuSpec::ABSENT);
    assert_eq!(GpuSpec::ABSENT.capability_score, 10);
}

#[test]
fn battery_hours_accept_common_spellings() {
    assert_eq!(detect_battery_hours("up to 10 hours of use"), Some(10));
    assert_eq!(detect_battery_hours("12-hour battery"), Some(12));
    assert_eq!(detect_battery_hours("rated 9 hrs"), Some(9));
    assert_eq!(detect_battery_hours("long battery life"), None);
}

#[test]
fn kilograms_take_precedence_over_pounds() {
    assert_eq!(detect_weight_kg("3.5 lbs or 1.6 kg"), Some(1.6));
    assert_eq!(detect_weight_kg("weighs 1.3 kilograms"), Some(1.3));
    let pounds = detect_weight_kg("weighs 4 pounds").expect("pounds converted");
    assert!((pounds - 4.0 * 0.453592).abs() < 1e-9);
    assert_eq!(detect_weight_kg("featherweight"), None);
}

#[test]
fn display_resolution_and_refresh_are_independent() {
    let display = detect_display("15.6 inch 1920x1080 144hz panel");
    assert_eq!(display.resolution.as_deref(), Some("1920x1080"));
    assert_eq!(display.refresh_hz, Some(144));

    let uhd = detect_display("3840 × 2160 oled");
    assert_eq!(uhd.resolution.as_deref(), Some("3840x2160"));
    assert_eq!(uhd.refresh_hz, None);

    let none = detect_display("bright screen");
    assert_eq!(none.resolution, None);
    assert_eq!(none.refresh_hz, None);
}

#[test]
fn port_keywords_are_detected() {
    assert!(detect_ports("2x usb 3.2"));
    assert!(detect_ports("thunderbolt 4"));
    assert!(!detect_ports("wifi 6 and bluetooth"));
}

#[test]
fn empty_text_extracts_fully_unknown_specification() {
    assert_eq!(extract(&RawProductText::default()), TypedSpecification::default());
}

#[test]
fn extractor_scans_title_details_and_bullets() {
    let spec = extract(&zenbook());
    assert_eq!(spec.cpu, CpuClass::I7Ryzen7);
    assert_eq!(spec.ram_gb, Some(16));
    assert!(spec.storage.is_ssd);
    assert_eq!(spec.storage.size_gb, Some(16));
    assert_eq!(spec.gpu, GpuSpec::detected(100));
    assert_eq!(spec.battery_hours, Some(10));
    assert_eq!(spec.weight_kg, Some(1.3));
    assert_eq!(spec.display.resolution.as_deref(), Some("1920x1080"));
    assert_eq!(spec.display.refresh_hz, Some(144));
    assert!(spec.has_ports);
}

#[test]
fn extractor_is_total_over_odd_input() {
    let inputs = [
        "",
        "   ",
        "××××××",
        "9999999999999999999999 gb ram 99999 tb",
        "battery battery battery hours",
        "🚀 laptop ✨ 0.0 kg 0 lb",
    ];
    for input in inputs {
        let spec = extract(&product(input, input, input));
        assert!(spec.ram_gb.map_or(true, |gb| gb > 0));
        assert!(spec.weight_kg.map_or(true, |kg| kg > 0.0));
        assert!(spec.battery_hours.map_or(true, |hours| hours > 0));
    }
}
