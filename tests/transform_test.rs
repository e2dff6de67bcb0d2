//! Integration tests for advanced search XML to CSV conversion

use jamf_report::config::MissingFieldPolicy;
use jamf_report::core::transform::{convert_xml_to_csv, parse_devices, render_devices};
use jamf_report::domain::{ReportError, TransformError};
use tempfile::TempDir;
use test_case::test_case;

const FIXTURE: &str = include_str!("fixtures/advanced_search.xml");

const EXPECTED_CSV: &str = "ID,Name,Display Name,UDID,Activation Lock Enabled\n\
101,iPad-Library-01,\"Library Cart, Slot 1\",00008030-001A2C3E0E8B802E,true\n\
102,\"iPad \"\"Front Desk\"\"\",Front Desk,00008030-001A2C3E0E8B9F11,false\n";

fn search_with(count: usize) -> String {
    let devices: String = (0..count)
        .map(|i| {
            format!(
                "<mobile_device><id>{i}</id><name>d{i}</name><Display_Name>D{i}</Display_Name>\
                 <udid>u{i}</udid><Activation_Lock_Enabled>true</Activation_Lock_Enabled></mobile_device>"
            )
        })
        .collect();
    format!(
        "<advanced_mobile_device_search><mobile_devices>{devices}</mobile_devices>\
         </advanced_mobile_device_search>"
    )
}

#[test]
fn test_fixture_renders_expected_csv() {
    let parsed = parse_devices(FIXTURE, MissingFieldPolicy::Fail).unwrap();
    assert_eq!(render_devices(&parsed.devices).unwrap(), EXPECTED_CSV);
}

#[test]
fn test_conversion_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let mut outputs = Vec::new();

    for run in 0..2 {
        let xml_path = dir.path().join("advanced_search_12.xml");
        let csv_path = dir.path().join(format!("run_{run}.csv"));
        std::fs::write(&xml_path, FIXTURE).unwrap();

        convert_xml_to_csv(&xml_path, &csv_path, MissingFieldPolicy::Fail).unwrap();
        outputs.push(std::fs::read(&csv_path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0], EXPECTED_CSV.as_bytes());
}

#[test_case(0 ; "empty search")]
#[test_case(1 ; "single device")]
#[test_case(25 ; "many devices")]
fn test_row_count_matches_records(count: usize) {
    let parsed = parse_devices(&search_with(count), MissingFieldPolicy::Fail).unwrap();
    let csv = render_devices(&parsed.devices).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), count + 1);
    assert_eq!(lines[0], "ID,Name,Display Name,UDID,Activation Lock Enabled");
}

#[test]
fn test_incomplete_record_aborts_and_keeps_xml() {
    let dir = TempDir::new().unwrap();
    let xml_path = dir.path().join("advanced_search_12.xml");
    let csv_path = dir.path().join("out.csv");
    std::fs::write(&xml_path, FIXTURE.replace("<udid>00008030-001A2C3E0E8B9F11</udid>", "")).unwrap();

    let err = convert_xml_to_csv(&xml_path, &csv_path, MissingFieldPolicy::Fail).unwrap_err();

    assert!(matches!(
        err,
        ReportError::Transform(TransformError::MissingField { index: 1, field: "udid" })
    ));
    assert!(xml_path.exists());
    assert!(!csv_path.exists());
}

#[test]
fn test_incomplete_record_skipped() {
    let xml = FIXTURE.replace("<udid>00008030-001A2C3E0E8B802E</udid>", "");
    let parsed = parse_devices(&xml, MissingFieldPolicy::Skip).unwrap();

    assert_eq!(parsed.skipped, 1);
    assert_eq!(parsed.devices.len(), 1);
    assert_eq!(parsed.devices[0].id, "102");
}
