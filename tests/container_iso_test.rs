use container_iso::{
    calculate_check_digit, cbm_for, classify_type, code_to_name, dimensions_for, full_iso_code,
    is_high_cube, name_to_code, parse_serial, validate_serial, CategoryIdentifier,
    ContainerDimension, ContainerError, IsoCode,
};

#[test]
fn every_code_has_a_canonical_alias() {
    let aliases = [
        ("dry van", IsoCode::GeneralPurpose),
        ("hi-cube", IsoCode::HighCube),
        ("reefer", IsoCode::Reefer),
        ("flat rack", IsoCode::FlatRack),
        ("open top", IsoCode::OpenTop),
        ("iso tank", IsoCode::Tank),
        ("ventilated", IsoCode::Ventilated),
        ("platform", IsoCode::Platform),
        ("bulk", IsoCode::Bulk),
        ("half height", IsoCode::HalfHeight),
        ("liner", IsoCode::Liner),
        ("pallet wide", IsoCode::PalletWide),
        ("insulated", IsoCode::Insulated),
        ("side door", IsoCode::SideDoor),
        ("collapsible", IsoCode::Collapsible),
        ("loose cargo", IsoCode::Uncontainerized),
    ];

    for (alias, code) in aliases {
        assert_eq!(classify_type(alias), Some(code), "alias {alias:?}");
    }

    // The two-letter code itself classifies to its own group.
    for code in IsoCode::ALL {
        assert_eq!(classify_type(code.code()), Some(code));
    }
}

#[test]
fn full_iso_code_always_has_size_and_two_letters() {
    for raw in ["", "   ", "reefer", "banana-box", "!!!", "40' HC"] {
        let full = full_iso_code(raw, "45");
        assert!(full.starts_with("45"), "{full}");
        assert_eq!(full.len(), 4, "{full}");
        assert!(full[2..].chars().all(|c| c.is_ascii_uppercase()), "{full}");
    }
}

#[test]
fn case_insensitive_classification() {
    assert_eq!(classify_type("REEFER"), classify_type("reefer"));
    assert_eq!(classify_type("ReEfEr"), classify_type("reefer"));
    assert_eq!(classify_type("reefer"), Some(IsoCode::Reefer));
}

#[test]
fn high_cube_is_a_superset() {
    for raw in ["hc", "pallet wide", "reefer", "rhc"] {
        assert!(is_high_cube(raw), "{raw}");
    }
    assert_eq!(classify_type("20 high-ish box"), None);
    assert!(is_high_cube("20 high-ish box"));
    assert!(!is_high_cube("flat rack"));
}

#[test]
fn garbage_input() {
    assert_eq!(classify_type("banana-box"), None);
    assert_eq!(full_iso_code("banana-box", "20"), "20XX");
    assert!(!is_high_cube("banana-box"));
}

#[test]
fn flat_rack_end_to_end() {
    let code = classify_type("flt").unwrap();
    assert_eq!(code, IsoCode::FlatRack);
    assert_eq!(full_iso_code("flt", "40"), "40FR");
    assert_eq!(
        dimensions_for(code, "40"),
        Some(ContainerDimension {
            length_mm: 12192,
            width_mm: 2438,
            height_mm: 2591,
            cbm: 76,
        })
    );
    assert_eq!(cbm_for(code, "40"), Some(76));
    assert_eq!(cbm_for(code, "45"), None);
}

#[test]
fn name_lookups() {
    assert_eq!(name_to_code("Reefer"), Some(IsoCode::Reefer));
    assert_eq!(name_to_code("flat rack"), Some(IsoCode::FlatRack));
    assert_eq!(name_to_code("flt"), None);
    assert!(code_to_name("RC").unwrap().contains("reefer"));
    assert!(code_to_name("fr").unwrap().contains("flat"));
    assert!(code_to_name("HC").unwrap().contains("high"));
    assert_eq!(code_to_name("XX"), None);
}

#[test]
fn serial_parse_and_validate() {
    let parsed = parse_serial("TCLU7024574").unwrap();
    assert_eq!(parsed.owner_code, "TCL");
    assert_eq!(
        parsed.category_identifier,
        CategoryIdentifier::FreightContainer
    );
    assert_eq!(parsed.serial_number, "702457");
    assert_eq!(parsed.check_digit, 4);
    assert!(parsed.is_valid);
    assert!(validate_serial("TCLU7024574"));
}

#[test]
fn flipping_check_digit_invalidates() {
    for serial in ["TCLU7024574", "FFAU2504240", "TXGU4205666"] {
        assert!(validate_serial(serial));
        let (window, digit) = serial.split_at(10);
        let digit: u8 = digit.parse().unwrap();
        for other in (0..10u8).filter(|d| *d != digit) {
            let flipped = format!("{window}{other}");
            let parsed = parse_serial(&flipped).expect("still structurally valid");
            assert!(!parsed.is_valid, "{flipped}");
            assert!(!validate_serial(&flipped));
        }
    }
}

#[test]
fn mismatched_and_malformed_serials() {
    let parsed = parse_serial("MSCU1234560").unwrap();
    assert!(!parsed.is_valid);
    assert_eq!(parse_serial("HELLO-WORLD"), None);
    assert!(!validate_serial("HELLO-WORLD"));
}

#[test]
fn check_digit_rejects_bad_characters() {
    assert_eq!(calculate_check_digit("TCLU702457"), Ok(4));
    assert_eq!(
        calculate_check_digit("TCLU70 457"),
        Err(ContainerError::InvalidCharacter {
            ch: ' ',
            position: 6
        })
    );
    assert_eq!(
        calculate_check_digit("TCL"),
        Err(ContainerError::CheckWindowTooShort(3))
    );
}
