use super::*;

// =============================================================
// Field lists
// =============================================================

#[test]
fn standard_variant_has_eight_fields_in_wire_order() {
    let names: Vec<&str> = FormVariant::Standard
        .fields()
        .iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(
        names,
        [
            "area",
            "floors",
            "buildingType",
            "budget",
            "days",
            "latitude",
            "longitude",
            "land_image"
        ]
    );
}

#[test]
fn extended_variant_adds_room_counts_before_the_image() {
    let names: Vec<&str> = FormVariant::Extended
        .fields()
        .iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names.len(), 12);
    assert_eq!(
        &names[7..],
        ["bedrooms", "bathrooms", "kitchen", "hall", "land_image"]
    );
    // The shared prefix is identical between variants.
    assert_eq!(&names[..7], &FormVariant::Standard.fields()[..7]
        .iter()
        .map(|f| f.name)
        .collect::<Vec<_>>()[..]);
}

#[test]
fn each_variant_has_exactly_one_file_field() {
    for variant in [FormVariant::Standard, FormVariant::Extended] {
        let files: Vec<&FormField> = variant
            .fields()
            .iter()
            .filter(|f| f.kind == FieldKind::File)
            .collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "land_image");
    }
}

#[test]
fn building_type_options_match_backend_price_table() {
    let field = FormVariant::Standard
        .fields()
        .iter()
        .find(|f| f.name == "buildingType")
        .unwrap();
    let FieldKind::Select(options) = field.kind else {
        panic!("buildingType must be a select");
    };
    assert_eq!(
        options,
        [
            "Residential",
            "Duplex",
            "Villa",
            "Apartment",
            "Commercial",
            "Office",
            "Other"
        ]
    );
}

// =============================================================
// Variant flags
// =============================================================

#[test]
fn only_the_extended_variant_offers_blueprints() {
    assert!(!FormVariant::Standard.has_blueprint_view());
    assert!(FormVariant::Extended.has_blueprint_view());
}

#[test]
fn default_variant_is_extended() {
    assert_eq!(FormVariant::default(), FormVariant::Extended);
}
