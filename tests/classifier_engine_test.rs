// ==========================================
// Divider Calculatie - batch classifier integration tests
// ==========================================
// Scenarios against the factory-default catalog, both height regimes
// ==========================================

use divider_calc::{classify_batch, default_divider_definitions, DividerDefinition, PartRecord};

fn record(id: &str, soort: &str, p: [&str; 5], netto_lengte: &str) -> PartRecord {
    PartRecord {
        stuklijst_id: id.to_string(),
        soort: soort.to_string(),
        omschrijving: String::new(),
        p: p.map(str::to_string),
        netto_lengte: netto_lengte.to_string(),
    }
}

// ==========================================
// Scenario: square tube, default catalog
// ==========================================

#[test]
fn test_vierkant_buis_matches_3x4() {
    let rows = vec![record("S1", "Vierkant buis", ["40", "", "", "", ""], "100")];
    let out = classify_batch(&rows, &default_divider_definitions(), None).unwrap();

    // dims (100, 40, 40): 4×8 and 4×4 footprints fail, 6×4 height fails,
    // 3×4 (111×57×52) is the first fit in catalog order
    assert_eq!(out[0].afmetingen, "100×40×40");
    assert_eq!(out[0].beste_indeling_52, "3×4");
    assert_eq!(out[0].hoogtecheck_95, "3×4"); // no override: same catalog
    assert_eq!(out[0].reden, "");
}

// ==========================================
// Scenario: blank unknown part
// ==========================================

#[test]
fn test_blank_onbekend_part_gets_first_catalog_entry() {
    let rows = vec![record("S2", "Profiel", ["", "", "", "", ""], "")];
    let out = classify_batch(&rows, &default_divider_definitions(), None).unwrap();

    // dims (0,0,0) fit everywhere; the sorted catalog starts at 4×8
    assert_eq!(out[0].afmetingen, "0×0×0");
    assert_eq!(out[0].beste_indeling_52, "4×8");
    assert_eq!(out[0].reden, "");
}

// ==========================================
// Scenario: rejection reasons
// ==========================================

#[test]
fn test_oversized_footprint_is_te_groot() {
    // Plaat 300×200×10: L above every divider L (max 166)
    let rows = vec![record("S3", "Plaat", ["300", "200", "10", "", ""], "")];
    let out = classify_batch(&rows, &default_divider_definitions(), None).unwrap();

    assert_eq!(out[0].beste_indeling_52, "GEEN");
    assert_eq!(out[0].hoogtecheck_95, "GEEN");
    assert_eq!(out[0].reden, "te groot");
}

#[test]
fn test_tall_part_with_small_footprint_is_te_hoog() {
    // Rond ⌀100 × 50 long: dims (50, 100, 100); footprint within maxima,
    // height above the 95mm ceiling
    let rows = vec![record("S4", "Rond", ["100", "", "", "", ""], "50")];
    let out = classify_batch(&rows, &default_divider_definitions(), None).unwrap();

    assert_eq!(out[0].beste_indeling_52, "GEEN");
    assert_eq!(out[0].reden, "te hoog");
}

#[test]
fn test_intermediate_height_is_past_niet() {
    // Plaat 100×100×60: footprint fits 2×2, height between 52 and 95
    let rows = vec![record("S5", "Plaat", ["100", "100", "60", "", ""], "")];
    let out = classify_batch(&rows, &default_divider_definitions(), None).unwrap();

    assert_eq!(out[0].beste_indeling_52, "GEEN");
    assert_eq!(out[0].reden, "past niet");
}

// ==========================================
// Scenario: 95mm regime with override
// ==========================================

#[test]
fn test_override_rescues_intermediate_height_in_95_column() {
    let rows = vec![record("S6", "Plaat", ["100", "100", "60", "", ""], "")];
    let out = classify_batch(&rows, &default_divider_definitions(), Some(95.0)).unwrap();

    // 52mm regime still fails, but under the 95mm override the part walks
    // the catalog to 3×2 (111×113), the first entry taking a 100×100 footprint
    assert_eq!(out[0].beste_indeling_52, "GEEN");
    assert_eq!(out[0].hoogtecheck_95, "3×2");
    assert_eq!(out[0].reden, "past niet");
}

#[test]
fn test_95_column_reported_even_when_52_matches() {
    let rows = vec![record("S7", "Vierkant", ["40", "", "", "", ""], "100")];
    let out = classify_batch(&rows, &default_divider_definitions(), Some(95.0)).unwrap();

    assert_eq!(out[0].beste_indeling_52, "3×4");
    assert_eq!(out[0].hoogtecheck_95, "3×4"); // both always computed
}

// ==========================================
// Batch shape
// ==========================================

#[test]
fn test_output_preserves_row_count_and_order() {
    let rows = vec![
        record("A", "Plaat", ["10", "10", "5", "", ""], ""),
        record("B", "Rond", ["600", "", "", "", ""], "600"),
        record("C", "", ["", "", "", "", ""], ""),
    ];
    let out = classify_batch(&rows, &default_divider_definitions(), None).unwrap();

    let ids: Vec<&str> = out.iter().map(|r| r.stuklijst_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn test_dimensions_label_rounds_to_integers() {
    let rows = vec![record("S8", "Vierkant", ["40,4", "", "", "", ""], "100,6")];
    let out = classify_batch(&rows, &default_divider_definitions(), None).unwrap();
    assert_eq!(out[0].afmetingen, "101×40×40");
}

// ==========================================
// Catalog failures abort the batch
// ==========================================

#[test]
fn test_malformed_catalog_fails_before_any_row() {
    let rows = vec![record("S9", "Plaat", ["10", "10", "5", "", ""], "")];
    let defs = vec![DividerDefinition::new("2×2", "166", "hoog", "52")];

    assert!(classify_batch(&rows, &defs, None).is_err());
}
