// ==========================================
// Divider Calculatie - shape detector
// ==========================================
// Responsibility: free-text Soort/Omschrijving -> shape category
// Invariant: pure function, never fails
// ==========================================

use crate::domain::ShapeCategory;

/// Detect the shape category of a part from its category and description
/// text.
///
/// Both fields are lower-cased and concatenated, then probed for keywords
/// in a fixed priority order — the first hit wins. A description holding
/// both "plaat" and "rond" is therefore a Plaat. No keyword at all means
/// Onbekend.
pub fn detect_shape(soort: &str, omschrijving: &str) -> ShapeCategory {
    let text = format!("{} {}", soort, omschrijving).to_lowercase();

    if text.contains("plaat") {
        return ShapeCategory::Plaat;
    }
    if text.contains("strip") && text.contains("plat") {
        return ShapeCategory::StripPlat;
    }
    if text.contains("vierkant") {
        return ShapeCategory::Vierkant;
    }
    if text.contains("zeskant") {
        return ShapeCategory::Zeskant;
    }
    if text.contains("koker") {
        return ShapeCategory::Koker;
    }
    if text.contains("buis") {
        return ShapeCategory::Buis;
    }
    if text.contains("rond") {
        return ShapeCategory::Rond;
    }
    ShapeCategory::Onbekend
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_shape_each_keyword() {
        assert_eq!(detect_shape("Plaat", ""), ShapeCategory::Plaat);
        assert_eq!(detect_shape("Vierkant", ""), ShapeCategory::Vierkant);
        assert_eq!(detect_shape("Zeskant", ""), ShapeCategory::Zeskant);
        assert_eq!(detect_shape("Koker", ""), ShapeCategory::Koker);
        assert_eq!(detect_shape("Buis", ""), ShapeCategory::Buis);
        assert_eq!(detect_shape("Rond", ""), ShapeCategory::Rond);
    }

    #[test]
    fn test_detect_shape_is_case_insensitive() {
        assert_eq!(detect_shape("PLAAT", ""), ShapeCategory::Plaat);
        assert_eq!(detect_shape("", "koKER"), ShapeCategory::Koker);
    }

    #[test]
    fn test_detect_shape_priority_order() {
        // "plaat" wins over "rond" regardless of position
        assert_eq!(
            detect_shape("Rond", "plaat van 3mm"),
            ShapeCategory::Plaat
        );
        // "vierkant" wins over "buis"
        assert_eq!(detect_shape("Vierkant buis", ""), ShapeCategory::Vierkant);
    }

    #[test]
    fn test_detect_shape_strip_needs_both_words() {
        assert_eq!(detect_shape("Strip plat", ""), ShapeCategory::StripPlat);
        // keywords may come from the two fields combined
        assert_eq!(detect_shape("Strip", "plat 20x5"), ShapeCategory::StripPlat);
        // "strip" alone matches nothing
        assert_eq!(detect_shape("Strip", ""), ShapeCategory::Onbekend);
    }

    #[test]
    fn test_detect_shape_unknown() {
        assert_eq!(detect_shape("", ""), ShapeCategory::Onbekend);
        assert_eq!(detect_shape("Profiel", "L-vorm"), ShapeCategory::Onbekend);
    }
}
