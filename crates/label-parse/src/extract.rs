//! Fiber composition and weight extraction from segment content.

use label_model::{WeightMeasurement, WeightUnit};
use tracing::{debug, trace};

use crate::patterns::{FIBER, WEIGHT};

/// A `<pct>% <name>` match before metadata tagging.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFiber {
    /// `None` when the numeral does not parse as a float.
    pub percentage: Option<f64>,
    /// Trimmed name text.
    pub raw_name: String,
}

/// Extracts the first weight and every fiber mention from `content`.
pub fn extract(content: &str) -> (Option<WeightMeasurement>, Vec<RawFiber>) {
    (extract_weight(content), extract_fibers(content))
}

/// Every fiber mention in order of appearance. Duplicates are kept.
pub fn extract_fibers(content: &str) -> Vec<RawFiber> {
    FIBER
        .captures_iter(content)
        .map(|caps| {
            let numeral = &caps[1];
            let percentage = numeral.parse::<f64>().ok();
            if percentage.is_none() {
                debug!(numeral, "unparseable fiber percentage");
            }
            let fiber = RawFiber {
                percentage,
                raw_name: caps[2].trim().to_string(),
            };
            trace!(?fiber, "fiber mention");
            fiber
        })
        .collect()
}

/// First weight measurement in `content`, if any.
///
/// Units containing `m2` or `m²` map to grams per square meter, everything
/// else to grams.
pub fn extract_weight(content: &str) -> Option<WeightMeasurement> {
    let caps = WEIGHT.captures(content)?;
    let matched = caps.get(0)?.as_str().to_lowercase();
    let unit = if matched.contains("m2") || matched.contains("m²") {
        WeightUnit::GramsPerSquareMeter
    } else {
        WeightUnit::Grams
    };
    let Ok(value) = caps[1].parse::<f64>() else {
        debug!(numeral = &caps[1], "unparseable weight");
        return None;
    };
    trace!(value, %unit, "weight");
    Some(WeightMeasurement { value, unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fiber(percentage: f64, raw_name: &str) -> RawFiber {
        RawFiber {
            percentage: Some(percentage),
            raw_name: raw_name.to_string(),
        }
    }

    #[test]
    fn two_fibers_and_weight() {
        let (weight, fibers) = extract("80% Cotton, 20% Polyester 250gr");
        assert_eq!(
            weight,
            Some(WeightMeasurement {
                value: 250.0,
                unit: WeightUnit::Grams
            })
        );
        assert_eq!(fibers, vec![fiber(80.0, "Cotton"), fiber(20.0, "Polyester")]);
    }

    #[test]
    fn decimal_percentages_and_spacing() {
        let fibers = extract_fibers("97.5 %  Organic Cotton 2.5%Elastane");
        assert_eq!(
            fibers,
            vec![fiber(97.5, "Organic Cotton"), fiber(2.5, "Elastane")]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let fibers = extract_fibers("50% Wool, 50% Wool");
        assert_eq!(fibers, vec![fiber(50.0, "Wool"), fiber(50.0, "Wool")]);
    }

    #[test]
    fn percent_without_name_is_skipped() {
        assert!(extract_fibers("100%").is_empty());
        assert!(extract_fibers("100%,").is_empty());
    }

    #[test]
    fn non_ascii_digits_degrade_to_none() {
        let fibers = extract_fibers("١٠٠% Cotton");
        assert_eq!(fibers.len(), 1);
        assert_eq!(fibers[0].percentage, None);
        assert_eq!(fibers[0].raw_name, "Cotton");
    }

    #[test]
    fn weight_unit_variants() {
        let square = extract_weight("250 g/m²").expect("weight");
        assert_eq!(square.value, 250.0);
        assert_eq!(square.unit, WeightUnit::GramsPerSquareMeter);

        let plain = extract_weight("250gr").expect("weight");
        assert_eq!(plain.unit, WeightUnit::Grams);

        assert_eq!(
            extract_weight("180 GM2").map(|w| w.unit),
            Some(WeightUnit::GramsPerSquareMeter)
        );
        assert_eq!(
            extract_weight("90 G/M2").map(|w| w.unit),
            Some(WeightUnit::GramsPerSquareMeter)
        );
        assert_eq!(extract_weight("12.5 grams").map(|w| w.value), Some(12.5));
        assert_eq!(extract_weight("300g.").map(|w| w.unit), Some(WeightUnit::Grams));
    }

    #[test]
    fn only_first_weight_is_kept() {
        let weight = extract_weight("Shell 200 g/m2, padding 80g").expect("weight");
        assert_eq!(weight.value, 200.0);
        assert_eq!(weight.unit, WeightUnit::GramsPerSquareMeter);
    }

    #[test]
    fn no_weight() {
        assert_eq!(extract_weight("100% Cotton"), None);
    }
}
