//! Pest, disease and weed risk tests
//!
//! Verifies the High-only classifier, fungal disease exclusivity and weed
//! bucket completeness.

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::catalog::{DISEASES, FUNGAL_DISEASES, PESTS, WEEDS};
use shared::pest_risk::{assess, bucket_weeds, classify};
use shared::{CurrentConditions, DetectionSignal, RiskLevel, MONTH_NAMES};

fn signals(chewing: f64, sucking: f64, fungal: f64, soil: f64) -> DetectionSignal {
    DetectionSignal {
        chewing_affected_pixel_percentage: chewing,
        sucking_affected_pixel_percentage: sucking,
        fungi_affected_pixel_percentage: fungal,
        soil_borne_affected_pixel_percentage: soil,
    }
}

// =============================================================================
// Catalog Scenarios
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn woolly_aphids_any_month_in_grand_growth() {
        let aphids = PESTS.iter().find(|p| p.name == "Sugarcane woolly aphids").unwrap();
        for month in MONTH_NAMES {
            assert_eq!(classify(aphids, 150, month, &signals(0.0, 5.0, 0.0, 0.0)), Some(RiskLevel::High));
        }
        assert_eq!(classify(aphids, 100, "May", &signals(0.0, 5.0, 0.0, 0.0)), None);
    }

    #[test]
    fn soil_signal_flags_termites() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        let conditions = CurrentConditions {
            month: Some("October".into()),
            temperature: 30.0,
            humidity: 70.0,
        };
        let result = assess(Some("2024-03-01"), &conditions, &signals(0.0, 0.0, 0.0, 8.0), today);
        assert_eq!(result.pests.high, vec!["Termites"]);
    }

    #[test]
    fn provider_spelling_of_soil_signal() {
        let signal: DetectionSignal =
            serde_json::from_str(r#"{"SoilBorn_affected_pixel_percentage": "8.0"}"#).unwrap();
        assert_eq!(signal.soil_borne_affected_pixel_percentage, 8.0);
    }

    #[test]
    fn off_season_weeds_still_listed() {
        // every calendar month has an active weed, so only an unknown
        // month reaches the positional fallback
        let buckets = bucket_weeds(WEEDS, "Smarch");
        assert_eq!(buckets.high.len(), 2);
        assert_eq!(buckets.moderate.len(), 1);
        assert_eq!(buckets.low.len(), 1);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

mod properties {
    use super::*;

    fn month() -> impl Strategy<Value = String> {
        prop::sample::select(MONTH_NAMES.to_vec()).prop_map(str::to_string)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Non-fungal diseases are never reported
        #[test]
        fn prop_fungal_exclusivity(
            days in 0i64..400,
            month in month(),
            chewing in 0.0f64..100.0,
            sucking in 0.0f64..100.0,
            fungal in 0.0f64..100.0,
            soil in 0.0f64..100.0,
        ) {
            let signal = signals(chewing, sucking, fungal, soil);
            for disease in DISEASES.iter().filter(|d| !FUNGAL_DISEASES.contains(&d.name)) {
                prop_assert_eq!(classify(disease, days, &month, &signal), None);
            }
        }

        /// High iff signal, stage and month all match
        #[test]
        fn prop_classifier_is_conjunction(
            idx in 0usize..11,
            days in 0i64..400,
            month in month(),
            pct in 0.0f64..50.0,
        ) {
            let pest = &PESTS[idx];
            let signal = signals(pct, pct, pct, pct);
            let expected = pct > 0.0
                && pest.stage.map_or(true, |r| r.contains(days))
                && pest.months.contains(&month.as_str());
            prop_assert_eq!(classify(pest, days, &month, &signal) == Some(RiskLevel::High), expected);
        }

        /// Weed buckets always account for the whole catalog
        #[test]
        fn prop_weed_buckets_complete(month in "[A-Za-z]{0,10}", take in 0usize..=4) {
            let catalog = &WEEDS[..take];
            let buckets = bucket_weeds(catalog, &month);
            prop_assert_eq!(buckets.high.len() + buckets.moderate.len() + buckets.low.len(), catalog.len());
        }

        /// Moderate and Low stay empty for pests and diseases
        #[test]
        fn prop_only_high_is_reported(
            days in 0i64..400,
            month in month(),
            pct in 0.0f64..100.0,
        ) {
            let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
            let planted = today - chrono::Duration::days(days);
            let conditions = CurrentConditions { month: Some(month), ..Default::default() };
            let result = assess(
                Some(&planted.format("%Y-%m-%d").to_string()),
                &conditions,
                &signals(pct, pct, pct, pct),
                today,
            );
            prop_assert!(result.pests.moderate.is_empty() && result.pests.low.is_empty());
            prop_assert!(result.diseases.moderate.is_empty() && result.diseases.low.is_empty());
            prop_assert_eq!(result.days_since_plantation, days);
        }
    }
}
