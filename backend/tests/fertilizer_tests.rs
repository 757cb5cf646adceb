//! Fertilizer schedule tests
//!
//! Verifies bud stage lookup without fallback and the plantation type
//! fertilizer windows.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use shared::fertilizer::{fertilizer_requirement, fertilizer_schedule};
use shared::growth_stage::months_since_plantation;
use shared::{BudTable, EngineError, FertilizerRequirement, PlantationRecord, PlantationType};

fn record(planted: NaiveDate, kind: &str) -> PlantationRecord {
    PlantationRecord {
        plot_id: "FERT-1".to_string(),
        plantation_date: planted.format("%Y-%m-%d").to_string(),
        plantation_type: Some(kind.to_string()),
        planting_method: "Single Bud Chip".to_string(),
        lat: None,
        lon: None,
    }
}

// =============================================================================
// Plantation Type Windows
// =============================================================================

mod windows {
    use super::*;

    #[test]
    fn window_lengths() {
        assert_eq!(PlantationType::Suru.fertilizer_months(), 10);
        assert_eq!(PlantationType::Adsali.fertilizer_months(), 14);
        assert_eq!(PlantationType::Preseasonal.fertilizer_months(), 12);
        assert_eq!(PlantationType::Ratoon.fertilizer_months(), 9);
    }

    #[test]
    fn type_names_are_forgiving() {
        assert_eq!(PlantationType::from_name("Pre-Seasonal"), Some(PlantationType::Preseasonal));
        assert_eq!(PlantationType::from_name(" ADSALI "), Some(PlantationType::Adsali));
        assert_eq!(PlantationType::from_name("kharif"), None);
    }

    #[test]
    fn adsali_still_fed_at_twelve_months() {
        let bud = BudTable::bundled().unwrap();
        let planted = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        // day 358 plus 6 stays inside the 211-365 stage
        let result = fertilizer_requirement(&record(planted, "adsali"), &bud, today).unwrap();
        assert!(matches!(result, FertilizerRequirement::Required { months_completed: 11, .. }));
    }

    #[test]
    fn unknown_method_propagates() {
        let bud = BudTable::bundled().unwrap();
        let err = fertilizer_schedule("2024-01-01", "seedling", &bud, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownMethod("seedling".into()));
    }
}

// =============================================================================
// Property Tests
// =============================================================================

mod properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Inside the bud table the schedule covers seven consecutive days
        #[test]
        fn prop_schedule_consecutive(days in 0i64..=359) {
            let bud = BudTable::bundled().unwrap();
            let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
            let planted = today - Duration::days(days);
            let schedule = fertilizer_schedule(
                &planted.format("%Y-%m-%d").to_string(),
                "3 Eye Bud Sett",
                &bud,
                today,
            ).unwrap();

            prop_assert_eq!(schedule.len(), 7);
            for (i, entry) in schedule.iter().enumerate() {
                prop_assert_eq!(entry.days, days + i as i64);
                prop_assert_eq!(entry.date, today + Duration::days(i as i64));
            }
        }

        /// Past the last stage there is no fallback
        #[test]
        fn prop_no_stage_past_table(days in 366i64..2000) {
            let bud = BudTable::bundled().unwrap();
            let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
            let planted = today - Duration::days(days);
            let err = fertilizer_schedule(&planted.format("%Y-%m-%d").to_string(), "2 Eye Bud Sett", &bud, today)
                .unwrap_err();
            prop_assert_eq!(err, EngineError::NoStageDefined { days });
        }

        /// Completed exactly when the window has elapsed
        #[test]
        fn prop_requirement_matches_window(days in 0i64..=500, kind in 0usize..4) {
            let bud = BudTable::bundled().unwrap();
            let plantation_type = PlantationType::ALL[kind];
            let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
            let planted = today - Duration::days(days);
            let months = months_since_plantation(planted, today);

            let result = fertilizer_requirement(&record(planted, plantation_type.name()), &bud, today);
            if months >= plantation_type.fertilizer_months() {
                prop_assert!(
                    matches!(result, Ok(FertilizerRequirement::Completed { .. })),
                    "expected completed window"
                );
            } else if days + 6 <= 365 {
                prop_assert!(
                    matches!(result, Ok(FertilizerRequirement::Required { .. })),
                    "expected a schedule"
                );
            }
        }
    }
}
