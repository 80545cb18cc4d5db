//! Applicant Domain Tests
//!
//! Covers the applicant query methods the risk policies rely on, item
//! collection integrity, and the serde shape of the input types.
//!
//! # Test Organization
//!
//! - `query_methods` - derived predicates and counts on a full applicant
//! - `item_collections` - keyed collection invariants
//! - `risk_answers` - answer weights and deserialization
//! - `vehicle_age` - model-year arithmetic against a reference date

use chrono::NaiveDate;
use core_kernel::ItemKey;
use domain_party::{
    Applicant, Gender, House, HouseStatus, ItemCollection, MaritalStatus, PartyError,
    RiskAnswer, Vehicle,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// A married applicant with four houses (two mortgaged) and two vehicles
fn full_applicant() -> Applicant {
    Applicant::builder()
        .age(42)
        .gender(Gender::Male)
        .marital_status(MaritalStatus::Married)
        .dependents(3)
        .income(230_000)
        .risk_answers([0u8, 1, 1])
        .houses([
            House::new(0, 123, HouseStatus::Owned),
            House::new(1, 124, HouseStatus::Mortgaged),
            House::new(2, 125, HouseStatus::Owned),
            House::new(3, 126, HouseStatus::Mortgaged),
        ])
        .vehicles([
            Vehicle::new(0, "Tesla", "Model S", 2015),
            Vehicle::new(1, "Tesla", "Model X", 2017),
        ])
        .build()
        .expect("valid applicant")
}

// ============================================================================
// QUERY METHODS
// ============================================================================

mod query_methods {
    use super::*;

    /// Verifies every derived predicate on a fully populated applicant
    #[test]
    fn test_full_applicant_queries() {
        let applicant = full_applicant();

        assert_eq!(applicant.base_score(), 2);
        assert!(applicant.is_married());
        assert!(applicant.has_income());
        assert!(applicant.is_income_above(123));
        assert!(!applicant.is_income_above(230_000), "threshold is exclusive");
        assert!(applicant.is_under_age(43));
        assert!(!applicant.is_under_age(42));
        assert!(applicant.is_over_age(41));
        assert!(!applicant.is_over_age(42));
        assert!(applicant.has_vehicles());
        assert!(applicant.has_houses());
        assert!(applicant.has_dependents());
        assert_eq!(applicant.houses_count(), 4);
        assert_eq!(applicant.vehicles_count(), 2);
    }

    /// Verifies mortgaged houses are selected in insertion order
    #[test]
    fn test_mortgaged_houses_selection() {
        let applicant = full_applicant();
        let mortgaged = applicant.mortgaged_houses();

        assert!(applicant.has_mortgaged_houses());
        assert_eq!(mortgaged.len(), 2);
        assert_eq!(mortgaged[0].key, ItemKey::new(1));
        assert_eq!(mortgaged[1].key, ItemKey::new(3));
    }

    /// Verifies positional access into both collections
    #[test]
    fn test_positional_access() {
        let applicant = full_applicant();

        assert_eq!(applicant.house_at(2).unwrap().zip_code, 125);
        assert_eq!(applicant.vehicle_at(1).unwrap().year, 2017);
        assert!(applicant.house_at(4).is_none());
    }

    /// Verifies zero income and zero dependents read as absent
    #[test]
    fn test_zero_values() {
        let applicant = Applicant::builder()
            .age(25)
            .gender(Gender::Female)
            .marital_status(MaritalStatus::Single)
            .income(0)
            .dependents(0)
            .build()
            .unwrap();

        assert!(!applicant.has_income());
        assert!(!applicant.has_dependents());
        assert!(!applicant.has_mortgaged_houses());
        assert!(applicant.mortgaged_houses().is_empty());
    }
}

// ============================================================================
// ITEM COLLECTIONS
// ============================================================================

mod item_collections {
    use super::*;

    /// Verifies duplicate vehicle keys fail applicant construction
    #[test]
    fn test_duplicate_vehicle_key() {
        let result = Applicant::builder()
            .age(30)
            .gender(Gender::Male)
            .marital_status(MaritalStatus::Single)
            .vehicle(Vehicle::new(7, "A", "B", 2020))
            .vehicle(Vehicle::new(7, "C", "D", 2021))
            .build();

        assert_eq!(
            result.unwrap_err(),
            PartyError::DuplicateKey {
                collection: "vehicle",
                key: ItemKey::new(7),
            }
        );
    }

    /// Verifies the same key may appear once in each collection
    #[test]
    fn test_keys_are_scoped_per_collection() {
        let applicant = Applicant::builder()
            .age(30)
            .gender(Gender::Male)
            .marital_status(MaritalStatus::Single)
            .house(House::new(0, 1, HouseStatus::Owned))
            .vehicle(Vehicle::new(0, "A", "B", 2020))
            .build();

        assert!(applicant.is_ok());
    }

    /// Verifies push keeps the collection unchanged on a duplicate
    #[test]
    fn test_push_rejects_duplicate_without_mutation() {
        let mut houses = ItemCollection::new();
        houses.push(House::new(1, 10, HouseStatus::Owned)).unwrap();

        let err = houses
            .push(House::new(1, 20, HouseStatus::Mortgaged))
            .unwrap_err();

        assert_eq!(err.to_string(), "Duplicate house key: 1");
        assert_eq!(houses.len(), 1);
        assert_eq!(houses.get(ItemKey::new(1)).unwrap().zip_code, 10);
    }
}

// ============================================================================
// RISK ANSWERS
// ============================================================================

mod risk_answers {
    use super::*;

    /// Verifies the three accepted answer shapes deserialize
    #[test]
    fn test_deserialize_answer_shapes() {
        let answers: Vec<RiskAnswer> =
            serde_json::from_str(r#"[0, 1, true, {"weight": 2, "question": "q4"}]"#).unwrap();

        assert_eq!(answers[0], RiskAnswer::Binary(0));
        assert_eq!(answers[1], RiskAnswer::Binary(1));
        assert_eq!(answers[2], RiskAnswer::Flag(true));
        assert_eq!(answers[3].weight(), 2);
    }

    /// Verifies the base score sums weighted answers
    #[test]
    fn test_base_score_with_weighted_answers() {
        let applicant = Applicant::builder()
            .age(30)
            .gender(Gender::Female)
            .marital_status(MaritalStatus::Single)
            .risk_answers([
                RiskAnswer::Binary(1),
                RiskAnswer::Flag(true),
                RiskAnswer::Weighted {
                    weight: -1,
                    question: None,
                },
            ])
            .build()
            .unwrap();

        assert_eq!(applicant.base_score(), 1);
    }

    /// Verifies extreme weights clamp at the integer bounds
    #[test]
    fn test_base_score_saturates() {
        let weighted = |weight: i32| RiskAnswer::Weighted {
            weight,
            question: None,
        };
        let build = |answers: Vec<RiskAnswer>| {
            Applicant::builder()
                .age(30)
                .gender(Gender::Male)
                .marital_status(MaritalStatus::Single)
                .risk_answers(answers)
                .build()
                .unwrap()
        };

        let high = build(vec![weighted(i32::MAX), weighted(1), RiskAnswer::Binary(0)]);
        assert_eq!(high.base_score(), i32::MAX);

        let low = build(vec![weighted(i32::MIN), weighted(-1), RiskAnswer::Binary(1)]);
        assert_eq!(low.base_score(), i32::MIN + 1);
    }
}

// ============================================================================
// VEHICLE AGE
// ============================================================================

mod vehicle_age {
    use super::*;

    #[test]
    fn test_years_since_production() {
        let vehicle = Vehicle::new(0, "Maker", "Model A", 2008);
        let reference = NaiveDate::from_ymd_opt(2018, 7, 1).unwrap();

        assert_eq!(vehicle.years_since_production(reference), 10);
    }
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The base score is the sum of the binary answers
        #[test]
        fn prop_base_score_sums_answers(answers in proptest::collection::vec(0u8..=1, 0..6)) {
            let expected: i32 = answers.iter().map(|a| i32::from(*a)).sum();
            let applicant = Applicant::builder()
                .age(40)
                .gender(Gender::Female)
                .marital_status(MaritalStatus::Single)
                .risk_answers(answers)
                .build()
                .unwrap();

            prop_assert_eq!(applicant.base_score(), expected);
        }

        /// A collection accepts its keys only when they are pairwise distinct
        #[test]
        fn prop_collection_rejects_repeated_keys(keys in proptest::collection::vec(-5i64..5, 0..8)) {
            let houses: Vec<House> = keys
                .iter()
                .map(|key| House::new(*key, 1000, HouseStatus::Owned))
                .collect();
            let distinct = keys.iter().collect::<std::collections::BTreeSet<_>>().len();

            let result = ItemCollection::from_items(houses);
            prop_assert_eq!(result.is_ok(), distinct == keys.len());
        }
    }
}
