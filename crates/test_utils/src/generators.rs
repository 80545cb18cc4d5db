//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating applicants that satisfy the
//! applicant model's invariants (unique item keys, 0/1 answers). Item keys
//! are generated in arbitrary order.

use domain_party::{
    Applicant, Gender, House, HouseStatus, MaritalStatus, RiskAnswer, Vehicle,
};
use proptest::prelude::*;

/// Strategy for generating Gender values
pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Strategy for generating MaritalStatus values
pub fn marital_status_strategy() -> impl Strategy<Value = MaritalStatus> {
    prop_oneof![Just(MaritalStatus::Single), Just(MaritalStatus::Married)]
}

/// Strategy for generating three binary risk answers
pub fn risk_answers_strategy() -> impl Strategy<Value = Vec<RiskAnswer>> {
    proptest::collection::vec((0u8..=1u8).prop_map(RiskAnswer::Binary), 3..=3)
}

/// Strategy for generating distinct item keys in arbitrary order
pub fn item_keys_strategy() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::btree_set(-50i64..50i64, 0..4)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Strategy for generating houses with unique keys
pub fn houses_strategy() -> impl Strategy<Value = Vec<House>> {
    item_keys_strategy()
        .prop_flat_map(|keys| {
            let count = keys.len();
            (Just(keys), proptest::collection::vec(any::<bool>(), count))
        })
        .prop_map(|(keys, mortgaged)| {
            keys.into_iter()
                .zip(mortgaged)
                .map(|(key, is_mortgaged)| {
                    let status = if is_mortgaged {
                        HouseStatus::Mortgaged
                    } else {
                        HouseStatus::Owned
                    };
                    House::new(key, 10_000 + key.unsigned_abs() as u32, status)
                })
                .collect()
        })
}

/// Strategy for generating vehicles with unique keys
pub fn vehicles_strategy() -> impl Strategy<Value = Vec<Vehicle>> {
    item_keys_strategy()
        .prop_flat_map(|keys| {
            let count = keys.len();
            (Just(keys), proptest::collection::vec(1990i32..2030i32, count))
        })
        .prop_map(|(keys, years)| {
            keys.into_iter()
                .zip(years)
                .map(|(key, year)| Vehicle::new(key, "Maker", "Model", year))
                .collect()
        })
}

/// Strategy for generating valid applicants
pub fn applicant_strategy() -> impl Strategy<Value = Applicant> {
    (
        16u32..90u32,
        gender_strategy(),
        marital_status_strategy(),
        0u32..5u32,
        prop_oneof![Just(0u64), 1u64..500_000u64],
        risk_answers_strategy(),
        houses_strategy(),
        vehicles_strategy(),
    )
        .prop_map(
            |(age, gender, marital_status, dependents, income, answers, houses, vehicles)| {
                Applicant::builder()
                    .age(age)
                    .gender(gender)
                    .marital_status(marital_status)
                    .dependents(dependents)
                    .income(income)
                    .risk_answers(answers)
                    .houses(houses)
                    .vehicles(vehicles)
                    .build()
                    .expect("generated applicant is valid")
            },
        )
}
