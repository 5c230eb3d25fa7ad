// ABOUTME: Record types for exercises, meals, and body-weight entries
// ABOUTME: Holds stored record shapes, request payloads, and the pure field validators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! Common data models for the three tracked record kinds.
//!
//! Each kind has two shapes: the stored record (with store-assigned `id` and
//! timestamps) and the request payload (caller-supplied fields only). Payload
//! fields all default, so absent JSON fields decode to zero values; identity
//! and timestamps are structurally absent from payloads and can never be
//! supplied by a caller.
//!
//! Validation is deliberately permissive beyond the numeric checks: empty
//! dates, names, and movement strings are accepted as-is.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored workout exercise entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Store-assigned identifier
    pub id: i64,
    /// Calendar date as text
    pub date: String,
    /// Movement name
    pub movement: String,
    /// Number of sets performed
    pub sets: i64,
    /// Repetitions per set
    pub reps: i64,
    /// Load in the user's preferred unit
    pub weight: f64,
    /// Free-form exercise type
    #[serde(rename = "type")]
    pub kind: String,
    /// Creation timestamp, assigned by the store
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, maintained by the store
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or fully replacing an exercise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExercisePayload {
    /// Calendar date as text
    pub date: String,
    /// Movement name
    pub movement: String,
    /// Number of sets performed
    pub sets: i64,
    /// Repetitions per set
    pub reps: i64,
    /// Load in the user's preferred unit
    pub weight: f64,
    /// Free-form exercise type
    #[serde(rename = "type")]
    pub kind: String,
}

impl ExercisePayload {
    /// Accept or reject the payload before any storage interaction.
    ///
    /// Acceptance requires `sets > 0`, `reps > 0`, and `weight >= 0`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when any numeric constraint fails.
    pub fn validate(&self) -> AppResult<()> {
        if self.sets <= 0 || self.reps <= 0 || self.weight < 0.0 {
            return Err(AppError::invalid_input("Invalid input values"));
        }
        Ok(())
    }
}

/// A stored meal entry with nutritional information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Store-assigned identifier
    pub id: i64,
    /// Calendar date as text
    pub date: String,
    /// Meal name
    pub name: String,
    /// Carbohydrates in grams
    pub carbs: i64,
    /// Protein in grams
    pub protein: i64,
    /// Fat in grams
    #[serde(rename = "fat")]
    pub fats: i64,
    /// Total calories
    pub calories: i64,
    /// Creation timestamp, assigned by the store
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, maintained by the store
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or fully replacing a meal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MealPayload {
    /// Calendar date as text
    pub date: String,
    /// Meal name
    pub name: String,
    /// Carbohydrates in grams
    pub carbs: i64,
    /// Protein in grams
    pub protein: i64,
    /// Fat in grams
    #[serde(rename = "fat")]
    pub fats: i64,
    /// Total calories
    pub calories: i64,
}

impl MealPayload {
    /// Accept or reject the payload before any storage interaction.
    ///
    /// Acceptance requires every nutritional field to be non-negative;
    /// all-zero meals are valid.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when any nutritional field is negative.
    pub fn validate(&self) -> AppResult<()> {
        if self.carbs < 0 || self.fats < 0 || self.protein < 0 || self.calories < 0 {
            return Err(AppError::invalid_input("Invalid input values"));
        }
        Ok(())
    }
}

/// A stored body-weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    /// Store-assigned identifier
    pub id: i64,
    /// Calendar date as text
    pub date: String,
    /// Body weight, strictly positive
    pub weight: f64,
    /// Creation timestamp, assigned by the store
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, maintained by the store
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or fully replacing a weight entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeightEntryPayload {
    /// Calendar date as text
    pub date: String,
    /// Body weight, strictly positive
    pub weight: f64,
}

impl WeightEntryPayload {
    /// Accept or reject the payload before any storage interaction.
    ///
    /// Unlike the other kinds, zero is rejected: a weight measurement must be
    /// strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the weight is zero or negative.
    pub fn validate(&self) -> AppResult<()> {
        if self.weight <= 0.0 {
            return Err(AppError::invalid_input("Invalid weight input value"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn exercise_payload(sets: i64, reps: i64, weight: f64) -> ExercisePayload {
        ExercisePayload {
            date: "2026-08-07".to_owned(),
            movement: "Bench press".to_owned(),
            sets,
            reps,
            weight,
            kind: "strength".to_owned(),
        }
    }

    #[test]
    fn test_exercise_validation_totality() {
        assert!(exercise_payload(3, 10, 60.0).validate().is_ok());
        assert!(exercise_payload(1, 1, 0.0).validate().is_ok());
        assert!(exercise_payload(0, 10, 60.0).validate().is_err());
        assert!(exercise_payload(3, 0, 60.0).validate().is_err());
        assert!(exercise_payload(-1, 10, 60.0).validate().is_err());
        assert!(exercise_payload(3, 10, -0.5).validate().is_err());
    }

    #[test]
    fn test_exercise_accepts_empty_strings() {
        let payload = ExercisePayload {
            sets: 3,
            reps: 10,
            ..ExercisePayload::default()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_meal_validation_totality() {
        let mut payload = MealPayload {
            date: "2026-08-07".to_owned(),
            name: "Lunch".to_owned(),
            carbs: 50,
            protein: 30,
            fats: 10,
            calories: 420,
        };
        assert!(payload.validate().is_ok());

        payload.carbs = -1;
        assert!(payload.validate().is_err());
        payload.carbs = 0;
        assert!(payload.validate().is_ok());

        payload.protein = -10;
        assert!(payload.validate().is_err());
        payload.protein = 0;
        payload.fats = -1;
        assert!(payload.validate().is_err());
        payload.fats = 0;
        payload.calories = -420;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_meal_all_zero_is_valid() {
        assert!(MealPayload::default().validate().is_ok());
    }

    #[test]
    fn test_weight_validation_is_strict() {
        let mut payload = WeightEntryPayload {
            date: "2026-08-07".to_owned(),
            weight: 80.5,
        };
        assert!(payload.validate().is_ok());

        payload.weight = 0.0;
        let error = payload.validate().unwrap_err();
        assert_eq!(error.message, "Invalid weight input value");

        payload.weight = -1.0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_meal_fat_field_uses_original_json_key() {
        let payload: MealPayload =
            serde_json::from_str(r#"{"name":"Dinner","fat":12}"#).unwrap();
        assert_eq!(payload.fats, 12);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("fat").is_some());
        assert!(json.get("fats").is_none());
    }

    #[test]
    fn test_payload_ignores_caller_supplied_identity() {
        // Unknown fields (including "id") are dropped during decoding.
        let payload: ExercisePayload =
            serde_json::from_str(r#"{"id":777,"sets":3,"reps":10,"movement":"Row"}"#).unwrap();
        assert_eq!(payload.sets, 3);
        assert_eq!(payload.movement, "Row");
    }

    #[test]
    fn test_absent_fields_decode_to_zero_values() {
        let payload: ExercisePayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, ExercisePayload::default());
        assert!(payload.validate().is_err());
    }
}
