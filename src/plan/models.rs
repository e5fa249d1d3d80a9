//! Practice plan data model
//!
//! Serde field names match the external plan JSON:
//! `{"Day 1": {"Poses": [{"Name": ..., "Duration": ..., "Side": ..., "Transition": ...}]}}`.
//! `Name` and `Duration` are required; a pose without them rejects the whole
//! plan at load time. `Side` and `Transition` are optional with explicit
//! defaults resolved here rather than checked dynamically downstream.

use crate::error::{PoseTimerError, Result, StringError};
use serde::Deserialize;

/// A named exercise position with a target hold duration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Pose {
    /// Display name of the pose
    #[serde(rename = "Name")]
    pub name: String,
    /// Hold duration in seconds
    #[serde(rename = "Duration")]
    pub duration: f64,
    /// Bilateral pose: expanded into Left and Right sub-phases
    #[serde(rename = "Side", default)]
    pub side: bool,
    /// Per-pose override of the transition duration leading into this pose
    #[serde(rename = "Transition", default)]
    pub transition: Option<f64>,
}

/// The ordered list of poses assigned to one practice day
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    /// Day label as it appears in the plan file (e.g. "Day 1")
    pub label: String,
    /// Poses in source order
    pub poses: Vec<Pose>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    #[serde(rename = "Poses")]
    poses: Vec<Pose>,
}

/// A full practice plan: days in plan-file order
#[derive(Debug, Clone, PartialEq)]
pub struct PracticePlan {
    days: Vec<DayPlan>,
}

impl PracticePlan {
    /// Parse a practice plan from JSON bytes.
    ///
    /// Day order and pose order are preserved from the source. Any pose
    /// missing `Name` or `Duration`, or carrying a non-positive duration,
    /// rejects the whole plan.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| PoseTimerError::PlanError(Box::new(e)))?;

        if raw.is_empty() {
            return Err(PoseTimerError::PlanError(StringError::new(
                "plan file contains no days",
            )));
        }

        let mut days = Vec::with_capacity(raw.len());
        for (label, value) in raw {
            let day: RawDay = serde_json::from_value(value).map_err(|e| {
                PoseTimerError::PlanError(StringError::new(format!("{label}: {e}")))
            })?;

            for pose in &day.poses {
                if pose.name.trim().is_empty() {
                    return Err(PoseTimerError::PlanError(StringError::new(format!(
                        "{label}: pose with empty name"
                    ))));
                }
                if !pose.duration.is_finite() || pose.duration <= 0.0 {
                    return Err(PoseTimerError::PlanError(StringError::new(format!(
                        "{label}: pose {:?} has invalid duration {}",
                        pose.name, pose.duration
                    ))));
                }
                if let Some(t) = pose.transition
                    && (!t.is_finite() || t < 0.0)
                {
                    return Err(PoseTimerError::PlanError(StringError::new(format!(
                        "{label}: pose {:?} has invalid transition override {t}",
                        pose.name
                    ))));
                }
            }

            days.push(DayPlan {
                label,
                poses: day.poses,
            });
        }

        Ok(Self { days })
    }

    /// Select a day by index. Out-of-range selections fall back to the
    /// first day.
    pub fn day(&self, index: usize) -> &DayPlan {
        self.days.get(index).unwrap_or_else(|| {
            tracing::warn!("Day index {index} out of range, defaulting to first day");
            &self.days[0]
        })
    }

    /// Day labels in plan-file order, for the day selector
    pub fn day_labels(&self) -> Vec<String> {
        self.days.iter().map(|d| d.label.clone()).collect()
    }

    /// Number of days in the plan
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the plan has no days
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"{
        "Day 1": {"Poses": [
            {"Name": "Mountain", "Duration": 30},
            {"Name": "Warrior", "Duration": 45, "Side": true},
            {"Name": "Child", "Duration": 60, "Transition": 5}
        ]},
        "Day 2": {"Poses": [
            {"Name": "Tree", "Duration": 20, "Side": true, "Transition": 12}
        ]}
    }"#;

    #[test]
    fn test_parse_preserves_order() {
        let plan = PracticePlan::from_json(PLAN).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.day_labels(), vec!["Day 1", "Day 2"]);

        let day1 = plan.day(0);
        assert_eq!(day1.poses.len(), 3);
        assert_eq!(day1.poses[0].name, "Mountain");
        assert_eq!(day1.poses[1].name, "Warrior");
        assert_eq!(day1.poses[2].name, "Child");
    }

    #[test]
    fn test_optional_fields_default() {
        let plan = PracticePlan::from_json(PLAN).unwrap();
        let mountain = &plan.day(0).poses[0];
        assert!(!mountain.side);
        assert_eq!(mountain.transition, None);

        let warrior = &plan.day(0).poses[1];
        assert!(warrior.side);

        let child = &plan.day(0).poses[2];
        assert_eq!(child.transition, Some(5.0));
    }

    #[test]
    fn test_missing_duration_is_fatal() {
        let result =
            PracticePlan::from_json(r#"{"Day 1": {"Poses": [{"Name": "Mountain"}]}}"#);
        assert!(matches!(result, Err(PoseTimerError::PlanError(_))));
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let result = PracticePlan::from_json(r#"{"Day 1": {"Poses": [{"Duration": 30}]}}"#);
        assert!(matches!(result, Err(PoseTimerError::PlanError(_))));
    }

    #[test]
    fn test_non_positive_duration_is_fatal() {
        let result = PracticePlan::from_json(
            r#"{"Day 1": {"Poses": [{"Name": "Mountain", "Duration": 0}]}}"#,
        );
        assert!(matches!(result, Err(PoseTimerError::PlanError(_))));
    }

    #[test]
    fn test_empty_plan_is_fatal() {
        assert!(matches!(
            PracticePlan::from_json("{}"),
            Err(PoseTimerError::PlanError(_))
        ));
    }

    #[test]
    fn test_out_of_range_day_defaults_to_first() {
        let plan = PracticePlan::from_json(PLAN).unwrap();
        assert_eq!(plan.day(99).label, "Day 1");
        assert_eq!(plan.day(1).label, "Day 2");
    }

    #[test]
    fn test_day_labels_not_lexicographic() {
        // "Day 10" sorts before "Day 2" lexicographically; file order must win
        let json = r#"{
            "Day 10": {"Poses": [{"Name": "A", "Duration": 1}]},
            "Day 2": {"Poses": [{"Name": "B", "Duration": 1}]}
        }"#;
        let plan = PracticePlan::from_json(json).unwrap();
        assert_eq!(plan.day_labels(), vec!["Day 10", "Day 2"]);
    }
}
