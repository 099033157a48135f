//! Runtime configuration.
//!
//! Defaults match the registries' historic behavior. [`SystemConfig::from_env`]
//! lets a deployment override them:
//!
//! | Variable | Field | Example |
//! |---|---|---|
//! | `REGISTRY_HOSPITAL_CAPACITY` | [`HospitalConfig::max_capacity`] | `500` (unset: unlimited) |
//! | `REGISTRY_MIN_GPA` | [`RegistrationConfig::min_gpa`] | `2.0` (within `0.0..=4.0`) |
//! | `REGISTRY_UNKNOWN_COURSES` | [`RegistrationConfig::unknown_course_policy`] | `permit` / `reject` |
//! | `REGISTRY_CHANNEL_CAPACITY` | [`SystemConfig::channel_capacity`] | `32` |
//!
//! Log verbosity is not configured here; it follows `RUST_LOG`
//! (see [`setup_tracing`](crate::lifecycle::setup_tracing)).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const ENV_HOSPITAL_CAPACITY: &str = "REGISTRY_HOSPITAL_CAPACITY";
pub const ENV_MIN_GPA: &str = "REGISTRY_MIN_GPA";
pub const ENV_UNKNOWN_COURSES: &str = "REGISTRY_UNKNOWN_COURSES";
pub const ENV_CHANNEL_CAPACITY: &str = "REGISTRY_CHANNEL_CAPACITY";

/// Accepted GPA floors. NaN and infinities fall outside it.
const MIN_GPA_RANGE: std::ops::RangeInclusive<f64> = 0.0..=4.0;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalConfig {
    /// Maximum number of distinct patients the hospital holds. `None` means
    /// the registry grows without limit.
    pub max_capacity: Option<usize>,
}

/// What to do with a course code the prerequisite table has never heard of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCoursePolicy {
    /// Treat it as having no prerequisites.
    #[default]
    Permit,
    /// Refuse the enrollment.
    Reject,
}

impl FromStr for UnknownCoursePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permit" => Ok(UnknownCoursePolicy::Permit),
            "reject" => Ok(UnknownCoursePolicy::Reject),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Minimum cumulative GPA required to enroll in any course.
    pub min_gpa: f64,
    pub unknown_course_policy: UnknownCoursePolicy,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_gpa: 2.0,
            unknown_course_policy: UnknownCoursePolicy::Permit,
        }
    }
}

/// Configuration for the whole [`RegistrySystem`](crate::lifecycle::RegistrySystem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub hospital: HospitalConfig,
    pub registration: RegistrationConfig,
    /// How many requests each registry actor queues before senders wait.
    pub channel_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            hospital: HospitalConfig::default(),
            registration: RegistrationConfig::default(),
            channel_capacity: 32,
        }
    }
}

impl SystemConfig {
    /// Defaults overridden by any `REGISTRY_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(capacity) = parse_var::<usize>(&lookup, ENV_HOSPITAL_CAPACITY)? {
            if capacity == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_HOSPITAL_CAPACITY,
                    value: capacity.to_string(),
                });
            }
            config.hospital.max_capacity = Some(capacity);
        }
        if let Some(min_gpa) = parse_var::<f64>(&lookup, ENV_MIN_GPA)? {
            if !MIN_GPA_RANGE.contains(&min_gpa) {
                return Err(ConfigError::InvalidValue {
                    key: ENV_MIN_GPA,
                    value: min_gpa.to_string(),
                });
            }
            config.registration.min_gpa = min_gpa;
        }
        if let Some(policy) = parse_var(&lookup, ENV_UNKNOWN_COURSES)? {
            config.registration.unknown_course_policy = policy;
        }
        if let Some(capacity) = parse_var::<usize>(&lookup, ENV_CHANNEL_CAPACITY)? {
            if capacity == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_CHANNEL_CAPACITY,
                    value: capacity.to_string(),
                });
            }
            config.channel_capacity = capacity;
        }
        Ok(config)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SystemConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.hospital.max_capacity, None);
        assert_eq!(config.registration.min_gpa, 2.0);
        assert_eq!(config.registration.unknown_course_policy, UnknownCoursePolicy::Permit);
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn test_overrides() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            (ENV_HOSPITAL_CAPACITY, "2"),
            (ENV_MIN_GPA, " 2.5 "),
            (ENV_UNKNOWN_COURSES, "Reject"),
            (ENV_CHANNEL_CAPACITY, "8"),
        ]))
        .unwrap();
        assert_eq!(config.hospital.max_capacity, Some(2));
        assert_eq!(config.registration.min_gpa, 2.5);
        assert_eq!(config.registration.unknown_course_policy, UnknownCoursePolicy::Reject);
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn test_invalid_values() {
        let err = SystemConfig::from_lookup(lookup_from(&[(ENV_MIN_GPA, "high")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: ENV_MIN_GPA, value: "high".to_string() }
        );

        let err = SystemConfig::from_lookup(lookup_from(&[(ENV_UNKNOWN_COURSES, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(ENV_UNKNOWN_COURSES));

        assert!(SystemConfig::from_lookup(lookup_from(&[(ENV_CHANNEL_CAPACITY, "0")])).is_err());
        assert_eq!(
            SystemConfig::from_lookup(lookup_from(&[(ENV_HOSPITAL_CAPACITY, "0")])).unwrap_err(),
            ConfigError::InvalidValue { key: ENV_HOSPITAL_CAPACITY, value: "0".to_string() }
        );
    }

    #[test]
    fn test_gpa_floor_must_be_a_real_grade() {
        for floor in ["NaN", "inf", "-inf", "-0.5", "4.5"] {
            let err = SystemConfig::from_lookup(lookup_from(&[(ENV_MIN_GPA, floor)])).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { key: ENV_MIN_GPA, .. }),
                "{floor} accepted as a GPA floor"
            );
        }
        for floor in ["0", "4.0"] {
            assert!(SystemConfig::from_lookup(lookup_from(&[(ENV_MIN_GPA, floor)])).is_ok());
        }
    }

    #[test]
    fn test_deserialize_partial_document() {
        let config: SystemConfig =
            serde_json::from_str(r#"{"registration":{"unknown_course_policy":"reject"}}"#).unwrap();
        assert_eq!(config.registration.unknown_course_policy, UnknownCoursePolicy::Reject);
        assert_eq!(config.registration.min_gpa, 2.0);
        assert_eq!(config.hospital.max_capacity, None);
    }
}
