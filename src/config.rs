use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

/// Inclusive bounds a candidate score must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self { min: 0, max: 100 }
    }
}

static SCORE_BOUNDS: OnceLock<ScoreBounds> = OnceLock::new();

impl ScoreBounds {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();
        let bounds = Self {
            min: get_env_parse("CANDIDATE_SCORE_MIN")?.unwrap_or(defaults.min),
            max: get_env_parse("CANDIDATE_SCORE_MAX")?.unwrap_or(defaults.max),
        };
        bounds.check()?;
        Ok(bounds)
    }

    pub fn contains(&self, score: i64) -> bool {
        (self.min..=self.max).contains(&score)
    }

    fn check(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::Config(format!(
                "CANDIDATE_SCORE_MIN ({}) exceeds CANDIDATE_SCORE_MAX ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

fn get_env_parse<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

pub fn init_bounds() -> Result<()> {
    let bounds = ScoreBounds::from_env()?;
    SCORE_BOUNDS
        .set(bounds)
        .map_err(|_| Error::Config("Score bounds have already been initialized".to_string()))?;
    Ok(())
}

/// Falls back to the default [0, 100] when [`init_bounds`] was never called.
pub fn score_bounds() -> ScoreBounds {
    *SCORE_BOUNDS.get_or_init(ScoreBounds::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_inclusive() {
        let bounds = ScoreBounds::default();
        assert!(bounds.contains(0));
        assert!(bounds.contains(100));
        assert!(!bounds.contains(-1));
        assert!(!bounds.contains(101));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let bounds = ScoreBounds { min: 50, max: 10 };
        assert!(matches!(bounds.check(), Err(Error::Config(_))));
    }

    #[test]
    fn env_overrides_and_bad_values() {
        env::set_var("CANDIDATE_SCORE_MIN", "10");
        env::set_var("CANDIDATE_SCORE_MAX", "90");
        let bounds = ScoreBounds::from_env().expect("bounds from env");
        assert_eq!(bounds, ScoreBounds { min: 10, max: 90 });

        env::set_var("CANDIDATE_SCORE_MAX", "not-a-number");
        assert!(matches!(ScoreBounds::from_env(), Err(Error::Config(_))));

        env::remove_var("CANDIDATE_SCORE_MIN");
        env::remove_var("CANDIDATE_SCORE_MAX");
    }
}
