use crate::errors::{BenchError, BenchResult};
use crate::io::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "./data.csv";
pub const DEFAULT_ITERATIONS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub input: PathBuf,
    pub iterations: usize,
    pub baseline: Candidate,
    pub candidates: Vec<Candidate>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            iterations: DEFAULT_ITERATIONS,
            baseline: Candidate::Manual,
            candidates: Candidate::ALL.to_vec(),
        }
    }
}

/// Values given on the command line. Anything set here wins over the YAML file.
#[derive(Debug, Clone, Default)]
pub struct BenchOverrides {
    pub input: Option<PathBuf>,
    pub iterations: Option<usize>,
}

impl BenchConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> BenchResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn apply_overrides(mut self, overrides: BenchOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(iterations) = overrides.iterations {
            self.iterations = iterations;
        }
        self
    }

    /// Every candidate must run at least once and the baseline must be one of
    /// them, otherwise there is nothing to compare against.
    pub fn validate(&self) -> BenchResult<()> {
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.candidates.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one candidate is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for candidate in &self.candidates {
            if !seen.insert(candidate) {
                return Err(BenchError::InvalidConfig(format!(
                    "candidate `{}` is listed more than once",
                    candidate
                )));
            }
        }

        if !self.candidates.contains(&self.baseline) {
            return Err(BenchError::InvalidConfig(format!(
                "baseline `{}` is not among the candidates",
                self.baseline
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.input, PathBuf::from("./data.csv"));
        assert_eq!(config.iterations, 100);
        assert_eq!(config.baseline, Candidate::Manual);
        assert_eq!(
            config.candidates,
            vec![Candidate::Manual, Candidate::Eager, Candidate::Lazy]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_full() {
        let yaml = r#"
input: "bench_data.csv"
iterations: 25
baseline: eager
candidates: [lazy, eager]
"#;
        let config = BenchConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.input, PathBuf::from("bench_data.csv"));
        assert_eq!(config.iterations, 25);
        assert_eq!(config.baseline, Candidate::Eager);
        assert_eq!(config.candidates, vec![Candidate::Lazy, Candidate::Eager]);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let yaml = r#"
iterations: 5
"#;
        let config = BenchConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.iterations, 5);
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.candidates.len(), 3);
    }

    #[test]
    fn test_deserialize_unknown_candidate() {
        let yaml = r#"
candidates: [manual, pandas]
"#;
        assert!(matches!(
            BenchConfig::from_yaml(yaml),
            Err(BenchError::ConfigError(_))
        ));
    }

    #[test]
    fn test_deserialize_unknown_field() {
        let yaml = r#"
iteration: 5
"#;
        assert!(BenchConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = BenchConfig::from_yaml("input: a.csv\niterations: 10\n")
            .unwrap()
            .apply_overrides(BenchOverrides {
                input: Some(PathBuf::from("b.csv")),
                iterations: None,
            });
        assert_eq!(config.input, PathBuf::from("b.csv"));
        assert_eq!(config.iterations, 10);

        let config = config.apply_overrides(BenchOverrides {
            input: None,
            iterations: Some(3),
        });
        assert_eq!(config.input, PathBuf::from("b.csv"));
        assert_eq!(config.iterations, 3);
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = BenchConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_empty_candidates() {
        let config = BenchConfig {
            candidates: vec![],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_duplicate_candidates() {
        let config = BenchConfig {
            candidates: vec![Candidate::Manual, Candidate::Lazy, Candidate::Manual],
            ..Default::default()
        };
        match config.validate() {
            Err(BenchError::InvalidConfig(msg)) => assert!(msg.contains("read_csv_manual")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_baseline_not_a_candidate() {
        let config = BenchConfig {
            baseline: Candidate::Manual,
            candidates: vec![Candidate::Eager, Candidate::Lazy],
            ..Default::default()
        };
        match config.validate() {
            Err(BenchError::InvalidConfig(msg)) => assert!(msg.contains("baseline")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
