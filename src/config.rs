use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level nearfit configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearfitConfig {
    /// Distance and threading settings shared by `classify` and `regress`.
    #[serde(default)]
    pub knn: KnnToml,

    /// Classification settings.
    #[serde(default)]
    pub classify: ClassifyToml,

    /// Regression settings.
    #[serde(default)]
    pub regress: RegressToml,

    /// Line-fit demonstration settings.
    #[serde(default)]
    pub mle: MleToml,
}

impl NearfitConfig {
    /// Reads a TOML file, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    #[serde(default = "default_metric")]
    pub metric: String,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for KnnToml {
    fn default() -> Self {
        Self {
            metric: default_metric(),
            parallel: true,
        }
    }
}

fn default_metric() -> String {
    "euclidean".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifyToml {
    pub train: Option<PathBuf>,
    pub test: Option<PathBuf>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default = "default_classify_k")]
    pub k: usize,
    #[serde(default = "default_queries")]
    pub queries: Vec<Vec<f64>>,
}

impl Default for ClassifyToml {
    fn default() -> Self {
        Self {
            train: None,
            test: None,
            features: None,
            target: None,
            k: default_classify_k(),
            queries: default_queries(),
        }
    }
}

fn default_classify_k() -> usize {
    5
}
fn default_queries() -> Vec<Vec<f64>> {
    vec![vec![2.78, 1.47], vec![2.55, 2.36]]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegressToml {
    pub train: Option<PathBuf>,
    pub test: Option<PathBuf>,
    #[serde(default = "default_regress_features")]
    pub features: Vec<String>,
    #[serde(default = "default_regress_target")]
    pub target: String,
    #[serde(default = "default_regress_k")]
    pub k: usize,
}

impl Default for RegressToml {
    fn default() -> Self {
        Self {
            train: None,
            test: None,
            features: default_regress_features(),
            target: default_regress_target(),
            k: default_regress_k(),
        }
    }
}

fn default_regress_features() -> Vec<String> {
    vec!["age".to_string()]
}
fn default_regress_target() -> String {
    "bmd".to_string()
}
fn default_regress_k() -> usize {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MleToml {
    #[serde(default = "default_n_points")]
    pub n: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for MleToml {
    fn default() -> Self {
        Self {
            n: default_n_points(),
            seed: default_seed(),
        }
    }
}

fn default_n_points() -> usize {
    100
}
fn default_seed() -> u64 {
    1234
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: NearfitConfig = toml::from_str("").unwrap();
        assert_eq!(config.knn.metric, "euclidean");
        assert!(config.knn.parallel);
        assert_eq!(config.classify.k, 5);
        assert_eq!(config.classify.queries, default_queries());
        assert_eq!(config.regress.features, vec!["age"]);
        assert_eq!(config.regress.target, "bmd");
        assert_eq!(config.regress.k, 3);
        assert_eq!(config.mle.n, 100);
        assert_eq!(config.mle.seed, 1234);
    }

    #[test]
    fn test_full_config() {
        let config: NearfitConfig = toml::from_str(
            r#"
            [knn]
            metric = "legacy-sqrt-abs-sum"
            parallel = false

            [classify]
            train = "train.csv"
            k = 7
            queries = [[1.0, 2.0]]

            [regress]
            train = "bmd.csv"
            features = ["age", "weight"]

            [mle]
            n = 50
            seed = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.classify.k, 7);
        assert_eq!(config.knn.metric, "legacy-sqrt-abs-sum");
        assert!(!config.knn.parallel);
        assert_eq!(config.classify.train, Some(PathBuf::from("train.csv")));
        assert_eq!(config.classify.queries, vec![vec![1.0, 2.0]]);
        assert_eq!(config.regress.features, vec!["age", "weight"]);
        assert_eq!(config.regress.target, "bmd");
        assert_eq!(config.mle.n, 50);
        assert_eq!(config.mle.seed, 9);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<NearfitConfig, _> = toml::from_str("[knn]\nneighbours = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_none_is_default() {
        let config = NearfitConfig::load(None).unwrap();
        assert_eq!(config.mle.seed, 1234);
    }

    #[test]
    fn test_load_missing_file() {
        let err = NearfitConfig::load(Some(Path::new("/nonexistent/nearfit.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
