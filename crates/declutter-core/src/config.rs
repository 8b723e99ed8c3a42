/// Runtime configuration.
///
/// Every field has a compiled-in default, so running without a config file
/// sorts `./clutter` and checks the built-in factorization table. A JSON file
/// named by `DECLUTTER_CONFIG` overrides any subset of the fields.
use crate::error::{DeclutterError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the path of an optional JSON config file.
pub const CONFIG_ENV: &str = "DECLUTTER_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    /// Folder whose contents are sorted into category sub-folders.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// I/O worker count for listing and moving; `0` means one per core.
    #[serde(default)]
    pub workers: usize,
}

fn default_root() -> PathBuf {
    PathBuf::from("clutter")
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            workers: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorConfig {
    #[serde(default = "default_numbers")]
    pub numbers: Vec<u64>,
    /// Expected divisor list for each entry of `numbers`, by position.
    #[serde(default = "default_expected")]
    pub expected: Vec<Vec<u64>>,
    /// Runs to perform, in order. Each is `"linear"` or `"parallel"`.
    #[serde(default = "default_modes")]
    pub modes: Vec<String>,
    /// Worker pool size for parallel mode; `0` means one per core.
    #[serde(default)]
    pub workers: usize,
}

fn default_numbers() -> Vec<u64> {
    vec![128, 255, 99_999, 10_651_060, 93_003_032, 99_566_294]
}

fn default_expected() -> Vec<Vec<u64>> {
    vec![
        vec![1, 2, 4, 8, 16, 32, 64, 128],
        vec![1, 3, 5, 15, 17, 51, 85, 255],
        vec![1, 3, 9, 41, 123, 271, 369, 813, 2439, 11111, 33333, 99999],
        vec![
            1, 2, 4, 5, 7, 10, 14, 20, 28, 35, 70, 140, 76079, 152158, 304316, 380395, 532553,
            760790, 1065106, 1521580, 2130212, 2662765, 5325530, 10651060,
        ],
        vec![
            1, 2, 4, 8, 157, 314, 628, 1256, 74047, 148094, 296188, 592376, 11625379, 23250758,
            46501516, 93003032,
        ],
        vec![1, 2, 1993, 3986, 24979, 49958, 49783147, 99566294],
    ]
}

fn default_modes() -> Vec<String> {
    vec!["linear".to_string(), "parallel".to_string()]
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            expected: default_expected(),
            modes: default_modes(),
            workers: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub sort: SortConfig,
    #[serde(default)]
    pub factor: FactorConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            sort: SortConfig::default(),
            factor: FactorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the file named by [`CONFIG_ENV`], or defaults when unset.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DeclutterError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| DeclutterError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolve a configured worker count, where `0` means one per core.
pub fn resolve_workers(configured: usize) -> usize {
    if configured == 0 {
        num_cpus::get().max(1)
    } else {
        configured
    }
}
