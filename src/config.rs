use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub default_grid_file: DefaultGridFileConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_size")]
    pub size: i32,
}

#[derive(Debug, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_discount")]
    pub discount: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_max_sweeps")]
    pub max_sweeps: usize,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_show_values")]
    pub show_values: bool,
    #[serde(default = "default_show_policy")]
    pub show_policy: bool,
    #[serde(default = "default_show_path")]
    pub show_path: bool,
}

#[derive(Debug, Deserialize)]
pub struct DefaultGridFileConfig {
    #[serde(default = "default_grid_file_path")]
    pub path: String,
}

// Default values
fn default_size() -> i32 { 5 }
fn default_discount() -> f64 { 0.9 }
fn default_threshold() -> f64 { 1e-4 }
fn default_max_sweeps() -> usize { 10_000 }
fn default_show_values() -> bool { true }
fn default_show_policy() -> bool { true }
fn default_show_path() -> bool { true }
fn default_grid_file_path() -> String { "grid.json".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            discount: default_discount(),
            threshold: default_threshold(),
            max_sweeps: default_max_sweeps(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_values: default_show_values(),
            show_policy: default_show_policy(),
            show_path: default_show_path(),
        }
    }
}

impl Default for DefaultGridFileConfig {
    fn default() -> Self {
        Self {
            path: default_grid_file_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            solver: SolverConfig::default(),
            output: OutputConfig::default(),
            default_grid_file: DefaultGridFileConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
