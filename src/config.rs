use crate::display::{Color, DisplayOptions, Notation, NumberFormat, Palette};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked for next to the executable when no path is given
pub const DEFAULT_FILE_NAME: &str = "ckconv.toml";
/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "CKCONV_CONFIG";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub colors: ColorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub full_names: bool,

    #[serde(default)]
    pub quiet: bool,

    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default)]
    pub precision: Option<usize>,

    #[serde(default)]
    pub align_to: Option<usize>,

    #[serde(default)]
    pub notation: Notation,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            full_names: false,
            quiet: false,
            color: default_color(),
            precision: None,
            align_to: None,
            notation: Notation::Auto,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorConfig {
    #[serde(default = "default_input_color")]
    pub input: Color,

    #[serde(default = "default_result_color")]
    pub result: Color,

    #[serde(default)]
    pub unit: Color,

    #[serde(default = "default_header_color")]
    pub header: Color,

    #[serde(default = "default_accent_color")]
    pub accent: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            input: default_input_color(),
            result: default_result_color(),
            unit: Color::None,
            header: default_header_color(),
            accent: default_accent_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

fn default_input_color() -> Color {
    Color::Cyan
}

fn default_result_color() -> Color {
    Color::Green
}

fn default_header_color() -> Color {
    Color::BrightWhite
}

fn default_accent_color() -> Color {
    Color::BrightYellow
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the config named on the command line or in the environment, else
    /// the default file beside the executable if there is one
    pub fn discover(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config from command line");
            return Self::load_from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            debug!(path = %path.display(), "loading config from {}", CONFIG_ENV_VAR);
            return Self::load_from_file(path);
        }

        match default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config beside executable");
                Self::load_from_file(path)
            }
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::empty())
            }
        }
    }

    pub fn palette(&self) -> Palette {
        Palette {
            enabled: self.display.color,
            input: self.colors.input,
            result: self.colors.result,
            unit: self.colors.unit,
            header: self.colors.header,
            accent: self.colors.accent,
        }
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            quiet: self.display.quiet,
            full_names: self.display.full_names,
            align_to: self.display.align_to,
            number: NumberFormat::new(self.display.notation, self.display.precision),
            palette: self.palette(),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(DEFAULT_FILE_NAME))
}
