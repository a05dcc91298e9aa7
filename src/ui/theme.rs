use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::app::config::AppConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
}

impl Default for Theme {
    // Catppuccin Mocha
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
            cyan: Color::Rgb(148, 226, 213),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn get_theme_path() -> PathBuf {
    AppConfig::get_config_dir().join("theme.toml")
}

pub fn load_current_theme() -> Theme {
    load_theme_from(&get_theme_path())
}

pub fn load_theme_from(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => parse_theme(&content).unwrap_or_else(|| {
            warn!(path = %path.display(), "unrecognised theme file, using the default palette");
            Theme::default()
        }),
        Err(_) if !path.exists() => {
            write_default(path);
            Theme::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable theme file");
            Theme::default()
        }
    }
}

/// Accepts a `[theme]` table or the bare color keys.
fn parse_theme(content: &str) -> Option<Theme> {
    toml::from_str::<ThemeFile>(content)
        .map(|file| file.theme)
        .or_else(|_| toml::from_str::<Theme>(content))
        .ok()
}

fn write_default(path: &Path) {
    let file = ThemeFile {
        theme: Theme::default(),
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(text) = toml::to_string_pretty(&file) {
        let _ = fs::write(path, text);
    }
}
