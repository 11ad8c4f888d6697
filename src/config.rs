use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Colors used by the preview pane.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Discord's own ANSI palette (RGB)
    #[default]
    Discord,
    /// The terminal's 16-color palette
    Terminal,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub hide_markdown: bool,
    pub focus_preview: bool,
    pub palette: Option<PaletteMode>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            hide_markdown: self.hide_markdown || other.hide_markdown,
            focus_preview: self.focus_preview || other.focus_preview,
            palette: other.palette.or(self.palette),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("discolor").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("discolor")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("discolor").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("discolor")
                .join("config");
        }
    }

    PathBuf::from(".discolorrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".discolorrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# discolor defaults (saved with --save)".to_string());
    if flags.hide_markdown {
        lines.push("--hide-markdown".to_string());
    }
    if flags.focus_preview {
        lines.push("--focus-preview".to_string());
    }
    if let Some(palette) = flags.palette {
        let palette_str = match palette {
            PaletteMode::Discord => "discord",
            PaletteMode::Terminal => "terminal",
        };
        lines.push(format!("--palette {palette_str}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the persistable flags out of raw argument tokens.
///
/// Unknown tokens (text, `--tag`, `--print`, ...) are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--hide-markdown" {
            flags.hide_markdown = true;
        } else if token == "--focus-preview" {
            flags.focus_preview = true;
        } else if token == "--palette" {
            if let Some(next) = tokens.get(i + 1) {
                flags.palette = parse_palette(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--palette=") {
            flags.palette = parse_palette(value);
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_palette(s: &str) -> Option<PaletteMode> {
    match s {
        "discord" => Some(PaletteMode::Discord),
        "terminal" => Some(PaletteMode::Terminal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "discolor".to_string(),
            "--hide-markdown".to_string(),
            "--focus-preview".to_string(),
            "--palette".to_string(),
            "terminal".to_string(),
            "--log-file=discolor.log".to_string(),
            "Hello".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.hide_markdown);
        assert!(flags.focus_preview);
        assert_eq!(flags.palette, Some(PaletteMode::Terminal));
        assert_eq!(flags.log_file, Some(PathBuf::from("discolor.log")));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_unknown_palette() {
        let args = vec!["--palette=sepia".to_string()];
        assert_eq!(parse_flag_tokens(&args).palette, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            hide_markdown: true,
            palette: Some(PaletteMode::Terminal),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            focus_preview: true,
            palette: Some(PaletteMode::Discord),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.hide_markdown);
        assert!(merged.focus_preview);
        assert_eq!(merged.palette, Some(PaletteMode::Discord));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".discolorrc");
        let flags = ConfigFlags {
            hide_markdown: true,
            focus_preview: true,
            palette: Some(PaletteMode::Terminal),
            log_file: Some(PathBuf::from("discolor.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_config_loads_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
