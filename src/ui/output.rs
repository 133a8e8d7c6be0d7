use lesswatch::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) -> String {
    let icon = Icon::Warning.render(supports_unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_line_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "debounse_ms".to_string(),
            file: PathBuf::from("styles/lesswatch.toml"),
            line: Some(2),
            suggestion: Some("debounce_ms".to_string()),
        }];
        assert_eq!(
            render_config_warnings(&warnings, false),
            "[WARN] Unknown config key 'debounse_ms' in styles/lesswatch.toml:2\n   Did you mean 'debounce_ms'?\n"
        );
    }

    #[test]
    fn renders_without_line() {
        let warnings = vec![ConfigWarning {
            key: "zzz".to_string(),
            file: PathBuf::from("config.toml"),
            line: None,
            suggestion: None,
        }];
        assert_eq!(
            render_config_warnings(&warnings, true),
            "⚠ Unknown config key 'zzz' in config.toml\n"
        );
    }
}
