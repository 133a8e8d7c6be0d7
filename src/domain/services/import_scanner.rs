//! Import directive scanning
//!
//! Finds `@import "path"` / `@import 'path'` directives and resolves them to
//! absolute paths next to the importing file. Targets are not checked for
//! existence.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::value_objects::normalize_path;

static IMPORT_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"@import\s+['"](.+?)['"]"#).expect("import directive pattern is valid")
});

/// Resolve every import directive in `content`, in source order.
///
/// `file` is the absolute path of the importing stylesheet. Duplicate
/// directives produce duplicate entries; the dependency graph suppresses
/// them on registration.
pub fn scan_imports(content: &str, file: &Path, extension: &str) -> Vec<PathBuf> {
    let dir = file.parent().unwrap_or_else(|| Path::new(""));
    IMPORT_DIRECTIVE
        .captures_iter(content)
        .map(|caps| resolve_import(dir, &caps[1], extension))
        .collect()
}

/// Resolve a single import reference relative to `dir`, appending
/// `.{extension}` when the reference does not already end in it.
pub fn resolve_import(dir: &Path, reference: &str, extension: &str) -> PathBuf {
    let suffix = format!(".{extension}");
    let target = if reference.ends_with(&suffix) {
        reference.to_string()
    } else {
        format!("{reference}{suffix}")
    };
    normalize_path(&dir.join(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "/project/styles/theme.less";

    fn scan(content: &str) -> Vec<PathBuf> {
        scan_imports(content, Path::new(FILE), "less")
    }

    #[test]
    fn no_directives_yields_nothing() {
        assert!(scan(".a { color: red; }").is_empty());
    }

    #[test]
    fn double_quoted_import_gets_extension() {
        assert_eq!(
            scan(r#"@import "base";"#),
            vec![PathBuf::from("/project/styles/base.less")]
        );
    }

    #[test]
    fn single_quoted_import_with_extension_kept() {
        assert_eq!(
            scan("@import 'base.less';"),
            vec![PathBuf::from("/project/styles/base.less")]
        );
    }

    #[test]
    fn multiple_directives_in_order() {
        let content = "@import \"vars\";\n@import 'mixins/buttons';\n.x { }\n@import \"../shared/reset.less\";";
        assert_eq!(
            scan(content),
            vec![
                PathBuf::from("/project/styles/vars.less"),
                PathBuf::from("/project/styles/mixins/buttons.less"),
                PathBuf::from("/project/shared/reset.less"),
            ]
        );
    }

    #[test]
    fn other_extensions_still_get_source_suffix() {
        assert_eq!(
            scan(r#"@import "legacy.css";"#),
            vec![PathBuf::from("/project/styles/legacy.css.less")]
        );
    }

    #[test]
    fn import_without_whitespace_is_ignored() {
        assert!(scan(r#"@import"base";"#).is_empty());
    }

    #[test]
    fn import_options_block_is_not_matched() {
        assert!(scan(r#"@import (reference) "base";"#).is_empty());
    }

    #[test]
    fn directive_does_not_span_lines() {
        assert!(scan("@import \"base\n\";").is_empty());
    }

    #[test]
    fn custom_extension_is_used() {
        assert_eq!(
            scan_imports(
                r#"@import "base";"#,
                Path::new("/p/main.scss"),
                "scss"
            ),
            vec![PathBuf::from("/p/base.scss")]
        );
    }
}
