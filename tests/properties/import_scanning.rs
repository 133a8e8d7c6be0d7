//! Property tests for import directive scanning.

use std::path::Path;

use proptest::prelude::*;

use lesswatch::domain::services::scan_imports;

fn reference() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Scanning never panics on arbitrary input.
    #[test]
    fn property_scan_never_panics(content in "(?s).{0,512}") {
        let _ = scan_imports(&content, Path::new("/styles/main.less"), "less");
    }

    /// PROPERTY: Every well-formed directive yields one resolved path with
    /// the source extension, in order.
    #[test]
    fn property_each_directive_resolves(refs in proptest::collection::vec(reference(), 0..6)) {
        let content: String = refs
            .iter()
            .map(|r| format!("@import \"{r}\";\n.rule {{ color: red; }}\n"))
            .collect();

        let imports = scan_imports(&content, Path::new("/styles/main.less"), "less");

        prop_assert_eq!(imports.len(), refs.len());
        for (import, r) in imports.iter().zip(&refs) {
            let expected = format!("/styles/{r}.less");
            prop_assert_eq!(import, Path::new(&expected));
        }
    }
}
