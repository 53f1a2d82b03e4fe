//! The starter stitch.toml written by `stitch init`.

/// Render the default manifest for a new project.
pub fn starter(name: &str) -> String {
    format!(
        r#"[package]
name = "{}"

[declarations]
out_dir = "dist"
source_dir = "src"
extension = "d.ts"
entry = "index.d.ts"
references = ["../../type.d.ts"]

# Uncomment to let `stitch run` invoke the compiler before stitching.
# [build]
# command = "npx"
# args = ["ttsc"]
"#,
        name
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::Manifest;

    use super::*;

    #[test]
    fn test_starter_is_a_valid_manifest() {
        let manifest = Manifest::from_str(&starter("ts-core")).unwrap();
        assert_eq!(manifest.package.unwrap().name, "ts-core");
        assert_eq!(manifest.declarations.references, vec!["../../type.d.ts"]);
    }

    #[test]
    fn test_starter_content() {
        insta::assert_snapshot!(starter("ts-core"), @r##"
        [package]
        name = "ts-core"

        [declarations]
        out_dir = "dist"
        source_dir = "src"
        extension = "d.ts"
        entry = "index.d.ts"
        references = ["../../type.d.ts"]

        # Uncomment to let `stitch run` invoke the compiler before stitching.
        # [build]
        # command = "npx"
        # args = ["ttsc"]
        "##);
    }
}
