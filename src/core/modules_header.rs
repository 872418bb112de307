//! `modules_enabled.gen.h`: one `MODULE_<NAME>_ENABLED` macro per enabled
//! module plus the C++-only declaration of `is_module_enabled`.

use crate::config::cli::LocalStorage;
use crate::domain::model::{Artifact, ModuleList};
use crate::domain::ports::{Generator, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_identifiers;
use std::path::{Path, PathBuf};

pub const DEFAULT_INCLUDE_GUARD: &str = "MODULES_ENABLED_GEN_H";
pub const DEFAULT_STRING_HEADER: &str = "core/string/ustring.h";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulesHeaderOptions {
    pub include_guard: String,
    /// Header providing `String`, included only when compiled as C++.
    pub string_header: String,
}

impl Default for ModulesHeaderOptions {
    fn default() -> Self {
        Self {
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
            string_header: DEFAULT_STRING_HEADER.to_string(),
        }
    }
}

pub fn module_macro_name(module: &str) -> String {
    format!("MODULE_{}_ENABLED", module.to_uppercase())
}

pub fn render_modules_enabled_header(modules: &[String], options: &ModulesHeaderOptions) -> String {
    let mut out = String::new();
    let guard = &options.include_guard;

    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n", guard));
    out.push_str("#ifdef __cplusplus\n");
    out.push_str(&format!("#include \"{}\"\n", options.string_header));
    out.push_str("#endif\n");
    for module in modules {
        out.push_str(&format!("#define {}\n", module_macro_name(module)));
    }
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("bool is_module_enabled(String p_module_name);\n");
    out.push_str("#endif\n");
    out.push_str("#endif\n");
    out
}

pub struct ModulesEnabledHeader {
    modules: ModuleList,
    output_path: PathBuf,
    options: ModulesHeaderOptions,
}

impl ModulesEnabledHeader {
    pub fn new(modules: ModuleList, output_path: impl Into<PathBuf>) -> Self {
        Self {
            modules,
            output_path: output_path.into(),
            options: ModulesHeaderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ModulesHeaderOptions) -> Self {
        self.options = options;
        self
    }
}

impl Generator for ModulesEnabledHeader {
    fn render(&self) -> Result<Artifact> {
        validate_identifiers("modules.enabled", &self.modules)?;
        tracing::debug!(
            "Rendering {} module macro(s) for {}",
            self.modules.len(),
            self.output_path.display()
        );

        Ok(Artifact {
            name: "modules-enabled",
            path: self.output_path.clone(),
            contents: render_modules_enabled_header(&self.modules, &self.options).into_bytes(),
        })
    }
}

/// Writes the modules header to `output_path`, replacing any existing file.
pub fn generate_modules_enabled_header(modules: &[String], output_path: &Path) -> Result<()> {
    let artifact = ModulesEnabledHeader::new(modules.to_vec(), output_path).render()?;
    LocalStorage::default().write_file(&artifact.path, &artifact.contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_matches_expected_layout() {
        let header = render_modules_enabled_header(
            &names(&["bluetooth", "gltf"]),
            &ModulesHeaderOptions::default(),
        );
        let expected = "\
#ifndef MODULES_ENABLED_GEN_H
#define MODULES_ENABLED_GEN_H
#ifdef __cplusplus
#include \"core/string/ustring.h\"
#endif
#define MODULE_BLUETOOTH_ENABLED
#define MODULE_GLTF_ENABLED
#ifdef __cplusplus
bool is_module_enabled(String p_module_name);
#endif
#endif
";
        assert_eq!(header, expected);
    }

    #[test]
    fn test_macro_lines_follow_input_order() {
        let modules = names(&["zip", "audio", "text_server_fb", "audio"]);
        let header = render_modules_enabled_header(&modules, &ModulesHeaderOptions::default());

        let defines: Vec<&str> = header
            .lines()
            .filter(|line| line.starts_with("#define MODULE_"))
            .collect();
        assert_eq!(
            defines,
            vec![
                "#define MODULE_ZIP_ENABLED",
                "#define MODULE_AUDIO_ENABLED",
                "#define MODULE_TEXT_SERVER_FB_ENABLED",
                "#define MODULE_AUDIO_ENABLED",
            ]
        );
    }

    #[test]
    fn test_empty_list_keeps_guard_and_declaration() {
        let header = render_modules_enabled_header(&[], &ModulesHeaderOptions::default());
        let lines: Vec<&str> = header.lines().collect();

        assert_eq!(lines[0], "#ifndef MODULES_ENABLED_GEN_H");
        assert_eq!(lines[1], "#define MODULES_ENABLED_GEN_H");
        assert_eq!(lines.last(), Some(&"#endif"));
        assert!(!header.contains("#define MODULE_"));
        assert!(header.contains("bool is_module_enabled(String p_module_name);"));
    }

    #[test]
    fn test_custom_options() {
        let options = ModulesHeaderOptions {
            include_guard: "MY_MODULES_H".to_string(),
            string_header: "engine/str.h".to_string(),
        };
        let header = render_modules_enabled_header(&names(&["net"]), &options);
        assert!(header.starts_with("#ifndef MY_MODULES_H\n#define MY_MODULES_H\n"));
        assert!(header.contains("#include \"engine/str.h\"\n"));
    }

    #[test]
    fn test_invalid_module_name_is_rejected() {
        let generator = ModulesEnabledHeader::new(names(&["ok", "not ok"]), "out.h");
        assert!(generator.render().is_err());
    }

    #[test]
    fn test_generate_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gen").join("modules_enabled.gen.h");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale contents that are much longer than nothing").unwrap();

        generate_modules_enabled_header(&names(&["svg"]), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("#ifndef MODULES_ENABLED_GEN_H\n"));
        assert!(written.contains("#define MODULE_SVG_ENABLED\n"));
        assert!(!written.contains("stale"));
    }
}
