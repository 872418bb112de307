use crate::core::modules_header::{ModulesEnabledHeader, ModulesHeaderOptions};
use crate::core::tests_header::TestAggregateHeader;
use crate::core::Generator;
use crate::utils::error::{GenError, Result};
use crate::utils::validation::{
    find_duplicates, validate_c_identifier, validate_identifiers, validate_include_path,
    validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 建置設定: 取代全域的 build environment, 明確傳入各個產生器
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    pub modules: Option<ModulesConfig>,
    pub tests: Option<TestsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    pub enabled: Vec<String>,
    pub header: String,
    pub include_guard: Option<String>,
    pub string_header: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestsConfig {
    pub headers: Vec<String>,
    pub output: String,
}

impl BuildConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GenError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BUILD_DIR}); 未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GenError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn module_list(&self) -> &[String] {
        self.modules
            .as_ref()
            .map(|m| m.enabled.as_slice())
            .unwrap_or(&[])
    }

    pub fn header_options(&self) -> ModulesHeaderOptions {
        let mut options = ModulesHeaderOptions::default();
        if let Some(modules) = &self.modules {
            if let Some(guard) = &modules.include_guard {
                options.include_guard = guard.clone();
            }
            if let Some(header) = &modules.string_header {
                options.string_header = header.clone();
            }
        }
        options
    }

    pub fn test_headers(&self) -> Vec<PathBuf> {
        self.tests
            .as_ref()
            .map(|t| t.headers.iter().map(PathBuf::from).collect())
            .unwrap_or_default()
    }

    /// 依設定建立所有啟用的產生器
    pub fn generators(&self) -> Vec<Box<dyn Generator>> {
        let mut generators: Vec<Box<dyn Generator>> = Vec::new();

        if let Some(modules) = &self.modules {
            generators.push(Box::new(
                ModulesEnabledHeader::new(modules.enabled.clone(), &modules.header)
                    .with_options(self.header_options()),
            ));
        }

        if let Some(tests) = &self.tests {
            generators.push(Box::new(TestAggregateHeader::new(
                self.test_headers(),
                &tests.output,
            )));
        }

        generators
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        if self.modules.is_none() && self.tests.is_none() {
            return Err(GenError::MissingConfigError {
                field: "[modules] or [tests]".to_string(),
            });
        }

        if let Some(modules) = &self.modules {
            validate_path("modules.header", &modules.header)?;
            validate_identifiers("modules.enabled", &modules.enabled)?;
            if let Some(guard) = &modules.include_guard {
                validate_c_identifier("modules.include_guard", guard)?;
            }
            if let Some(header) = &modules.string_header {
                validate_include_path("modules.string_header", header)?;
            }

            let duplicates = find_duplicates(&modules.enabled);
            if !duplicates.is_empty() {
                tracing::warn!("⚠️ Module(s) listed more than once: {}", duplicates.join(", "));
            }
        }

        if let Some(tests) = &self.tests {
            validate_path("tests.output", &tests.output)?;
            for header in &tests.headers {
                validate_path("tests.headers", header)?;
            }
        }

        Ok(())
    }
}
