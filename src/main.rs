use buildgen::config::Command;
use buildgen::core::modules_header::ModulesEnabledHeader;
use buildgen::core::tests_header::TestAggregateHeader;
use buildgen::core::Generator;
use buildgen::domain::model::ArgumentVector;
use buildgen::utils::error::ErrorSeverity;
use buildgen::utils::{logger, validation::Validate};
use buildgen::{read_blob_file, serialize_args, BuildConfig, CliConfig, GenEngine, LocalStorage};
use buildgen::{GenError, Result};
use clap::Parser;
use serde::Serialize;
use std::ffi::OsString;
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config.command) {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(command: Command) -> Result<()> {
    let engine = GenEngine::new(LocalStorage::default());

    match command {
        Command::ModulesEnabled {
            output,
            modules,
            config,
        } => {
            let mut generator = ModulesEnabledHeader::new(modules.clone(), &output);
            if let Some(path) = config {
                let build = load_config(&path)?;
                if modules.is_empty() {
                    if build.modules.is_none() {
                        return Err(GenError::MissingConfigError {
                            field: "[modules]".into(),
                        });
                    }
                    generator = ModulesEnabledHeader::new(build.module_list().to_vec(), &output);
                }
                generator = generator.with_options(build.header_options());
            }
            engine.run(&[&generator])?;
        }

        Command::TestsHeader { output, headers } => {
            engine.run(&[&TestAggregateHeader::new(headers, output)])?;
        }

        Command::Generate { config, dry_run } => {
            let build = load_config(&config)?;
            let generators = build.generators();
            let generators: Vec<&dyn Generator> = generators.iter().map(|g| g.as_ref()).collect();

            if dry_run {
                tracing::info!("🔍 DRY RUN MODE - nothing will be written");
                perform_dry_run(&generators)?;
                return Ok(());
            }

            for path in engine.run(&generators)? {
                println!("📁 {}", path.display());
            }
        }

        Command::ArgsBlob { output, args } => {
            let program = std::env::args_os()
                .next()
                .unwrap_or_else(|| OsString::from("buildgen"));
            let raw_args: ArgumentVector = std::iter::once(program).chain(args).collect();

            if serialize_args(&raw_args, &output)? {
                tracing::info!(
                    "📦 Serialized {} argument(s) to {}",
                    raw_args.len() - 1,
                    output.display()
                );
            } else {
                tracing::info!("No arguments given, nothing written");
            }
        }

        Command::Decode { blob, json } => {
            let decoded = read_blob_file(&blob)?;

            if json {
                #[derive(Serialize)]
                struct DecodedBlob {
                    total_count: u32,
                    args: Vec<String>,
                }

                let view = DecodedBlob {
                    total_count: decoded.total_count,
                    args: decoded.args_lossy(),
                };
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                for arg in decoded.args_lossy() {
                    println!("{}", arg);
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<BuildConfig> {
    tracing::info!("📁 Loading configuration from: {}", path.display());

    let config = BuildConfig::from_file(path).map_err(|e| match e {
        GenError::IoError(io) => GenError::ConfigValidationError {
            field: path.display().to_string(),
            message: format!("cannot read config file: {}", io),
        },
        other => other,
    })?;
    config.validate()?;

    tracing::info!("✅ Configuration loaded and validated successfully");
    Ok(config)
}

fn perform_dry_run(generators: &[&dyn Generator]) -> Result<()> {
    println!("🔍 Dry Run Analysis:");
    for generator in generators {
        let artifact = generator.render()?;
        println!(
            "  {} -> {} ({} bytes)",
            artifact.name,
            artifact.path.display(),
            artifact.contents.len()
        );
    }
    Ok(())
}
