//! Resume optimizer: keyword analysis, AI enhancement and template reformatting

use clap::Parser;
use indicatif::ProgressBar;
use log::{error, warn};
use resume_optimizer::cli::{self, Cli, Commands, ConfigAction};
use resume_optimizer::config::Config;
use resume_optimizer::error::{Result, ResumeOptimizerError};
use resume_optimizer::input::InputManager;
use resume_optimizer::llm::analyzer::KeywordAnalysis;
use resume_optimizer::llm::LlmAnalyzer;
use resume_optimizer::matching::KeywordMatcher;
use resume_optimizer::output::export::export_resume;
use resume_optimizer::output::report::{AnalysisSource, ReportMetadata};
use resume_optimizer::output::{AnalysisReport, ReportGenerator};
use resume_optimizer::structure::template::TemplateEngine;
use resume_optimizer::structure::{analyze_structure, Template};
use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            offline,
            output,
            save,
            detailed,
        } => {
            let started = Instant::now();

            cli::validate_file_extension(&resume, &cli::RESUME_EXTENSIONS)
                .map_err(|e| ResumeOptimizerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &cli::JOB_EXTENSIONS).map_err(|e| {
                ResumeOptimizerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeOptimizerError::InvalidInput)?;

            let mut input_manager = InputManager::new();

            println!("📄 Processing resume: {}", resume.display());
            let resume_text = input_manager.extract_text(&resume).await?;

            println!("💼 Processing job description: {}", job.display());
            let job_text = input_manager.extract_text(&job).await?;

            let structure = analyze_structure(&resume_text);

            let (analysis, similarity, source) = if offline {
                run_offline_analysis(&config, &job_text, &resume_text)
            } else {
                match LlmAnalyzer::new(&config) {
                    Ok(analyzer) => {
                        let progress =
                            spinner(&format!("Analyzing keywords with {}...", analyzer.model()));
                        let result = analyzer.analyze_keywords(&job_text, &resume_text).await;
                        progress.finish_and_clear();

                        let model = analyzer.model().to_string();
                        (result?, None, AnalysisSource::Api { model })
                    }
                    Err(ResumeOptimizerError::MissingApiKey) => {
                        warn!("No API key configured, falling back to offline keyword matching");
                        println!("⚠️  No API key found, using offline keyword matching");
                        run_offline_analysis(&config, &job_text, &resume_text)
                    }
                    Err(e) => return Err(e),
                }
            };

            let metadata = ReportMetadata {
                resume_file: resume.display().to_string(),
                job_file: job.display().to_string(),
                analysis_source: source,
                generated_at: chrono::Utc::now(),
                processing_time_ms: started.elapsed().as_millis() as u64,
                version: env!("CARGO_PKG_VERSION").to_string(),
            };

            let report = AnalysisReport::new(analysis, &structure, similarity, metadata);

            // Color only interactive console output
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::new(use_colors, detailed || config.output.detailed);
            let rendered = generator.format(&report, output_format)?;

            write_or_print(&rendered, save.as_deref())?;
        }

        Commands::Enhance { resume, job, save } => {
            cli::validate_file_extension(&resume, &cli::RESUME_EXTENSIONS)
                .map_err(|e| ResumeOptimizerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &cli::JOB_EXTENSIONS).map_err(|e| {
                ResumeOptimizerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            // Enhancement always needs the hosted API; MissingApiKey surfaces here.
            let analyzer = LlmAnalyzer::new(&config)?;

            let progress = spinner("Analyzing keyword gaps...");
            let analysis = analyzer.analyze_keywords(&job_text, &resume_text).await;
            progress.finish_and_clear();
            let analysis = analysis?;

            println!(
                "🎯 Match score: {}% ({} keywords missing)",
                analysis.score,
                analysis.missing_keywords.len()
            );

            if analysis.missing_keywords.is_empty() {
                println!("✅ Nothing to enhance: all job keywords are already present.");
                return Ok(());
            }

            let progress = spinner("Rewriting resume to close keyword gaps...");
            let enhanced = analyzer
                .enhance_resume(&job_text, &resume_text, &analysis.missing_keywords)
                .await;
            progress.finish_and_clear();
            let enhanced = enhanced?;

            if !enhanced.changes.is_empty() {
                println!("\n✏️  Changes made:");
                for change in &enhanced.changes {
                    println!("  • {}", change);
                }
                println!();
            }

            match save {
                Some(path) => {
                    export_resume(&enhanced.enhanced_text, &path)?;
                    println!("💾 Enhanced resume saved to: {}", path.display());
                }
                None => println!("{}", enhanced.enhanced_text),
            }
        }

        Commands::Reformat {
            resume,
            template,
            save,
        } => {
            cli::validate_file_extension(&resume, &cli::RESUME_EXTENSIONS)
                .map_err(|e| ResumeOptimizerError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            // Unrecognized names resolve to original: passthrough by contract.
            let resolved = Template::from_name(&template);
            if resolved == Template::Original && !template.eq_ignore_ascii_case("original") {
                warn!("Unknown template '{}', keeping original layout", template);
            }
            println!("🎨 Applying template: {}", resolved);

            let formatted = TemplateEngine::new().apply(&resume_text, resolved);

            match save {
                Some(path) => {
                    export_resume(&formatted, &path)?;
                    println!("💾 Reformatted resume saved to: {}", path.display());
                }
                None => println!("{}", formatted),
            }
        }

        Commands::Inspect { resume, output } => {
            cli::validate_file_extension(&resume, &cli::RESUME_EXTENSIONS)
                .map_err(|e| ResumeOptimizerError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let structure = analyze_structure(&resume_text);

            if output.eq_ignore_ascii_case("json") {
                println!("{}", serde_json::to_string_pretty(&structure)?);
            } else {
                println!("📋 Resume structure ({} format)\n", structure.format_type);

                if structure.sections.is_empty() {
                    println!("No sections detected.");
                } else {
                    println!("Sections:");
                    for section in &structure.sections {
                        println!(
                            "  • {} ({} characters)",
                            section.title,
                            section.content.chars().count()
                        );
                    }
                }

                println!("\nSignals:");
                println!("  Contact info: {}", structure.has_contact_info);
                println!("  Summary:      {}", structure.has_summary);
                println!("  Experience:   {}", structure.has_experience);
                println!("  Education:    {}", structure.has_education);
                println!("  Skills:       {}", structure.has_skills);
                println!("  Bullets:      {}", structure.bullet_points);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}\n", Config::config_path().display());
                println!("API endpoint: {}", config.api.base_url);
                println!("Model: {}", config.api.model);
                println!(
                    "API key: {}",
                    if config.api.api_key.is_some() {
                        "configured"
                    } else {
                        "not set (OPENAI_API_KEY env var is also checked)"
                    }
                );
                println!("\nOffline matching:");
                println!("  Fuzzy threshold: {:.2}", config.matching.fuzzy_threshold);
                println!("  Max job keywords: {}", config.matching.max_job_keywords);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

fn run_offline_analysis(
    config: &Config,
    job_text: &str,
    resume_text: &str,
) -> (KeywordAnalysis, Option<f32>, AnalysisSource) {
    let matcher = KeywordMatcher::new(
        config.matching.fuzzy_threshold,
        config.matching.max_job_keywords,
    );

    let analysis = matcher.analyze(job_text, resume_text);
    let similarity = matcher.similarity(job_text, resume_text);

    (analysis, Some(similarity), AnalysisSource::Offline)
}

fn write_or_print(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("💾 Report saved to: {}", path.display());
            Ok(())
        }
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_message(message.to_string());
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
