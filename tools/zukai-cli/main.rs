use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::time::Instant;
use zukai::graph::visualizer::visualize_graph;
use zukai::prelude::*;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the rule export of the dashboard store and are only used here for conversion.

#[derive(Deserialize)]
struct RawStoredRule {
    id: String,
    #[serde(alias = "triggerType", alias = "trigger")]
    trigger_type: String,
    #[serde(default)]
    logic: Option<serde_json::Value>,
    #[serde(default)]
    actions: Vec<RawAction>,
    #[serde(default, alias = "recentExecutions")]
    recent_executions: Vec<ExecutionRecord>,
}

#[derive(Deserialize)]
struct RawAction {
    id: String,
    #[serde(alias = "name")]
    label: String,
    #[serde(default, alias = "type")]
    action_type: Option<String>,
}

/// Which JSON shape the input file uses.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// `{"rule": {...}, "actions": [...], "executions": [...]}`
    Bundle,
    /// A single stored rule record with embedded actions and recent executions.
    Stored,
}

/// What to print after compiling.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// A one-sentence description of the rule
    Summary,
    /// A layer-by-layer listing of the laid-out graph
    Text,
    /// The laid-out graph as JSON
    Json,
    /// The canvas node/edge JSON produced by the renderer adapter
    Ui,
}

// --- Converter Implementation ---
// This implements the conversion from the stored rule record to zukai's canonical RuleBundle.

impl IntoRule for RawStoredRule {
    fn into_rule(self) -> std::result::Result<RuleBundle, RuleConversionError> {
        if self.trigger_type.trim().is_empty() {
            return Err(RuleConversionError::ValidationError(format!(
                "rule '{}' has an empty trigger type",
                self.id
            )));
        }

        let logic = self.logic.as_ref().and_then(LogicNode::from_json);
        if logic.is_none() && self.logic.as_ref().is_some_and(|v| !v.is_null()) {
            log::warn!(
                "Rule '{}' has malformed logic; it will be drawn without conditions",
                self.id
            );
        }

        Ok(RuleBundle {
            rule: RuleDefinition {
                id: self.id,
                trigger_type: self.trigger_type,
                logic,
            },
            actions: self
                .actions
                .into_iter()
                .map(|a| ActionSpec {
                    id: a.id,
                    label: a.label,
                    action_type: a.action_type,
                })
                .collect(),
            executions: self.recent_executions,
        })
    }
}

/// Compile a rule into a laid-out flow graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the rule JSON file
    rule_path: String,

    /// Shape of the rule JSON file
    #[arg(short, long, value_enum, default_value = "bundle")]
    input: InputFormat,

    /// Optional path to a layout config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// What to print
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Also write the compiled flow as a binary artifact to this path
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    run(cli);
}

fn run(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let rule_json = fs::read_to_string(&cli.rule_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read rule file '{}': {}",
            &cli.rule_path, e
        ))
    });
    let bundle = match cli.input {
        InputFormat::Bundle => RuleBundle::from_json_str(&rule_json),
        InputFormat::Stored => serde_json::from_str::<RawStoredRule>(&rule_json)
            .map_err(RuleConversionError::from)
            .and_then(IntoRule::into_rule),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to load rule: {}", e)));

    let config = match &cli.config {
        Some(path) => LayoutConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load layout config: {}", e))),
        None => LayoutConfig::default(),
    };

    // --- 2. Compilation and Layout ---
    let compile_start = Instant::now();
    let rule_id = bundle.rule.id.clone();
    let compiler = Compiler::from_bundle(bundle)
        .with_layout_config(config)
        .build();
    let flow = CompiledFlow::from_compiler(&compiler);
    let compile_duration = compile_start.elapsed();

    log::info!(
        "Compiled rule '{}': {} nodes, {} edges, {} layers in {:?}",
        rule_id,
        flow.graph.nodes.len(),
        flow.graph.edges.len(),
        flow.graph.layer_count(),
        compile_duration
    );

    // --- 3. Output ---
    match cli.format {
        OutputFormat::Summary => println!("{}", flow.summary),
        OutputFormat::Text => print!("{}", visualize_graph(&flow.graph, &rule_id)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&flow.graph)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode graph: {}", e)));
            println!("{}", json);
        }
        OutputFormat::Ui => {
            let json = to_ui_json(&flow.graph).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to encode canvas flow: {}", e))
            });
            println!("{}", json);
        }
    }

    if let Some(path) = &cli.output {
        flow.save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write artifact: {}", e)));
        log::info!("Wrote compiled flow to '{}'", path);
    }

    log::debug!("Total execution: {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
