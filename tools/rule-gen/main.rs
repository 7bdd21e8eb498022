use clap::Parser;
use rand::seq::IndexedRandom;
use rand::{Rng, rngs::ThreadRng};
use std::fs;
use zukai::prelude::*;

/// A CLI tool to generate random rule bundles for the zukai compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_rule.json")]
    output: String,

    /// The maximum nesting depth of the generated logic tree
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// The maximum number of children per combinator
    #[arg(long, default_value_t = 4)]
    fan_out: usize,

    /// The number of actions attached to the rule
    #[arg(long, default_value_t = 2)]
    actions: usize,

    /// The number of recent executions to generate
    #[arg(long, default_value_t = 5)]
    executions: usize,
}

const FIELDS: [&str; 8] = [
    "score",
    "amount",
    "country",
    "status",
    "retries",
    "latency_ms",
    "plan",
    "email",
];

const TRIGGERS: [&str; 4] = [
    "order.created",
    "payment.failed",
    "user.signed_up",
    "ticket.updated",
];

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.fan_out < 2 {
        eprintln!("Error: --fan-out ({}) must be at least 2", cli.fan_out);
        std::process::exit(1);
    }

    println!(
        "Generating rule (depth up to {}, fan-out up to {})...",
        cli.depth, cli.fan_out
    );

    let trigger = TRIGGERS.choose(&mut rng).copied().unwrap_or("manual");
    let logic = (cli.depth > 0).then(|| generate_logic(&mut rng, cli.depth, cli.fan_out));
    let rule = RuleDefinition {
        id: format!("rule-{}", rng.random_range(1000..10000)),
        trigger_type: trigger.to_string(),
        logic,
    };

    let actions: Vec<ActionSpec> = (0..cli.actions)
        .map(|i| ActionSpec {
            id: format!("a{}", i + 1),
            label: format!("Action {}", i + 1),
            action_type: Some(["email", "webhook", "slack"][i % 3].to_string()),
        })
        .collect();

    let executions = generate_executions(&mut rng, cli.executions, &actions);

    let bundle = RuleBundle {
        rule,
        actions,
        executions,
    };
    if let Some(logic) = &bundle.rule.logic {
        println!(
            "-> Generated {} condition(s) across {} level(s).",
            logic.leaf_count(),
            logic.depth()
        );
    }

    let json_output = serde_json::to_string_pretty(&bundle)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved rule to '{}'", cli.output);

    Ok(())
}

/// Generates a random logic tree no deeper than `depth`.
fn generate_logic(rng: &mut ThreadRng, depth: usize, fan_out: usize) -> LogicNode {
    if depth <= 1 || rng.random_bool(0.3) {
        return generate_predicate(rng);
    }
    let count = rng.random_range(2..=fan_out);
    let children = (0..count)
        .map(|_| generate_logic(rng, depth - 1, fan_out))
        .collect();
    if rng.random_bool(0.5) {
        LogicNode::and(children)
    } else {
        LogicNode::or(children)
    }
}

fn generate_predicate(rng: &mut ThreadRng) -> LogicNode {
    let field = FIELDS.choose(rng).copied().unwrap_or("score");
    let operator = Operator::KNOWN
        .choose(rng)
        .cloned()
        .unwrap_or(Operator::Equal);
    let value = match operator {
        Operator::Contains | Operator::NotContains => Scalar::Text(
            ["vip", "test", "@example.com"]
                .choose(rng)
                .copied()
                .unwrap_or("vip")
                .to_string(),
        ),
        _ => Scalar::Number(rng.random_range(0..500) as f64),
    };
    LogicNode::Predicate {
        field: field.to_string(),
        operator,
        value,
    }
}

/// Generates executions spread over the last days; roughly half are tied to an action.
fn generate_executions(
    rng: &mut ThreadRng,
    count: usize,
    actions: &[ActionSpec],
) -> Vec<ExecutionRecord> {
    (0..count)
        .map(|i| {
            let status = match rng.random_range(0..10) {
                0..=6 => ExecutionStatus::Success,
                7..=8 => ExecutionStatus::Failed,
                _ => ExecutionStatus::Pending,
            };
            let action_id = if rng.random_bool(0.5) {
                actions.choose(rng).map(|a| a.id.clone())
            } else {
                None
            };
            ExecutionRecord {
                id: format!("exec-{}", i + 1),
                status,
                started_at: format!(
                    "2026-10-{:02}T{:02}:{:02}:00Z",
                    rng.random_range(1..=28),
                    rng.random_range(0..24),
                    rng.random_range(0..60)
                ),
                action_id,
            }
        })
        .collect()
}
