mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use a2a::{A2aClient, A2aError};
use supply_core::{scenario_by_name, scenario_names, DelayScenario};

use config::SimConfig;

#[derive(Parser)]
#[command(name = "supply-sim")]
#[command(about = "Shipment-delay event simulator for the supply-chain agent mesh", long_about = None)]
#[command(version)]
struct Cli {
    /// Scenario to fire (defaults to the configured scenario)
    scenario: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = SimConfig::load();

    let name = cli.scenario.unwrap_or_else(|| config.default_scenario.clone());
    let scenario = match resolve_scenario(&name) {
        Ok(scenario) => scenario,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    simulate(&scenario, &config).await
}

fn resolve_scenario(name: &str) -> std::result::Result<DelayScenario, String> {
    scenario_by_name(name).ok_or_else(|| {
        format!(
            "Unknown scenario '{}'. Use: {}",
            name,
            scenario_names().join(", ")
        )
    })
}

async fn simulate(scenario: &DelayScenario, config: &SimConfig) -> Result<()> {
    println!();
    println!("{}", "=".repeat(60));
    println!("  SUPPLY CHAIN EVENT SIMULATOR");
    println!("{}", "=".repeat(60));
    println!();
    println!("[{}] Firing shipment delay event...", now_hms());
    println!("  Shipment  : {}", scenario.shipment_id);
    println!(
        "  Customer  : {} ({})",
        scenario.customer,
        scenario.customer_tier.as_str()
    );
    println!("  Route     : {} -> {}", scenario.origin, scenario.destination);
    println!("  Delay     : {} hours", scenario.delay_hours);
    println!("  Reason    : {}", scenario.delay_reason);
    println!();
    println!("[{}] Publishing via A2A protocol to gateway...", now_hms());

    let prompt = a2a::build_prompt(scenario)?;
    let client = A2aClient::new(config.gateway_url.clone());

    match client.send_prompt(&prompt).await {
        Ok(dispatch) => {
            println!(
                "[{}] ✅ Event published successfully! (request {})",
                now_hms(),
                dispatch.request_id
            );
            println!();
            println!("👉 Watch the agent workflow at : {}", config.gateway_url);
            println!(
                "👉 Check {}  : Slack notification incoming",
                config.channel_name
            );
            println!();
        }
        Err(A2aError::Rejected { status, body }) => {
            println!("[{}] ⚠️  Status {}: {}", now_hms(), status, body);
            manual_fallback(&prompt, &config.gateway_url);
        }
        Err(e) => {
            println!(
                "[{}] ⚠️  Could not reach gateway at {} (is it running?)",
                now_hms(),
                config.gateway_url
            );
            tracing::debug!("Publish failed: {}", e);
            manual_fallback(&prompt, &config.gateway_url);
        }
    }

    Ok(())
}

fn manual_fallback(prompt: &str, gateway_url: &str) {
    println!();
    println!("{}", "─".repeat(60));
    println!("Paste this into the gateway chat at {}:", gateway_url);
    println!("{}", "─".repeat(60));
    println!("{}", prompt);
    println!("{}", "─".repeat(60));
}

fn now_hms() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supply_sim=info,a2a=warn,slack=warn".into()),
        )
        .init();
}
