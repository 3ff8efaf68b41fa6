//! snapads-cli: 营销 API 的命令行工具：列出组织、广告账户与广告系列，查询状态码分类。
//!
//! Usage:
//!   snapads-cli organizations                   List organizations of the token's user
//!   snapads-cli ad-accounts <organization_id>   List ad accounts of an organization
//!   snapads-cli campaigns <ad_account_id>       List campaigns of an ad account
//!   snapads-cli classify <status>               Show how an HTTP status is reported

use serde::Serialize;
use snapads_rust::{classify, SnapClient};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let outcome = match args[1].as_str() {
        "organizations" => cmd_organizations(),
        "ad-accounts" => with_arg(&args[2..], "organization_id", cmd_ad_accounts),
        "campaigns" => with_arg(&args[2..], "ad_account_id", cmd_campaigns),
        "classify" => with_arg(&args[2..], "status", cmd_classify),
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}

fn print_usage() {
    println!(
        r#"snapads-cli: Snap Marketing API 命令行工具

USAGE:
    snapads-cli <COMMAND> [ARGS]

COMMANDS:
    organizations                 List organizations of the token's user
    ad-accounts <organization_id> List ad accounts of an organization
    campaigns <ad_account_id>     List campaigns of an ad account
    classify <status>             Show the error an HTTP status maps to
    version                       Show version information
    help                          Show this help message

ENVIRONMENT:
    SNAPADS_ACCESS_TOKEN          OAuth access token (required for API commands)
    SNAPADS_BASE_URL              API base URL override
    RUST_LOG                      Log filter, e.g. snapads_rust=debug"#
    );
}

fn cmd_version() {
    println!("snapads-cli {}", env!("CARGO_PKG_VERSION"));
}

fn with_arg(
    args: &[String],
    name: &str,
    command: fn(&str) -> Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.first() {
        Some(value) => command(value),
        None => Err(format!("missing argument <{name}>").into()),
    }
}

fn client() -> snapads_rust::Result<SnapClient> {
    let mut builder = SnapClient::builder();
    if let Ok(token) = std::env::var("SNAPADS_ACCESS_TOKEN") {
        builder = builder.access_token(token);
    }
    builder.build()
}

fn print_json(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_organizations() -> Result<(), Box<dyn std::error::Error>> {
    let organizations = client()?.organizations().list_mine()?;
    print_json(&organizations)
}

fn cmd_ad_accounts(organization_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let accounts = client()?.ad_accounts().list_by_organization(organization_id)?;
    print_json(&accounts)
}

fn cmd_campaigns(ad_account_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let campaigns = client()?.campaigns().list_by_ad_account(ad_account_id)?;
    print_json(&campaigns)
}

fn cmd_classify(status: &str) -> Result<(), Box<dyn std::error::Error>> {
    let status: u16 = status
        .parse()
        .map_err(|_| format!("not an HTTP status: {status}"))?;
    if snapads_rust::error_code::is_success(status) {
        println!("{status}: success");
    } else {
        let err = classify(status);
        println!("{status}: {} ({})", err.message, err.kind.name());
    }
    Ok(())
}
