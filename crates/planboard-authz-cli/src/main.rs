// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Planboard authorization command-line tool.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use planboard_authz::{Authorizer, EnforcementMode};
use planboard_authz_config::{AuthzServiceConfig, LogFormat, LoggingConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod request;

use request::{DecisionRequest, STDIN};

/// Exit code for a well-formed request that was denied.
const EXIT_DENIED: u8 = 2;

/// Planboard authorization - decide whether a principal may act on a resource.
#[derive(Parser, Debug)]
#[command(
	name = "planboard-authz",
	about = "Planboard hierarchical authorization engine",
	version
)]
struct Args {
	/// Config file to use in place of /etc/planboard/authz.toml
	#[arg(long, global = true, env = "PLANBOARD_AUTHZ_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(ClapArgs, Debug)]
struct RequestArgs {
	/// Request document (JSON), or `-` for stdin
	#[arg(long, short, default_value = STDIN)]
	request: String,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print `allow` or `deny`; exits 2 on deny
	Check {
		#[command(flatten)]
		input: RequestArgs,

		/// Print `{"allowed": bool}` instead of plain text
		#[arg(long)]
		json: bool,
	},
	/// Print the decision with the ordered checks behind it
	Explain {
		#[command(flatten)]
		input: RequestArgs,
	},
	/// List every action the principal may perform on the supplied snapshots
	Actions {
		#[command(flatten)]
		input: RequestArgs,
	},
	/// Show version information
	Version,
}

fn main() -> Result<ExitCode> {
	let args = Args::parse();

	if let Command::Version = args.command {
		print_version();
		return Ok(ExitCode::SUCCESS);
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => planboard_authz_config::load_config_with_file(path)
			.with_context(|| format!("failed to load configuration from {}", path.display()))?,
		None => planboard_authz_config::load_config().context("failed to load configuration")?,
	};

	init_tracing(&config.logging);
	info!(
		environment = %config.authz.environment,
		enforcement = %config.authz.enforcement,
		"starting planboard-authz"
	);

	run(args.command, &config)
}

fn init_tracing(logging: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.level.clone().into());
	let registry = tracing_subscriber::registry().with(filter);

	match logging.format {
		LogFormat::Pretty => registry
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.init(),
		LogFormat::Json => registry
			.with(
				tracing_subscriber::fmt::layer()
					.json()
					.with_writer(std::io::stderr),
			)
			.init(),
	}
}

fn run(command: Command, config: &AuthzServiceConfig) -> Result<ExitCode> {
	let authz = config.authz.authorizer();

	match command {
		Command::Check { input, json } => {
			let request = DecisionRequest::read(&input.request)?;
			let allowed = decide(&authz, &request)?;
			if json {
				println!("{}", serde_json::json!({ "allowed": allowed }));
			} else {
				println!("{}", if allowed { "allow" } else { "deny" });
			}
			Ok(if allowed {
				ExitCode::SUCCESS
			} else {
				ExitCode::from(EXIT_DENIED)
			})
		}
		Command::Explain { input } => {
			let request = DecisionRequest::read(&input.request)?;
			let action = request.action()?;
			let explanation = authz
				.explain(&request.principal, action, &request.resource())
				.context("request cannot be decided")?;
			println!("{}", serde_json::to_string_pretty(&explanation)?);
			Ok(ExitCode::SUCCESS)
		}
		Command::Actions { input } => {
			let request = DecisionRequest::read(&input.request)?;
			if let Some(action) = &request.action {
				debug!(%action, "ignoring action field when listing actions");
			}
			for action in authz.allowed_actions(&request.principal, &request.resource()) {
				println!("{action}");
			}
			Ok(ExitCode::SUCCESS)
		}
		Command::Version => {
			print_version();
			Ok(ExitCode::SUCCESS)
		}
	}
}

fn print_version() {
	println!("planboard-authz {}", env!("CARGO_PKG_VERSION"));
}

/// Decides a request. Undecidable requests are an error in strict mode and a
/// denial otherwise.
fn decide(authz: &Authorizer, request: &DecisionRequest) -> Result<bool> {
	let outcome = request.action().and_then(|action| {
		authz
			.try_can(&request.principal, action, &request.resource())
			.map_err(anyhow::Error::from)
	});

	match (outcome, authz.mode()) {
		(Ok(allowed), _) => Ok(allowed),
		(Err(err), EnforcementMode::Strict) => Err(err.context("request cannot be decided")),
		(Err(err), EnforcementMode::FailClosed) => {
			warn!(error = %err, "request cannot be decided, denying");
			Ok(false)
		}
	}
}
