mod http;
mod recorder;
mod reports;
mod scenario;
mod scripted;
mod signing;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use dubnacoin_core::{ClientConfig, LaunchContext, LaunchUser};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use http::ReqwestTransport;
use scenario::{ScenarioPlan, ScenarioResult, run_scenario};
use scripted::{ScriptedAccount, ScriptedBackend};
use signing::{SigningScheme, sign_init_data};

/// Bot token the scripted backend signs and checks with when none is given.
const SCRIPTED_BOT_TOKEN: &str = "100000:scripted-dubnacoin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Talk to a running backend over HTTP
    Live,
    /// Use the in-process backend (no network)
    Scripted,
}

#[derive(Debug, Parser)]
#[command(name = "dubnacoin-tester", version = "0.1.0")]
#[command(about = "Runs the DubnaCoin Mini App session scenario headlessly")]
struct Args {
    /// Backend to run against
    #[arg(long, value_enum, default_value_t = TestMode::Scripted)]
    mode: TestMode,

    /// Backend origin (live mode)
    #[arg(long, default_value = "http://localhost:5000")]
    base_url: String,

    /// Signed launch data to send as-is
    #[arg(long, conflicts_with_all = ["bot_token", "user_id", "username"])]
    init_data: Option<String>,

    /// Bot token used to sign generated launch data
    #[arg(long)]
    bot_token: Option<String>,

    /// Telegram user id for generated launch data
    #[arg(long)]
    user_id: Option<i64>,

    /// Telegram username for generated launch data
    #[arg(long)]
    username: Option<String>,

    /// Signing scheme for generated launch data
    #[arg(long, value_enum, default_value_t = SigningScheme::Legacy)]
    signing: SigningScheme,

    /// Start parameter naming the inviting user
    #[arg(long)]
    referrer: Option<String>,

    /// Bot account used to build the referral link
    #[arg(long)]
    bot_username: Option<String>,

    /// Number of coin clicks to send
    #[arg(long, default_value_t = 5)]
    clicks: u32,

    /// Submit an error report with this text
    #[arg(long)]
    report_message: Option<String>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Request timeout in seconds (live mode)
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    announce_banner();

    let start_time = Instant::now();
    let result = run(&args).await?;
    let passed = result.passed;
    write_reports(&args, &[result], start_time)?;

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner() {
    println!("{}", "🪙 DubnaCoin Session Tester".bright_cyan().bold());
    println!("{}", "===========================".cyan());
}

fn bot_token(args: &Args) -> Option<String> {
    match args.mode {
        TestMode::Scripted => Some(
            args.bot_token
                .clone()
                .unwrap_or_else(|| SCRIPTED_BOT_TOKEN.to_string()),
        ),
        TestMode::Live => args.bot_token.clone(),
    }
}

fn build_launch(args: &Args) -> Result<LaunchContext> {
    if let Some(init_data) = &args.init_data {
        return Ok(LaunchContext::new(init_data.clone(), args.referrer.clone()));
    }
    let Some(token) = bot_token(args) else {
        bail!("live mode needs --init-data or --bot-token with --user-id");
    };
    let user_id = match (args.mode, args.user_id) {
        (_, Some(id)) => id,
        (TestMode::Scripted, None) => 1,
        (TestMode::Live, None) => bail!("--bot-token needs --user-id"),
    };
    let user = LaunchUser {
        id: user_id,
        username: args.username.clone(),
        first_name: Some("Tester".to_string()),
        ..LaunchUser::default()
    };
    let init_data = sign_init_data(args.signing, &token, &user, chrono::Utc::now().timestamp())
        .context("failed to sign launch data")?;
    Ok(LaunchContext::new(init_data, args.referrer.clone()))
}

fn client_config(args: &Args) -> ClientConfig {
    ClientConfig {
        api_base: match args.mode {
            TestMode::Live => args.base_url.clone(),
            TestMode::Scripted => String::new(),
        },
        bot_username: args.bot_username.clone(),
        ..ClientConfig::default()
    }
}

fn plan(args: &Args) -> ScenarioPlan {
    let mode = match args.mode {
        TestMode::Live => "live",
        TestMode::Scripted => "scripted",
    };
    ScenarioPlan {
        name: format!("session ({mode})"),
        clicks: args.clicks,
        report_message: args.report_message.clone(),
    }
}

async fn run(args: &Args) -> Result<ScenarioResult> {
    let launch = build_launch(args)?;
    let config = client_config(args);
    let plan = plan(args);
    let result = match args.mode {
        TestMode::Live => {
            let transport = ReqwestTransport::new(Duration::from_secs(args.timeout))?;
            run_scenario(transport, config, Ok(launch), &plan).await
        }
        TestMode::Scripted => {
            let token = bot_token(args).unwrap_or_default();
            let backend = ScriptedBackend::new(token, args.signing, ScriptedAccount::default());
            run_scenario(backend, config, Ok(launch), &plan).await
        }
    };
    Ok(result)
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, results)?,
        _ => reports::generate_console_report(
            &mut output_target,
            results,
            start_time.elapsed(),
            args.verbose,
        )?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
