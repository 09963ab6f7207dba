use clap::Parser;
use clap::builder::RangedU64ValueParser;
use env_logger::Env;
use layout::placement::{members_of, place_members};
use layout::{Layout, MemberPlacement};
use log::debug;
use parser::ParseLimits;
use parser::limits::{DEFAULT_MAX_DEPTH, HARD_MAX_DEPTH, WIRE_MAX_LENGTH};
use std::process::ExitCode;

/// Classify type signatures by their encoded layout
#[derive(Parser, Debug)]
#[command(name = "gvsig", version)]
struct Cli {
    /// Signatures to classify (use "" for the empty signature)
    #[arg(required = true)]
    signatures: Vec<String>,

    /// Deepest nesting of arrays, structs and dict entries accepted
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=HARD_MAX_DEPTH as u64)
    )]
    max_depth: usize,

    /// Longest signature accepted, in bytes
    #[arg(long, default_value_t = WIRE_MAX_LENGTH)]
    max_length: usize,

    /// Accept signatures of any length
    #[arg(long, conflicts_with = "max_length")]
    no_length_limit: bool,

    /// Also print where each member starts and whether it is framed
    #[arg(long)]
    members: bool,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn limits(&self) -> ParseLimits {
        let max_length = (!self.no_length_limit).then_some(self.max_length);
        ParseLimits::default()
            .with_max_depth(self.max_depth)
            .with_max_length(max_length)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let limits = cli.limits();
    debug!("classifying {} signature(s) with {:?}", cli.signatures.len(), limits);

    let mut failed = false;
    for signature in &cli.signatures {
        if let Err(error) = classify_one(signature, &limits, cli.members) {
            failed = true;
            if let Err(io_error) = parser::report_signature_error("signature", signature, &error) {
                eprintln!("{:?}: {} ({})", signature, error, io_error);
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn classify_one(signature: &str, limits: &ParseLimits, members: bool) -> Result<(), parser::SignatureError> {
    let sequence = parser::parse_with(signature, limits)?;
    println!("{:?} {}", signature, describe(&Layout::of_sequence(&sequence)));

    if members {
        for (index, member) in place_members(members_of(&sequence)).iter().enumerate() {
            println!("  [{}] {}", index, describe_member(member));
        }
    }

    Ok(())
}

fn describe(layout: &Layout) -> String {
    match layout.size {
        Some(size) => format!("fixed align={} size={}", layout.alignment, size),
        None => format!("variable align={}", layout.alignment),
    }
}

fn describe_member(member: &MemberPlacement) -> String {
    let offset = member
        .offset
        .map_or_else(|| "dynamic".to_string(), |offset| offset.to_string());
    let framed = if member.framed { " framed" } else { "" };
    format!("{:?} {} offset={}{}", member.signature, describe(&member.layout), offset, framed)
}
