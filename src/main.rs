// ============================================================================
// CLI Entry Point
// Parses arguments, runs the approximation, prints the network as a tree
// ============================================================================

use anyhow::{bail, Context, Result};
use clap::{App, Arg};
use e12_approx::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let matches = build_cli().get_matches();

    let resistance = parse_ohms(
        matches
            .value_of("resistance")
            .context("resistance is required")?,
    )?;
    let tolerance = match matches.value_of("tolerance") {
        Some(raw) => parse_tolerance(raw)?,
        None => DEFAULT_TOLERANCE,
    };

    let network = approximate(resistance, tolerance)?;
    print!("{}", render_tree(&network));

    Ok(())
}

fn build_cli() -> App<'static, 'static> {
    App::new("e12-approx")
        .about("Approximates a resistance with a parallel network of E12 standard values")
        .arg(
            Arg::with_name("resistance")
                .help("Target resistance in ohms")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("tolerance")
                .help("Relative tolerance as a fraction (0.05) or percentage (5%); default 1%")
                .index(2),
        )
}

/// Parse the target resistance from its command-line form.
fn parse_ohms(raw: &str) -> Result<f64> {
    let value: Decimal = raw
        .parse()
        .with_context(|| format!("invalid resistance {:?}", raw))?;
    let ohms = value
        .to_f64()
        .with_context(|| format!("resistance {:?} does not fit in a float", raw))?;
    if ohms <= 0.0 {
        bail!("resistance must be positive (got {})", raw);
    }
    Ok(ohms)
}

/// Parse a tolerance given either as a bare fraction ("0.05") or as a
/// percentage ("5%").
fn parse_tolerance(raw: &str) -> Result<f64> {
    let fraction: Decimal = if let Some(inner) = raw.strip_suffix('%') {
        let percent: Decimal = inner
            .parse()
            .with_context(|| format!("invalid tolerance {:?}", raw))?;
        percent / Decimal::ONE_HUNDRED
    } else {
        raw.parse()
            .with_context(|| format!("invalid tolerance {:?}", raw))?
    };

    let tolerance = fraction
        .to_f64()
        .with_context(|| format!("tolerance {:?} does not fit in a float", raw))?;
    if tolerance < 0.0 {
        bail!("tolerance cannot be negative (got {})", raw);
    }
    Ok(tolerance)
}

/// Render the network below a `.` root, one branch line per resistor.
fn render_tree(network: &Approximation) -> String {
    let mut output = String::from(".\n");
    let terms = network.terms();
    for (index, term) in terms.iter().enumerate() {
        let prefix = if index + 1 == terms.len() {
            "└─ "
        } else {
            "├─ "
        };
        output.push_str(prefix);
        output.push_str(&term.to_string());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ohms() {
        assert_eq!(parse_ohms("4700").unwrap(), 4700.0);
        assert_eq!(parse_ohms("4.7").unwrap(), 4.7);
        assert!(parse_ohms("ohms").is_err());
        assert!(parse_ohms("-100").is_err());
        assert!(parse_ohms("0").is_err());
    }

    #[test]
    fn test_parse_tolerance_fraction() {
        assert_eq!(parse_tolerance("0.05").unwrap(), 0.05);
        assert_eq!(parse_tolerance("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_tolerance_percent() {
        assert_eq!(parse_tolerance("5%").unwrap(), 0.05);
        assert_eq!(parse_tolerance("0.5%").unwrap(), 0.005);
    }

    #[test]
    fn test_parse_tolerance_invalid() {
        assert!(parse_tolerance("five").is_err());
        assert!(parse_tolerance("%").is_err());
        assert!(parse_tolerance("-1%").is_err());
    }

    #[test]
    fn test_render_tree_multi_term() {
        let network = approximate(1234.0, 0.01).unwrap();
        assert_eq!(render_tree(&network), ".\n├─ 1K5\n├─ 8K2\n└─ 47K\n");
    }

    #[test]
    fn test_render_tree_single_term() {
        let network = approximate(1000.0, 0.01).unwrap();
        assert_eq!(render_tree(&network), ".\n└─ 1K\n");
    }
}
