use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{ArgAction, Parser};
use hibp_range::{ClientConfig, DEFAULT_API_URL};

/// Input file read when no passwords are given on the command line.
pub const DEFAULT_INPUT: &str = "passwords.txt";

#[derive(Parser, Debug)]
#[command(name = "hibp-check")]
#[command(version)]
#[command(about = "Check passwords against Have I Been Pwned using k-Anonymity range queries")]
#[command(
    long_about = "Check passwords against Have I Been Pwned using k-Anonymity range queries.\n\n\
                  Each password is hashed locally with SHA-1 and only the first 5 hex characters \
                  of the hash are sent to the Pwned Passwords API."
)]
pub struct Args {
    /// Passwords (or SHA-1 hashes with --hashed) to check; the input file is ignored when given
    #[arg(value_name = "PASSWORD")]
    pub passwords: Vec<OsString>,

    /// Input file containing passwords to check, one per line
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Inputs are already SHA-1 hashed (40 hex characters)
    #[arg(long)]
    pub hashed: bool,

    /// Hide passwords in output
    #[arg(long)]
    pub hide: bool,

    /// Show statistics after completion
    #[arg(long)]
    pub stats: bool,

    /// Show credits
    #[arg(short, long)]
    pub credits: bool,

    /// Ask the API to pad responses so their size does not hint at the prefix
    #[arg(long)]
    pub padding: bool,

    /// Base URL of the range API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Disable progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            user_agent: concat!("hibp-check/", env!("CARGO_PKG_VERSION")).to_string(),
            add_padding: self.padding,
        }
    }

    /// Whether the input file is the implicit default rather than one the
    /// user asked for.
    pub fn uses_default_input(&self) -> bool {
        self.input == Path::new(DEFAULT_INPUT)
    }

    /// Log filter for the requested verbosity, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hibp-check"]).unwrap();
        assert!(args.passwords.is_empty());
        assert!(args.uses_default_input());
        assert!(!args.hashed && !args.hide && !args.stats && !args.credits && !args.padding);
        assert_eq!(args.log_filter(), "warn");

        let config = args.client_config();
        assert_eq!(config.base_url, "https://api.pwnedpasswords.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.add_padding);
    }

    #[test]
    fn test_passwords_and_flags() {
        let args = Args::try_parse_from([
            "hibp-check",
            "--hashed",
            "--hide",
            "--stats",
            "--padding",
            "-vv",
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8",
            "CBFDAC6008F9CAB4083784CBD1874F76618D2A97",
        ])
        .unwrap();

        assert_eq!(args.passwords.len(), 2);
        assert!(args.hashed && args.hide && args.stats);
        assert!(args.client_config().add_padding);
        assert_eq!(args.log_filter(), "debug");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_password_argument() {
        use std::os::unix::ffi::OsStringExt;

        let password = OsString::from_vec(b"p\xe4ssword".to_vec());
        let args = Args::try_parse_from([OsString::from("hibp-check"), password.clone()]).unwrap();
        assert_eq!(args.passwords, vec![password]);
    }

    #[test]
    fn test_input_file() {
        let args = Args::try_parse_from(["hibp-check", "-i", "leaked.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("leaked.txt"));
        assert!(!args.uses_default_input());
    }

    #[test]
    fn test_timeout_must_be_positive() {
        assert!(Args::try_parse_from(["hibp-check", "--timeout", "0"]).is_err());

        let args = Args::try_parse_from(["hibp-check", "--timeout", "3"]).unwrap();
        assert_eq!(args.client_config().timeout, Duration::from_secs(3));
    }
}
