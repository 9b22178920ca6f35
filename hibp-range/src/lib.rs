//! Password exposure checks against the Have I Been Pwned Pwned Passwords
//! corpus using the k-Anonymity range API.
//!
//! A candidate is hashed with SHA-1 and rendered as 40 uppercase hex
//! characters. Only the first 5 characters are sent to
//! `https://api.pwnedpasswords.com/range/{PREFIX}`; the service answers with
//! every known `SUFFIX:COUNT` sharing that prefix and the remaining 35
//! characters are matched locally. Neither the password nor its full digest
//! ever leaves the process.
//!
//! ```no_run
//! use hibp_range::{ClientConfig, ExposureChecker, RangeClient, build_digest};
//!
//! # async fn run() -> Result<(), hibp_range::Error> {
//! let checker = ExposureChecker::new(RangeClient::new(ClientConfig::default())?);
//! let digest = build_digest("password123", false)?;
//! if checker.check_exposure(&digest).await? {
//!     println!("password123 has been seen in a breach");
//! }
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod client;
pub mod digest;
pub mod error;
pub mod range;

pub use checker::{ExposureChecker, Verdict};
pub use client::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT, RangeClient, RangeSource};
pub use digest::{DIGEST_HEX_LEN, Digest, HEX_CHARS, PREFIX_LEN, SUFFIX_LEN, build_digest};
pub use error::Error;
pub use range::{RangeRecord, find_suffix, parse_record, records};
