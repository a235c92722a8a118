//! Randomized password generation.
//!
//! A password is built as an exact per-class composition: quotas are
//! allocated in fixed priority order (specials, digits, uppercase,
//! lowercase), each clamped to the length still unallocated, and whatever
//! remains is filled with letters of either case. The assembled sequence
//! is shuffled before concatenation so character positions carry no
//! information about their class.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::charset;
use crate::types::{ClassCounts, GenerateError, Length, DEFAULTS};

/// Generate a password with the default length range and composition.
pub fn generate() -> String {
    // The built-in defaults cannot produce an invalid range.
    generate_with(Length::default(), &ClassCounts::default()).unwrap_or_default()
}

/// Generate a password using the thread-local random source.
pub fn generate_with(length: Length, counts: &ClassCounts) -> Result<String, GenerateError> {
    generate_with_rng(&mut rand::thread_rng(), length, counts)
}

/// Generate a password from a caller-supplied random source.
///
/// The algorithm only consumes uniform random values, so a CSPRNG such as
/// `rand::rngs::OsRng` can be substituted without changing its behavior.
/// The thread-local default is not suitable for security-sensitive use.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: Length,
    counts: &ClassCounts,
) -> Result<String, GenerateError> {
    let total = resolve_length(rng, length)?;

    let mut rest = total;
    let specials = take_quota(counts.specials, DEFAULTS.specials, &mut rest);
    let nums = take_quota(counts.nums, DEFAULTS.nums, &mut rest);
    let uppers = take_quota(counts.uppers, DEFAULTS.uppers, &mut rest);
    let lowers = take_quota(counts.lowers, DEFAULTS.lowers, &mut rest);
    trace!(
        "composition for length {total}: {specials} specials, {nums} digits, \
         {uppers} uppers, {lowers} lowers, {rest} filler"
    );

    let mut password: Vec<u8> = Vec::with_capacity(total);
    extend_from(rng, &mut password, charset::SPECIALS, specials);
    extend_from(rng, &mut password, charset::DIGITS, nums);
    extend_from(rng, &mut password, charset::UPPERCASE, uppers);
    extend_from(rng, &mut password, charset::LOWERCASE, lowers);
    extend_from(rng, &mut password, &charset::LETTERS, rest);

    password.shuffle(rng);
    Ok(String::from_utf8(password).expect("class tables are ASCII"))
}

fn resolve_length<R: Rng + ?Sized>(rng: &mut R, length: Length) -> Result<usize, GenerateError> {
    match length {
        Length::Fixed(n) => Ok(n),
        Length::Range { min, max } => {
            if min > max {
                return Err(GenerateError::InvalidRange { min, max });
            }
            Ok(rng.gen_range(min..=max))
        }
    }
}

/// Clamp a requested quota to the unallocated length and take it.
fn take_quota(requested: Option<usize>, default: usize, rest: &mut usize) -> usize {
    let quota = requested.unwrap_or(default).min(*rest);
    *rest -= quota;
    quota
}

fn extend_from<R: Rng + ?Sized>(rng: &mut R, out: &mut Vec<u8>, table: &str, count: usize) {
    let bytes = table.as_bytes();
    for _ in 0..count {
        out.push(bytes[rng.gen_range(0..bytes.len())]);
    }
}
