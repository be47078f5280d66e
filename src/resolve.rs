//! Positional parameter resolution.
//!
//! Tokens are consumed in each scheme's fixed order; missing trailing tokens
//! keep their documented defaults. Only syntax is checked here: ranges are
//! the adapter's business.

use crate::error::{HarnessError, HarnessResult};
use passe_adapter::{Argon2Parameters, BcryptParameters, SchemeParams};
use tracing::warn;

/// Parameters that can be filled from positional CLI tokens.
pub trait Positional: SchemeParams {
    /// Parameter names, in the order their tokens appear.
    const NAMES: &'static [&'static str];

    /// Store the value of the parameter at `index` in [`NAMES`](Self::NAMES).
    fn assign(&mut self, index: usize, value: u32);
}

impl Positional for BcryptParameters {
    const NAMES: &'static [&'static str] = &["cost"];

    fn assign(&mut self, index: usize, value: u32) {
        if index == 0 {
            self.cost = value;
        }
    }
}

impl Positional for Argon2Parameters {
    const NAMES: &'static [&'static str] = &["time_cost", "memory_cost", "parallelism"];

    fn assign(&mut self, index: usize, value: u32) {
        match index {
            0 => self.time_cost = value,
            1 => self.memory_cost_kib = value,
            2 => self.parallelism = value,
            _ => {}
        }
    }
}

/// Resolve positional tokens into a parameter set.
pub fn resolve<P: Positional>(tokens: &[String]) -> HarnessResult<P> {
    let mut params = P::default();
    for (index, (token, name)) in tokens.iter().zip(P::NAMES.iter().copied()).enumerate() {
        let value = parse_token(token).ok_or_else(|| HarnessError::InvalidParameter {
            position: index + 1,
            name,
            token: token.clone(),
        })?;
        params.assign(index, value);
    }

    if tokens.len() > P::NAMES.len() {
        warn!(
            scheme = %P::SCHEME,
            ignored = tokens.len() - P::NAMES.len(),
            "Ignoring extra parameter tokens"
        );
    }
    Ok(params)
}

fn parse_token(token: &str) -> Option<u32> {
    token.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_tokens_gives_defaults() {
        assert_eq!(resolve::<BcryptParameters>(&[]).unwrap(), BcryptParameters { cost: 4 });
        assert_eq!(
            resolve::<Argon2Parameters>(&[]).unwrap(),
            Argon2Parameters {
                time_cost: 2,
                memory_cost_kib: 19_456,
                parallelism: 1,
            }
        );
    }

    #[test]
    fn test_trailing_tokens_default() {
        let params: Argon2Parameters = resolve(&tokens(&["3", "65536"])).unwrap();
        assert_eq!(params.time_cost, 3);
        assert_eq!(params.memory_cost_kib, 65_536);
        assert_eq!(params.parallelism, 1);
    }

    #[test]
    fn test_all_tokens_in_order() {
        let params: Argon2Parameters = resolve(&tokens(&["1", "1024", "4"])).unwrap();
        assert_eq!((params.time_cost, params.memory_cost_kib, params.parallelism), (1, 1024, 4));

        let params: BcryptParameters = resolve(&tokens(&["12"])).unwrap();
        assert_eq!(params.cost, 12);
    }

    #[test]
    fn test_out_of_range_cost_passes_resolution() {
        // The adapter, not the resolver, rejects this
        let params: BcryptParameters = resolve(&tokens(&["99"])).unwrap();
        assert_eq!(params.cost, 99);
    }

    #[test]
    fn test_non_integer_names_token_and_position() {
        let err = resolve::<Argon2Parameters>(&tokens(&["2", "lots"])).unwrap_err();
        assert_eq!(
            err,
            HarnessError::InvalidParameter {
                position: 2,
                name: "memory_cost",
                token: "lots".to_string(),
            }
        );
    }

    #[test]
    fn test_negative_and_overflowing_tokens_rejected() {
        for bad in ["-1", "4294967296", "", "1.5", "0x10"] {
            let err = resolve::<BcryptParameters>(&tokens(&[bad])).unwrap_err();
            assert_eq!(err.error_code(), "invalid_parameter", "token {bad:?}");
        }
    }

    #[test]
    fn test_surrounding_whitespace_accepted() {
        let params: BcryptParameters = resolve(&tokens(&[" 6 "])).unwrap();
        assert_eq!(params.cost, 6);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let params: BcryptParameters = resolve(&tokens(&["5", "extra", "more"])).unwrap();
        assert_eq!(params.cost, 5);
    }
}
