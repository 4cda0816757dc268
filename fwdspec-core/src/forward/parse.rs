//! Scalar grammar for `<local>:<service>:<remote>`.
//!
//! The grammar is positional: segment 2 is always the service name, so an
//! input like `8080:8081:svc` is rejected because `8081` is numeric, not
//! reinterpreted with the name moved to the end. Checks run in a fixed
//! order and the first failure wins.

use super::GlobalForward;
use crate::error::ForwardError;

/// Segment separator of the scalar form.
pub const SEPARATOR: char = ':';

/// Parses a forward from its scalar form.
///
/// # Errors
///
/// Returns exactly one [`ForwardError`], checked in this order:
/// 1. [`ForwardError::WrongPartCount`] unless there are exactly three segments
/// 2. [`ForwardError::EmptyField`] if any segment is empty
/// 3. [`ForwardError::InvalidLocalPort`] if segment 1 is not a port
/// 4. [`ForwardError::ServiceNameMustNotBeNumeric`] if segment 2 is numeric
/// 5. [`ForwardError::InvalidRemotePort`] if segment 3 is not a port
pub fn parse(text: &str) -> Result<GlobalForward, ForwardError> {
    let parts: Vec<&str> = text.split(SEPARATOR).collect();

    let [local, service, remote] = parts[..] else {
        return Err(ForwardError::WrongPartCount {
            input: text.to_string(),
            found: parts.len(),
        });
    };

    if parts.iter().any(|part| part.is_empty()) {
        return Err(ForwardError::EmptyField {
            input: text.to_string(),
        });
    }

    let local = parse_port(local).ok_or_else(|| ForwardError::InvalidLocalPort {
        input: text.to_string(),
        value: local.to_string(),
    })?;

    if is_numeric(service) {
        return Err(ForwardError::ServiceNameMustNotBeNumeric {
            input: text.to_string(),
            value: service.to_string(),
        });
    }

    let remote = parse_port(remote).ok_or_else(|| ForwardError::InvalidRemotePort {
        input: text.to_string(),
        value: remote.to_string(),
    })?;

    Ok(GlobalForward::from_checked(local, service.to_string(), remote))
}

/// Parses a port in canonical decimal form (1-65535).
///
/// Signs, leading zeros and surrounding whitespace are rejected so that
/// rendering an accepted port reproduces the original text.
fn parse_port(segment: &str) -> Option<u16> {
    if segment.starts_with('0') || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Whether a segment reads as an integer: optional sign, then digits.
fn is_numeric(segment: &str) -> bool {
    let digits = segment.strip_prefix(['+', '-']).unwrap_or(segment);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
