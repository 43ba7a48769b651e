//! IP, MAC and e-mail address generators.

use regex::Regex;
use tracing::debug;
use varietal_core::{Error, Generator, GeneratorKind, Result, Value};
use varietal_generate::{RandomSource, constant};

use crate::dictionary::{domains, names, surnames};

/// Largest number of addresses [`ip_range`] hands out.
pub const MAX_IP_RANGE: usize = 5000;

const HEX: &[u8] = b"FEDCBA9876543210";

/// Parses a dotted IPv4 address into its four octets.
pub fn parse_ip(text: &str) -> Result<[u8; 4]> {
    let pattern = Regex::new(r"^\s*(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})\s*$")
        .map_err(|err| Error::InvalidArgument(err.to_string()))?;
    let captures = pattern
        .captures(text)
        .ok_or_else(|| Error::InvalidArgument(format!("invalid IP address: {text}")))?;
    let mut octets = [0_u8; 4];
    for (index, octet) in octets.iter_mut().enumerate() {
        let segment = &captures[index + 1];
        *octet = segment.parse().map_err(|_| {
            Error::InvalidArgument(format!("invalid IP octet {segment} of IP: {text}"))
        })?;
    }
    Ok(octets)
}

/// Constant generators for every address from `from` to `to` inclusive.
///
/// Both addresses must share their first octet.
pub fn ip_range(from: &str, to: &str) -> Result<Vec<Generator>> {
    let (first, low, high) = host_bounds(from, to)?;
    let count = (high - low) as usize + 1;
    if count > MAX_IP_RANGE {
        return Err(Error::ResourceExhausted(format!(
            "{count} addresses requested, maximum range count is {MAX_IP_RANGE}"
        )));
    }
    debug!(from, to, count, "building IP range");
    Ok((low..=high)
        .map(|host| constant(format_ip(first, host)))
        .collect())
}

/// Random network values, available on every [`RandomSource`].
pub trait RandomNetwork: RandomSource {
    /// Random address in `[from, to)`; both must share their first octet.
    fn ip_address(&self, from: &str, to: &str) -> Result<Generator> {
        let (first, low, high) = host_bounds(from, to)?;
        let source = self.clone();
        Ok(Generator::from_fn(GeneratorKind::Random, move |_, _| {
            let host = source.next_int(i64::from(low), i64::from(high));
            Ok(Value::Text(format_ip(first, host as u32)))
        }))
    }

    /// `00` followed by five random hex pairs, separated by `delimiter`
    /// (`:` by default).
    fn mac_address(&self, delimiter: Option<&str>) -> Generator {
        let delimiter = delimiter.unwrap_or(":").to_string();
        let source = self.clone();
        Generator::from_fn(GeneratorKind::Random, move |_, _| {
            let mut mac = String::from("00");
            for _ in 0..5 {
                mac.push_str(&delimiter);
                for _ in 0..2 {
                    let index = source.next_int(0, HEX.len() as i64) as usize;
                    mac.push(char::from(HEX[index % HEX.len()]));
                }
            }
            Ok(Value::Text(mac))
        })
    }

    /// `name.surname@surname.domain`; every part is drawn separately.
    fn email_address(&self) -> Result<Generator> {
        let name = self.element(names().words().iter().map(String::as_str))?;
        let surname = self.element(surnames().words().iter().map(String::as_str))?;
        let domain = self.element(domains().words().iter().map(String::as_str))?;
        Ok(Generator::from_fn(GeneratorKind::Random, move |input, state| {
            let name = name.run(input, state)?.to_text();
            let user = surname.run(input, state)?.to_text();
            let host = surname.run(input, state)?.to_text();
            let domain = domain.run(input, state)?.to_text();
            Ok(Value::Text(format!("{name}.{user}@{host}.{domain}")))
        }))
    }
}

impl<R: RandomSource> RandomNetwork for R {}

/// First octet plus the ordered host parts (last three octets) of a range.
fn host_bounds(from: &str, to: &str) -> Result<(u8, u32, u32)> {
    let start = parse_ip(from)?;
    let end = parse_ip(to)?;
    if start[0] != end[0] {
        return Err(Error::InvalidArgument(format!(
            "IP range {from} - {to} spans more than one first octet"
        )));
    }
    let a = host_part(start);
    let b = host_part(end);
    Ok((start[0], a.min(b), a.max(b)))
}

fn host_part(ip: [u8; 4]) -> u32 {
    (u32::from(ip[1]) << 16) | (u32::from(ip[2]) << 8) | u32::from(ip[3])
}

fn format_ip(first: u8, host: u32) -> String {
    format!(
        "{first}.{}.{}.{}",
        (host >> 16) & 255,
        (host >> 8) & 255,
        host & 255
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ip_rejects_bad_octets() {
        assert_eq!(parse_ip("192.168.0.1").expect("valid"), [192, 168, 0, 1]);
        assert!(matches!(parse_ip("192.168.0.256"), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_ip("localhost"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn host_part_round_trips() {
        let host = host_part([10, 1, 2, 3]);
        assert_eq!(format_ip(10, host), "10.1.2.3");
    }

    #[test]
    fn ranges_across_first_octets_fail() {
        let err = ip_range("10.0.0.1", "11.0.0.1").expect_err("different networks");
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn oversized_ranges_fail() {
        let err = ip_range("10.0.0.0", "10.1.0.0").expect_err("too many addresses");
        assert!(matches!(err, Error::ResourceExhausted(_)));
    }
}
