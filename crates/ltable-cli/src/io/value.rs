// crates/ltable-cli/src/io/value.rs

use anyhow::{bail, Context, Result};

/// Parse a packed record: decimal, or hex with a 0x/0X prefix.
pub fn parse_packed(s: &str) -> Result<u32> {
    let t = s.trim();
    if t.is_empty() {
        bail!("empty record value");
    }
    let v = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).with_context(|| format!("parse hex record {t:?}"))?,
        None => t.parse::<u32>().with_context(|| format!("parse decimal record {t:?}"))?,
    };
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_decimal_and_hex() {
        assert_eq!(parse_packed("4278190335").unwrap(), 0xFF00_00FF);
        assert_eq!(parse_packed("0xFF0000FF").unwrap(), 0xFF00_00FF);
        assert_eq!(parse_packed(" 0xff ").unwrap(), 0xFF);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_packed("").is_err());
        assert!(parse_packed("0x1_0000_0000").is_err());
        assert!(parse_packed("-1").is_err());
    }
}
