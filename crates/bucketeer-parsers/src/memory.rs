//! Memory limit parsing for `#SBATCH --mem` values.

/// Parse an sbatch memory limit to megabytes.
///
/// Accepts the suffixes sbatch understands for `--mem`:
/// "4G", "1000M", "4096K", "1T", and a bare number meaning megabytes.
/// Suffixes are case-insensitive.
///
/// Returns None for empty strings or values sbatch would reject.
pub fn parse_memory_mb(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (digits, multiplier_kb) = match s.chars().last()? {
        'T' | 't' => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        'G' | 'g' => (&s[..s.len() - 1], 1024 * 1024),
        'M' | 'm' => (&s[..s.len() - 1], 1024),
        'K' | 'k' => (&s[..s.len() - 1], 1),
        // Assume MB if no suffix
        _ => (s, 1024),
    };

    digits
        .parse::<u64>()
        .ok()
        .map(|v| v.saturating_mul(multiplier_kb) / 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory_suffixes() {
        assert_eq!(parse_memory_mb("1G"), Some(1024));
        assert_eq!(parse_memory_mb("4g"), Some(4096));
        assert_eq!(parse_memory_mb("1000M"), Some(1000));
        assert_eq!(parse_memory_mb("4096K"), Some(4));
        assert_eq!(parse_memory_mb("1T"), Some(1024 * 1024));
        assert_eq!(parse_memory_mb("4096"), Some(4096));
    }

    #[test]
    fn test_parse_memory_invalid() {
        assert_eq!(parse_memory_mb(""), None);
        assert_eq!(parse_memory_mb("G"), None);
        assert_eq!(parse_memory_mb("1.5G"), None);
        assert_eq!(parse_memory_mb("lots"), None);
    }
}
