use crate::models::criteria::is_active;

/// Conventional upper bound for open-ended ranges such as `"41+"`
pub const RANGE_UPPER_BOUND: i64 = 100;

/// Closed numeric interval parsed from a filter token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRange {
    /// Matches every value
    Any,
    /// Inclusive `[min, max]`
    Between(i64, i64),
}

impl AgeRange {
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        match *self {
            AgeRange::Any => true,
            AgeRange::Between(min, max) => value >= min && value <= max,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, AgeRange::Any)
    }
}

/// Parse a range token
///
/// Accepted forms: `"all"`, `"N-M"`, `"N+"` (up to [`RANGE_UPPER_BOUND`])
/// and a single `"N"`. Anything else, including `"N-M"` with `N > M`,
/// is treated as unconstrained so a malformed token never breaks a
/// filter pass.
pub fn parse_range(token: &str) -> AgeRange {
    let token = token.trim();
    if !is_active(token) {
        return AgeRange::Any;
    }

    let parsed = if let Some(lower) = token.strip_suffix('+') {
        parse_bound(lower).map(|min| (min, RANGE_UPPER_BOUND))
    } else if let Some((lower, upper)) = token.split_once('-') {
        parse_bound(lower).zip(parse_bound(upper))
    } else {
        parse_bound(token).map(|exact| (exact, exact))
    };

    match parsed {
        Some((min, max)) if min <= max => AgeRange::Between(min, max),
        _ => {
            tracing::debug!("Unrecognized range token {:?}, treating as unconstrained", token);
            AgeRange::Any
        }
    }
}

fn parse_bound(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
