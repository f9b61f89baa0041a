use {
    super::error::PayoutError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Fee Atlantic deducts from the balance on a withdraw-all.
pub const WITHDRAW_FEE: u64 = 2_000;

/// Explicit amounts must be strictly greater than this.
pub const MIN_NOMINAL_EXCLUSIVE: u64 = 2_000;

/// Resolved withdrawal amount in rupiah. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nominal(u64);

impl Nominal {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Indonesian grouping: `1234567` → `1.234.567`.
    pub fn to_rupiah(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Nominal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount as the client sent it; the form posts a string, scripts often a number.
/// Any other JSON value is kept so that withdraw-all can ignore it and explicit
/// mode can reject it as an invalid amount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RequestedAmount {
    Integer(i64),
    Decimal(f64),
    Text(String),
    Unparsable(serde_json::Value),
}

impl RequestedAmount {
    /// Integer reading of the amount. Text is parsed leniently: leading
    /// whitespace, an optional sign, then as many digits as are present.
    pub fn parse(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Decimal(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Decimal(_) => None,
            Self::Text(s) => parse_leading_int(s),
            Self::Unparsable(_) => None,
        }
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first().copied() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Derives the nominal to withdraw.
///
/// With `withdraw_all` the requested amount is ignored and the whole balance
/// minus [`WITHDRAW_FEE`] is taken. Otherwise the requested amount must parse
/// to an integer above [`MIN_NOMINAL_EXCLUSIVE`].
pub fn resolve_nominal(
    balance: u64,
    requested: Option<&RequestedAmount>,
    withdraw_all: bool,
) -> Result<Nominal, PayoutError> {
    if withdraw_all {
        let nominal = balance.saturating_sub(WITHDRAW_FEE);
        if nominal == 0 {
            return Err(PayoutError::InsufficientBalance(
                "Saldo tidak cukup untuk withdraw".into(),
            ));
        }
        return Ok(Nominal(nominal));
    }

    match requested.and_then(RequestedAmount::parse) {
        Some(n) if n > MIN_NOMINAL_EXCLUSIVE as i64 => Ok(Nominal(n as u64)),
        _ => Err(PayoutError::InvalidAmount("Nominal minimal Rp 2,001".into())),
    }
}
