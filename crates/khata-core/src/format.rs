//! Money formatting for presentation layers.
//!
//! Frontends render amounts as a currency symbol plus a grouped integer
//! part, with `INR` using the Indian numbering system (`₹1,50,000`). Locale
//! handling beyond digit grouping stays with the embedding UI.

use khata_domain::Transaction;

/// Formats amounts for a single currency.
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    symbol: String,
    indian_grouping: bool,
}

impl AmountFormatter {
    pub fn new(symbol: impl Into<String>, indian_grouping: bool) -> Self {
        Self {
            symbol: symbol.into(),
            indian_grouping,
        }
    }

    /// Picks symbol and grouping from an ISO currency code. Unknown codes
    /// fall back to the code itself as a prefix.
    pub fn for_currency(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "INR" => Self::new("₹", true),
            "USD" => Self::new("$", false),
            "EUR" => Self::new("€", false),
            "GBP" => Self::new("£", false),
            other => Self::new(format!("{other} "), false),
        }
    }

    /// Renders an amount rounded to two decimals, omitting the fraction for
    /// whole amounts.
    pub fn format(&self, amount: f64) -> String {
        let negative = amount < 0.0;
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let fraction = cents % 100;

        let grouped = if self.indian_grouping {
            group_indian(whole)
        } else {
            group_western(whole)
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&grouped);
        if fraction > 0 {
            out.push_str(&format!(".{fraction:02}"));
        }
        out
    }

    /// List-item rendering: expenses prefixed `-`, income `+`.
    pub fn format_signed(&self, transaction: &Transaction) -> String {
        let sign = if transaction.is_expense() { '-' } else { '+' };
        format!("{sign}{}", self.format(transaction.amount))
    }
}

fn group_western(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Indian grouping: the last three digits form one group, everything above
// groups in twos (12,34,567).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        groups.push(back);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
