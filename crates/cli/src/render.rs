//! Display formatting for money and carts.

use domain::{Cart, Money};

use crate::config::Config;

/// Formats `amount` with the configured currency symbol and thousands
/// separators, e.g. `₦350,000.00`.
pub fn format_money(config: &Config, amount: Money) -> String {
    let plain = amount.to_string();
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{}{grouped}.{fraction}", config.currency_symbol)
}

/// Renders the cart contents and total.
pub fn cart_contents(config: &Config, cart: &Cart) -> String {
    let mut out = String::from("Cart Contents:\n");
    for line in cart.lines() {
        out.push_str(&format!(
            "  {} x {} @ {} = {}\n",
            line.product().name(),
            line.quantity(),
            format_money(config, line.product().unit_price()),
            format_money(config, line.line_total()),
        ));
    }
    out.push_str(&format!("  Total: {}\n", format_money(config, cart.total())));
    out
}
