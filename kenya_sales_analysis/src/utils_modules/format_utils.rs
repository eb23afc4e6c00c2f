use crate::common::*;

#[doc = r#"
    Rounds `value` to `decimals` places, resolving exact halves to the even neighbour.

    Aggregates are carried at full precision; this is applied only when a value is
    displayed, so the printed average price and payment share never depend on the
    order in which the sums were accumulated.
"#]
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    let factor: f64 = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

#[doc = "Inserts `,` every three digits of an integer, keeping the sign."]
pub fn format_thousands(value: i64) -> String {
    let digits: String = value.unsigned_abs().to_string();
    let mut result: String = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (count, c) in digits.chars().enumerate() {
        if count > 0 && (digits.len() - count) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

#[doc = "Currency / fractional display: thousands separators and two decimals, e.g. `12,345.68`."]
pub fn format_amount(value: f64) -> String {
    let rounded: f64 = round_half_even(value, 2);
    let fixed: String = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let int_value: i64 = int_part.parse::<i64>().unwrap_or_default();
    let sign: &str = if rounded < 0.0 { "-" } else { "" };

    format!("{}{}.{}", sign, format_thousands(int_value), frac_part)
}

#[doc = "Fits `text` into `width` columns, cutting long values with `..`."]
pub fn fit_column(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return format!("{:<width$}", text, width = width);
    }

    let cut: String = text.chars().take(width.saturating_sub(2)).collect();
    format!("{}..", cut)
}

#[doc = "Writes a section header underlined with dashes."]
pub fn write_section_header<W: Write + ?Sized>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-45000), "-45,000");
    }

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(1234567.0), "1,234,567.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(-1000.456), "-1,000.46");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn half_even_rounding() {
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(12345.678, 2), 12345.68);
    }

    #[test]
    fn columns_are_padded_or_cut() {
        assert_eq!(fit_column("TV", 5), "TV   ");
        assert_eq!(fit_column("Water Dispenser", 8), "Water ..");
    }
}
