//! Formatting helpers shared by every presentation of a creator.

/// Group digits in threes, e.g. `2800000` becomes `2,800,000`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One decimal place followed by a star, e.g. `4.9★`.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}\u{2605}", rating)
}
