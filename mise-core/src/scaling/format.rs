//! Display formatting for scaled amounts.

use crate::amount::VULGAR_FRACTIONS;
use crate::scaling::scaler::round2;

/// Format an amount for display.
///
/// - Whole numbers render plainly: 4.0 → "4"
/// - Common eighths and thirds render as unicode fractions: 0.5 → "½", 1.5 → "1 ½"
/// - Anything else renders to two decimals without trailing zeros: 3.10 → "3.1"
pub fn format_amount(amount: f64) -> String {
    let amount = without_negative_zero(amount);
    if amount.fract() == 0.0 {
        return format!("{amount:.0}");
    }

    if amount > 0.0 {
        let whole = amount.trunc();
        let thousandths = ((amount - whole) * 1000.0).round() as i64;
        let glyph = VULGAR_FRACTIONS.iter().find_map(|(num, denom, glyph)| {
            let canonical = (f64::from(*num) / f64::from(*denom) * 1000.0).round() as i64;
            (canonical == thousandths).then_some(*glyph)
        });

        if let Some(glyph) = glyph {
            return if whole == 0.0 {
                glyph.to_string()
            } else {
                format!("{whole:.0} {glyph}")
            };
        }
    }

    let rounded = without_negative_zero(round2(amount));
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
