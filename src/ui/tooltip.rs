use crate::render::scale::group_thousands;
use crate::state::record::{HealthRecord, XField, YField};

/// Hover text for one marker: the state name plus one line per axis with
/// the field's human label, value, and unit suffix. A pure function of the
/// current selections, recomputed at hover time.
pub fn tooltip_text(record: &HealthRecord, x_field: XField, y_field: YField) -> String {
    let x_line = match x_field {
        XField::Income => format!("{}: {}", x_field.label(), format_income(record.income)),
        _ => format!(
            "{}: {}{}",
            x_field.label(),
            format_value(x_field.value(record)),
            x_field.unit_suffix()
        ),
    };
    let y_line = format!(
        "{}: {}{}",
        y_field.label(),
        format_value(y_field.value(record)),
        y_field.unit_suffix()
    );
    format!("{}\n{}\n{}", record.state, x_line, y_line)
}

/// Whole-dollar US currency: `64222.0` -> `"$64,222"`. No cents are ever
/// rendered, so no trailing-substring trimming is needed.
pub fn format_income(value: f64) -> String {
    if !value.is_finite() {
        return "$-".to_string();
    }
    let negative = value < 0.0;
    let dollars = value.abs().round() as u64;
    let grouped = group_thousands(dollars);
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "-".to_string();
    }
    let s = format!("{v:.1}");
    let s = s.trim_end_matches('0');
    s.trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HealthRecord {
        HealthRecord {
            state: "Texas".to_string(),
            abbr: "TX".to_string(),
            poverty: 17.2,
            age: 34.3,
            income: 54727.0,
            healthcare: 22.1,
            smokes: 15.4,
            obesity: 32.4,
        }
    }

    #[test]
    fn default_selection_tooltip() {
        let text = tooltip_text(&sample(), XField::Poverty, YField::Healthcare);
        assert_eq!(text, "Texas\nPoverty: 17.2%\nHealthcare: 22.1%");
    }

    #[test]
    fn age_uses_years_suffix() {
        let text = tooltip_text(&sample(), XField::Age, YField::Smokes);
        assert_eq!(text, "Texas\nAge: 34.3 yrs\nSmokes: 15.4%");
    }

    #[test]
    fn income_is_whole_dollar_currency() {
        let text = tooltip_text(&sample(), XField::Income, YField::Obesity);
        assert_eq!(text, "Texas\nIncome: $54,727\nObesity: 32.4%");
    }

    #[test]
    fn income_never_carries_a_cents_artifact() {
        // Regression guard: naive "$54,727.00"-then-truncate formatting
        // leaves a trailing cents fragment. Verify no formatting path
        // re-introduces one.
        for income in [0.0, 999.0, 1000.0, 54727.0, 75000.5, 1234567.0] {
            let s = format_income(income);
            assert!(!s.ends_with(".00"), "cents artifact in {s}");
            assert!(!s.contains('.'), "fractional dollars in {s}");
            assert!(s.starts_with('$'));
        }
        assert_eq!(format_income(54727.0), "$54,727");
        assert_eq!(format_income(999.0), "$999");
        assert_eq!(format_income(75000.5), "$75,001");
    }

    #[test]
    fn nan_values_render_as_dashes() {
        let mut r = sample();
        r.income = f64::NAN;
        r.healthcare = f64::NAN;
        let text = tooltip_text(&r, XField::Income, YField::Healthcare);
        assert_eq!(text, "Texas\nIncome: $-\nHealthcare: -%");
    }
}
