use crate::shared::icons::icon;
use leptos::prelude::*;

fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Count to show (None = loading)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Highlight the card when the count is non-zero
    #[prop(optional)]
    warn_when_positive: bool,
) -> impl IntoView {
    let status_class = move || match value.get() {
        Some(v) if warn_when_positive && v > 0 => "stat-card stat-card--warning",
        _ => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "-".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
