//! Утилиты форматирования чисел для таблиц и карточек KPI

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки
///
/// # Примеры
///
/// ```
/// # use ppo_frontend::shared::components::table::number_format::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let formatted = format!("{:.prec$}", value, prec = decimals.min(6));

    // Разделяем целую и дробную части
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    // Вставляем запятые каждые 3 цифры с конца
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Сокращённая запись объёмов: 1.2K, 3.4M, 5.6B
///
/// # Примеры
///
/// ```
/// # use ppo_frontend::shared::components::table::number_format::format_compact;
/// assert_eq!(format_compact(1_260_000.0), "1.3M");
/// ```
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format_number_with_decimals(value, 0)
    }
}

/// Процент со знаком: "+4.5%", "-1.2%"
pub fn format_signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Денежное значение: "$1,234.50"
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number_with_decimals(-value, 2))
    } else {
        format!("${}", format_number_with_decimals(value, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.891, 3), "1,234,567.891");
        assert_eq!(format_number_with_decimals(f64::NAN, 2), "-");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-123456.0), "-123,456");
        assert_eq!(format_number_int(-12.0), "-12");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(1_500.0), "1.5K");
        assert_eq!(format_compact(2_340_000.0), "2.3M");
        assert_eq!(format_compact(-7_100_000_000.0), "-7.1B");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(4.54), "+4.5%");
        assert_eq!(format_signed_percent(-1.24), "-1.2%");
        assert_eq!(format_signed_percent(0.0), "0.0%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-3.0), "-$3.00");
    }
}
