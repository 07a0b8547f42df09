pub fn normalize_newlines(value: &str) -> String {
    value.replace("\r\n", "\n")
}

/// Comparación estricta: se normalizan saltos de línea y se ignora el
/// espacio en blanco final, el resto debe coincidir byte a byte.
pub fn matches_expected_output(received: &str, expected: &str) -> bool {
    received.trim_end() == expected.trim_end()
}

pub fn line_diff(expected: &str, received: &str) -> String {
    let expected_norm = normalize_newlines(expected);
    let received_norm = normalize_newlines(received);
    let exp: Vec<&str> = expected_norm.trim_end().split('\n').collect();
    let rec: Vec<&str> = received_norm.trim_end().split('\n').collect();
    let max_lines = exp.len().max(rec.len());

    for i in 0..max_lines {
        let e = exp.get(i).copied().unwrap_or("<sin línea>");
        let r = rec.get(i).copied().unwrap_or("<sin línea>");
        if e != r {
            return format!("Línea {}\n- esperado: {:?}\n+ recibido: {:?}", i + 1, e, r);
        }
    }

    "Diferencia no localizada (posible carácter invisible).".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_whitespace_is_ignored() {
        assert!(matches_expected_output("15\n", "15"));
        assert!(matches_expected_output("2\n4", "2\n4\n"));
    }

    #[test]
    fn inner_whitespace_is_significant() {
        assert!(!matches_expected_output("2 4", "2\n4"));
        assert!(!matches_expected_output("hello python", "Hello Python"));
    }

    #[test]
    fn diff_points_at_first_divergent_line() {
        let diff = line_diff("2\n4", "2\n5");
        assert!(diff.contains("Línea 2"));
    }
}
