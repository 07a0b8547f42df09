/// Avisos de estilo previos al veredicto: variables que el enunciado ya
/// define y que el usuario vuelve a definir en su envío.
pub fn style_warnings(preset_code: &str, user_code: &str) -> Vec<String> {
    let preset_names = assigned_names(preset_code);
    let user_names = assigned_names(user_code);

    preset_names
        .into_iter()
        .filter(|name| user_names.contains(name))
        .map(|name| {
            format!(
                "⚠ El enunciado ya define `{name}`; úsala directamente, no hace falta redefinirla."
            )
        })
        .collect()
}

/// Nombres asignados con un `nombre = valor` simple a nivel de línea.
/// Ignora comparaciones, asignaciones aumentadas e índices.
fn assigned_names(code: &str) -> Vec<String> {
    code.lines()
        .filter_map(|line| {
            let (lhs, rhs) = line.trim().split_once('=')?;
            if rhs.starts_with('=') {
                return None; // comparación ==
            }
            let lhs = lhs.trim();
            let is_identifier = !lhs.is_empty()
                && lhs.chars().all(|c| c.is_alphanumeric() || c == '_')
                && !lhs.chars().next().is_some_and(|c| c.is_ascii_digit());
            if is_identifier {
                Some(lhs.to_string())
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_when_preset_variable_is_redefined() {
        let warnings = style_warnings("price = 5\ncount = 3", "price = 7\nprint(price)");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("`price`"));
    }

    #[test]
    fn ignores_comparisons_augmented_and_indexed_assignments() {
        let preset = "inventory = {'apple': 10}\nx = 1";
        let user = "if x == 1:\n    inventory['apple'] += 3\nprint(x)";
        assert!(style_warnings(preset, user).is_empty());
    }

    #[test]
    fn no_warnings_without_preset_code() {
        assert!(style_warnings("", "x = 1\nprint(x)").is_empty());
    }
}
