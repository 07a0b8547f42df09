//! Generadores de ejercicios sintéticos para los niveles por encima del
//! banco fijo. Los datos se sortean, pero `expected_output` y
//! `reference_solution` se derivan de esos mismos datos, así que siempre
//! son coherentes entre sí.

use crate::model::Question;
use rand::Rng;
use rand::seq::IndexedRandom;

const WORD_POOL: [&str; 5] = ["algorithm", "challenge", "programming", "openai", "python"];

/// Elige un generador al azar y lo aplica al nivel.
pub fn generate(level: u32) -> Question {
    // Los parámetros de dificultad restan 5; por debajo del primer nivel
    // sintético se genera como si fuera el 6.
    let level = level.max(6);
    let mut rng = rand::rng();
    match rng.random_range(0..5) {
        0 => filtered_sum(level),
        1 => star_square(level),
        2 => list_average(level, &mut rng),
        3 => reverse_and_upper(level, &mut rng),
        _ => bounded_even_count(level, &mut rng),
    }
}

/// Suma de los enteros divisibles por 3 entre 1 y un límite que crece con
/// el nivel. Sin datos aleatorios: la dificultad la marca el límite.
fn filtered_sum(level: u32) -> Question {
    let limit = (level - 5) * 4 + 10;
    let total: u32 = (1..=limit).filter(|i| i % 3 == 0).sum();

    Question {
        title: format!("Lv.{level}: suma con filtro"),
        description: format!(
            "Calcula la suma de todos los enteros entre 1 y {limit} que sean divisibles por 3 e imprime el resultado."
        ),
        preset_code: String::new(),
        expected_output: total.to_string(),
        hints: vec![
            "Usa un bucle for con range".into(),
            "Dentro del bucle comprueba if i % 3 == 0".into(),
        ],
        reference_solution: format!(
            "total = 0\nfor i in range(1, {}):\n    if i % 3 == 0:\n        total += i\nprint(total)",
            limit + 1
        ),
    }
}

/// Cuadrado de asteriscos cuyo lado crece con el nivel.
fn star_square(level: u32) -> Question {
    let size = (level - 5) as usize + 3;
    let expected = vec!["*".repeat(size); size].join("\n");

    Question {
        title: format!("Lv.{level}: cuadrado de asteriscos"),
        description: format!(
            "Usa un bucle para dibujar un cuadrado de asteriscos (`*`) de {size}x{size}."
        ),
        preset_code: String::new(),
        expected_output: expected,
        hints: vec![
            format!("Usa range({size})"),
            "Dentro del bucle imprime '*' * size".into(),
        ],
        reference_solution: format!("size = {size}\nfor i in range(size):\n    print(\"*\" * size)"),
    }
}

/// Media (parte entera) de una lista de enteros sorteados.
fn list_average(level: u32, rng: &mut impl Rng) -> Question {
    let list_len = (4 + level / 3) as usize;
    let nums: Vec<i64> = (0..list_len).map(|_| rng.random_range(5..=15)).collect();
    let average = nums.iter().sum::<i64>() / nums.len() as i64;
    let nums_py = python_list(&nums);

    Question {
        title: format!("Lv.{level}: media de una lista"),
        description: format!(
            "La lista `nums = {nums_py}` ya está definida. Calcula la media de sus elementos (solo la parte entera) e imprímela."
        ),
        preset_code: format!("nums = {nums_py}"),
        expected_output: average.to_string(),
        hints: vec![
            "Primero suma todo y divide entre len(nums)".into(),
            "Usa la división entera //".into(),
        ],
        reference_solution: format!(
            "nums = {nums_py}\ntotal = 0\nfor n in nums:\n    total += n\navg = total // len(nums)\nprint(avg)"
        ),
    }
}

/// Invertir una palabra sorteada y pasarla a mayúsculas.
fn reverse_and_upper(level: u32, rng: &mut impl Rng) -> Question {
    let word = *WORD_POOL.choose(rng).unwrap_or(&WORD_POOL[0]);
    let reversed_upper: String = word.chars().rev().collect::<String>().to_uppercase();

    Question {
        title: format!("Lv.{level}: invertir y en mayúsculas"),
        description: format!(
            "La variable `word = '{word}'` ya está definida. Invierte la cadena, pásala a mayúsculas e imprime el resultado."
        ),
        preset_code: format!("word = '{word}'"),
        expected_output: reversed_upper,
        hints: vec![
            "Invierte con el corte [::-1]".into(),
            "Aplica el método .upper()".into(),
        ],
        reference_solution: format!(
            "word = '{word}'\nreversed_word = word[::-1]\nfinal_result = reversed_word.upper()\nprint(final_result)"
        ),
    }
}

/// Contar los pares dentro de un rango abierto; tanto el rango como la
/// longitud de la lista crecen con el nivel.
fn bounded_even_count(level: u32, rng: &mut impl Rng) -> Question {
    let lower = ((level - 5) + 3) as i64;
    let upper = lower + 5;
    let list_len = (7 + level / 4) as usize;
    let nums: Vec<i64> = (0..list_len).map(|_| rng.random_range(1..=15)).collect();
    let count = nums
        .iter()
        .filter(|&&n| n > lower && n < upper && n % 2 == 0)
        .count();
    let nums_py = python_list(&nums);

    Question {
        title: format!("Lv.{level}: filtro con doble condición"),
        description: format!(
            "La lista `nums = {nums_py}` ya está definida. Cuenta cuántos números son mayores que {lower}, menores que {upper} y además pares, e imprime ese total."
        ),
        preset_code: format!("nums = {nums_py}\nlower = {lower}\nupper = {upper}"),
        expected_output: count.to_string(),
        hints: vec![
            "Necesitas dos if anidados o un if con and".into(),
            "Al final imprime el contador".into(),
        ],
        reference_solution: format!(
            "nums = {nums_py}\nlower = {lower}\nupper = {upper}\ncount = 0\nfor n in nums:\n    if n > lower and n < upper:\n        if n % 2 == 0:\n            count += 1\nprint(count)"
        ),
    }
}

/// Literal de lista con la misma forma que imprime Python: `[1, 2, 3]`.
fn python_list(nums: &[i64]) -> String {
    let items: Vec<String> = nums.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_list_matches_python_repr() {
        assert_eq!(python_list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(python_list(&[]), "[]");
    }

    #[test]
    fn filtered_sum_is_internally_consistent() {
        for level in 6..=15 {
            let q = filtered_sum(level);
            let limit = (level - 5) * 4 + 10;
            let total: u32 = (1..=limit).filter(|i| i % 3 == 0).sum();
            assert_eq!(q.expected_output, total.to_string());
            assert!(q.reference_solution.contains(&format!("range(1, {})", limit + 1)));
        }
    }

    #[test]
    fn star_square_expected_has_square_shape() {
        let q = star_square(8);
        let lines: Vec<&str> = q.expected_output.split('\n').collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| *l == "******"));
    }

    #[test]
    fn list_average_embeds_the_same_numbers_everywhere() {
        let mut rng = rand::rng();
        let q = list_average(9, &mut rng);
        let nums_literal = q.preset_code.strip_prefix("nums = ").expect("preset con nums");
        assert!(q.description.contains(nums_literal));
        assert!(q.reference_solution.starts_with(&format!("nums = {nums_literal}")));
    }

    #[test]
    fn reverse_and_upper_expected_is_derived_from_the_word() {
        let mut rng = rand::rng();
        let q = reverse_and_upper(7, &mut rng);
        let word = q
            .preset_code
            .trim_start_matches("word = '")
            .trim_end_matches('\'');
        let derived: String = word.chars().rev().collect::<String>().to_uppercase();
        assert_eq!(q.expected_output, derived);
    }

    #[test]
    fn difficulty_parameters_scale_with_level() {
        let easy = filtered_sum(6);
        let hard = filtered_sum(20);
        let parse = |q: &Question| -> u32 { q.expected_output.parse().unwrap() };
        assert!(parse(&hard) > parse(&easy));

        assert!(star_square(12).expected_output.len() > star_square(6).expected_output.len());
    }

    #[test]
    fn generate_covers_high_levels_without_panicking() {
        for level in 6..=30 {
            let q = generate(level);
            assert!(q.title.starts_with(&format!("Lv.{level}")));
            assert!(!q.expected_output.is_empty());
            assert!(!q.reference_solution.is_empty());
        }
    }
}
