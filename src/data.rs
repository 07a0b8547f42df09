// src/data.rs

use crate::generators;
use crate::model::Question;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

/// Carga el banco fijo de preguntas desde el YAML embebido
pub fn read_static_bank() -> BTreeMap<u32, Vec<Question>> {
    let file_content = include_str!("data/static_bank.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}

/// Devuelve un ejercicio para el nivel pedido: elección uniforme dentro del
/// banco fijo, o una pregunta sintética cuando el nivel lo supera.
pub fn get_question(level: u32) -> Question {
    let bank = read_static_bank();
    let mut rng = rand::rng();

    if let Some(question) = bank.get(&level).and_then(|qs| qs.choose(&mut rng)) {
        question.clone()
    } else {
        generators::generate(level)
    }
}
