use serde::{Deserialize, Serialize};

/// Número de fallos consecutivos antes de revelar la solución.
pub const ERROR_LIMIT: u32 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub preset_code: String, // Código ya definido por el enunciado
    pub expected_output: String,
    #[serde(default)]
    pub hints: Vec<String>,
    pub reference_solution: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserState {
    #[serde(default)]
    pub solved: bool,
    #[serde(default)]
    pub hint_index: u32,
    #[serde(default)]
    pub error_count: u32,
    #[serde(default)]
    pub user_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub question: Question,
    pub user_state: UserState,
}

impl HistoryEntry {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            user_state: UserState::default(),
        }
    }
}

/// Estado completo de una sesión. Es también el esquema de intercambio:
/// el autoguardado y los blobs de exportación serializan exactamente esto.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionState {
    pub level: u32,
    #[serde(default)]
    pub score: u32,
    pub review_history: Vec<HistoryEntry>,
    pub history_cursor: usize,
}

impl SessionState {
    /// Comprueba los invariantes estructurales tras deserializar.
    /// El historial nunca está vacío y el cursor siempre apunta dentro.
    pub fn validate(&self) -> Result<(), String> {
        if self.level < 1 {
            return Err("el nivel debe ser al menos 1".into());
        }
        if self.review_history.is_empty() {
            return Err("el historial no puede estar vacío".into());
        }
        if self.history_cursor >= self.review_history.len() {
            return Err(format!(
                "cursor {} fuera de rango (historial de {})",
                self.history_cursor,
                self.review_history.len()
            ));
        }
        Ok(())
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.review_history[self.history_cursor]
    }

    pub fn current_entry_mut(&mut self) -> &mut HistoryEntry {
        &mut self.review_history[self.history_cursor]
    }

    /// `true` si el cursor está en la última pregunta encontrada.
    pub fn at_tail(&self) -> bool {
        self.history_cursor + 1 == self.review_history.len()
    }
}
