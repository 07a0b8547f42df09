use super::*;
use crate::code_utils::style_warnings;
use crate::judge::{JudgeResult, format_judge_message};
use crate::model::{ERROR_LIMIT, UserState};

impl SessionApp {
    /// Envía el código del usuario al juez y aplica el veredicto.
    /// Devuelve `None` si el envío no procede (pregunta ya resuelta o
    /// respuesta en blanco).
    pub fn procesar_respuesta(&mut self, respuesta: &str) -> Option<JudgeResult> {
        if respuesta.trim().is_empty() {
            self.message = "⚠ Debes escribir código antes de enviar.".into();
            return None;
        }
        if !self.can_submit() {
            self.message =
                "Esta pregunta ya está resuelta. Usa «Rehacer» si quieres intentarla de nuevo."
                    .into();
            return None;
        }

        self.state.current_entry_mut().user_state.user_code = respuesta.to_string();

        let question = self.state.current_entry().question.clone();
        let result = self
            .judge
            .evaluate(&question.preset_code, respuesta, &question.expected_output);

        let forced_reveal = {
            let us = &mut self.state.current_entry_mut().user_state;
            if result == JudgeResult::Accepted {
                us.solved = true;
                us.error_count = 0;
                false
            } else if result.counts_as_attempt_failure() {
                us.error_count += 1;
                if us.error_count >= ERROR_LIMIT {
                    // Tres fallos seguidos: se revela la solución y la
                    // pregunta queda resuelta para garantizar el avance.
                    us.solved = true;
                    true
                } else {
                    false
                }
            } else {
                false
            }
        };

        let verdict_message = if forced_reveal {
            format!(
                "{}\n\n❌ Has fallado {ERROR_LIMIT} veces. Esta es la solución:\n{}",
                format_judge_message(&result),
                question.reference_solution
            )
        } else if result.counts_as_attempt_failure() {
            format!(
                "{}\n\n💡 Te quedan {} intentos.",
                format_judge_message(&result),
                self.remaining_attempts()
            )
        } else {
            format_judge_message(&result)
        };

        let warnings = style_warnings(&question.preset_code, respuesta);
        self.message = if warnings.is_empty() {
            verdict_message
        } else {
            format!("{}\n\n{verdict_message}", warnings.join("\n"))
        };

        self.persist();
        Some(result)
    }

    /// Revela la siguiente pista. Una pista más allá de la última muestra
    /// la solución de referencia (el tope lo aplica la capa de consulta).
    pub fn pedir_pista(&mut self) {
        if !self.can_submit() {
            self.message = "Esta pregunta ya está resuelta.".into();
            return;
        }

        self.state.current_entry_mut().user_state.hint_index += 1;

        self.message = if self.solution_revealed() {
            let solution = self.state.current_entry().question.reference_solution.clone();
            format!("🤯 ¡Solución revelada!\n{solution}")
        } else {
            let entry = self.state.current_entry();
            let idx = entry.user_state.hint_index as usize;
            match entry.question.hints.get(idx - 1) {
                Some(hint) => format!("💡 Pista {idx}: {hint}"),
                None => String::new(),
            }
        };

        self.persist();
    }

    /// Tras ver la solución por pistas, el usuario confirma que la ha
    /// entendido antes de poder avanzar.
    pub fn marcar_resuelta_tras_solucion(&mut self) {
        self.state.current_entry_mut().user_state.solved = true;
        self.message = "✅ Marcada como resuelta. Ya puedes avanzar.".into();
        self.persist();
    }

    /// Rehacer: borra todo el estado del usuario para esta pregunta,
    /// incluido su código, sin tocar el historial ni el cursor.
    pub fn reiniciar_pregunta(&mut self) {
        self.state.current_entry_mut().user_state = UserState::default();
        self.message = "🔄 Pregunta reiniciada.".into();
        self.persist();
    }
}
