use super::*;

impl SessionApp {
    /// Avanza más allá de la última pregunta del historial. Solo procede
    /// con el cursor en la cola y esa entrada resuelta; entonces sube el
    /// nivel y añade una pregunta nueva del banco.
    pub fn avanzar_de_nivel(&mut self) -> bool {
        if !(self.state.at_tail() && self.state.current_entry().user_state.solved) {
            self.message = "Resuelve la pregunta actual antes de avanzar.".into();
            return false;
        }

        self.state.history_cursor += 1;
        if self.state.history_cursor >= self.state.review_history.len() {
            self.state.level += 1;
            let question = get_question(self.state.level);
            self.state.review_history.push(HistoryEntry::new(question));
        }

        self.message.clear();
        self.persist();
        true
    }

    /// Retrocede una pregunta para repasarla. No borra nada del historial.
    pub fn ir_a_anterior(&mut self) -> bool {
        if self.state.history_cursor == 0 {
            return false;
        }
        self.state.history_cursor -= 1;
        self.message.clear();
        self.persist();
        true
    }

    /// Vuelve hacia la pregunta más reciente.
    pub fn ir_a_siguiente(&mut self) -> bool {
        if self.state.at_tail() {
            return false;
        }
        self.state.history_cursor += 1;
        self.message.clear();
        self.persist();
        true
    }
}
