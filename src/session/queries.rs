use super::*;
use crate::model::{ERROR_LIMIT, Question, UserState};

impl SessionApp {
    pub fn current_question(&self) -> &Question {
        &self.state.current_entry().question
    }

    pub fn current_user_state(&self) -> &UserState {
        &self.state.current_entry().user_state
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn total_questions(&self) -> usize {
        self.state.review_history.len()
    }

    pub fn question_position(&self) -> usize {
        self.state.history_cursor + 1
    }

    pub fn is_first_question(&self) -> bool {
        self.state.history_cursor == 0
    }

    pub fn is_latest_question(&self) -> bool {
        self.state.at_tail()
    }

    /// Política de acciones: una pregunta resuelta (esté donde esté el
    /// cursor) es solo de lectura; «Rehacer» es la vía para reintentarla.
    pub fn can_submit(&self) -> bool {
        !self.current_user_state().solved
    }

    pub fn can_advance(&self) -> bool {
        self.state.at_tail() && self.current_user_state().solved
    }

    pub fn remaining_attempts(&self) -> u32 {
        ERROR_LIMIT.saturating_sub(self.current_user_state().error_count)
    }

    /// Pistas visibles: el índice crece sin tope, pero la vista se queda
    /// en la lista completa como máximo.
    pub fn visible_hints(&self) -> &[String] {
        let entry = self.state.current_entry();
        let shown = (entry.user_state.hint_index as usize).min(entry.question.hints.len());
        &entry.question.hints[..shown]
    }

    /// La solución queda a la vista al pedir una pista más allá de la
    /// última, o tras agotar los intentos.
    pub fn solution_revealed(&self) -> bool {
        let entry = self.state.current_entry();
        entry.user_state.hint_index as usize > entry.question.hints.len()
            || entry.user_state.error_count >= ERROR_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ScriptedJudge, app_with, sample_question};
    use super::*;
    use crate::model::HistoryEntry;

    #[test]
    fn visible_hints_are_capped_at_the_full_list() {
        let mut entry = HistoryEntry::new(sample_question(1));
        entry.user_state.hint_index = 99;
        let app = app_with(ScriptedJudge::always_accept(), vec![entry], 0);

        assert_eq!(app.visible_hints().len(), 2);
        assert!(app.solution_revealed());
    }

    #[test]
    fn advance_requires_solved_tail() {
        let mut solved = HistoryEntry::new(sample_question(1));
        solved.user_state.solved = true;
        let pending = HistoryEntry::new(sample_question(2));

        let app = app_with(ScriptedJudge::always_accept(), vec![solved, pending], 1);
        assert!(!app.can_advance());
        assert!(app.can_submit());

        let app = app_with(
            ScriptedJudge::always_accept(),
            vec![{
                let mut e = HistoryEntry::new(sample_question(1));
                e.user_state.solved = true;
                e
            }],
            0,
        );
        assert!(app.can_advance());
        assert!(!app.can_submit());
    }

    #[test]
    fn position_helpers_track_the_cursor() {
        let entries = vec![
            HistoryEntry::new(sample_question(1)),
            HistoryEntry::new(sample_question(2)),
            HistoryEntry::new(sample_question(3)),
        ];
        let app = app_with(ScriptedJudge::always_accept(), entries, 1);

        assert_eq!(app.question_position(), 2);
        assert_eq!(app.total_questions(), 3);
        assert!(!app.is_first_question());
        assert!(!app.is_latest_question());
    }
}
