use crate::data::get_question;
use crate::judge::{Judge, PythonJudge};
use crate::model::{HistoryEntry, SessionState};
use crate::store::{ExportError, ImportError, ProgressStore, export_session, import_session};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;

/// Controlador de la sesión: nivel actual, historial de preguntas y cursor
/// de navegación. Cada acción del usuario muta este estado y lo persiste.
pub struct SessionApp {
    pub state: SessionState,
    pub message: String,
    store: ProgressStore,
    judge: Box<dyn Judge>,
}

impl SessionApp {
    /// Restaura la sesión guardada o arranca una nueva en el nivel 1.
    pub fn new(store: ProgressStore) -> Self {
        Self::with_judge(store, Box::new(PythonJudge))
    }

    pub fn with_judge(store: ProgressStore, judge: Box<dyn Judge>) -> Self {
        let state = store.load().unwrap_or_else(Self::fresh_state);
        let app = Self {
            state,
            message: String::new(),
            store,
            judge,
        };
        app.persist();
        app
    }

    fn fresh_state() -> SessionState {
        SessionState {
            level: 1,
            score: 0,
            review_history: vec![HistoryEntry::new(get_question(1))],
            history_cursor: 0,
        }
    }

    pub(crate) fn persist(&self) {
        self.store.save(&self.state);
    }

    /// Serializa la sesión como blob descargable por el usuario.
    pub fn exportar_progreso(&self) -> Result<String, ExportError> {
        export_session(&self.state)
    }

    /// Sustituye la sesión por el blob subido. Si el blob está mal formado
    /// el error llega al llamante y la sesión actual queda intacta.
    pub fn importar_progreso(&mut self, blob: &str) -> Result<(), ImportError> {
        let imported = import_session(blob)?;
        self.state = imported;
        self.message = "📥 Progreso importado.".into();
        self.persist();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::judge::{Judge, JudgeResult};
    use crate::model::{HistoryEntry, Question, SessionState};
    use crate::store::ProgressStore;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Juez de guion: devuelve veredictos preparados de antemano, en orden.
    /// Cuando se agota el guion, acepta todo.
    pub struct ScriptedJudge {
        verdicts: RefCell<VecDeque<JudgeResult>>,
    }

    impl ScriptedJudge {
        pub fn with_verdicts(verdicts: impl IntoIterator<Item = JudgeResult>) -> Self {
            Self {
                verdicts: RefCell::new(verdicts.into_iter().collect()),
            }
        }

        pub fn always_accept() -> Self {
            Self::with_verdicts([])
        }
    }

    impl Judge for ScriptedJudge {
        fn evaluate(&self, _preset: &str, _user: &str, _expected: &str) -> JudgeResult {
            self.verdicts
                .borrow_mut()
                .pop_front()
                .unwrap_or(JudgeResult::Accepted)
        }
    }

    pub fn sample_question(n: u32) -> Question {
        Question {
            title: format!("Pregunta {n}"),
            description: "imprime el producto".into(),
            preset_code: "price = 5\ncount = 3".into(),
            expected_output: "15".into(),
            hints: vec!["Usa *".into(), "print(price * count)".into()],
            reference_solution: "print(price * count)".into(),
        }
    }

    pub fn app_with(
        judge: ScriptedJudge,
        entries: Vec<HistoryEntry>,
        cursor: usize,
    ) -> super::SessionApp {
        let level = entries.len() as u32;
        super::SessionApp {
            state: SessionState {
                level,
                score: 0,
                review_history: entries,
                history_cursor: cursor,
            },
            message: String::new(),
            store: ProgressStore::disabled(),
            judge: Box::new(judge),
        }
    }
}
