pub mod judge_python;
pub mod judge_utils;

pub use judge_python::PythonJudge;

/// Veredicto del juez sobre un envío.
#[derive(Debug, Clone, PartialEq)]
pub enum JudgeResult {
    Accepted,
    SyntaxError {
        message: String,
    },
    WrongAnswer {
        expected: String,
        received: String,
        diff: String,
    },
    Timeout {
        timeout_ms: u64,
    },
    RuntimeError {
        message: String,
        exit_code: Option<i32>,
    },
    InfrastructureError {
        message: String,
    },
}

impl JudgeResult {
    /// Los problemas de infraestructura (no hay intérprete, fallo de E/S)
    /// no son culpa del usuario y no consumen intentos.
    pub fn counts_as_attempt_failure(&self) -> bool {
        !matches!(
            self,
            JudgeResult::Accepted | JudgeResult::InfrastructureError { .. }
        )
    }
}

/// Punto de costura para poder sustituir el juez real en los tests.
pub trait Judge {
    fn evaluate(&self, preset_code: &str, user_code: &str, expected_output: &str) -> JudgeResult;
}

pub fn format_judge_message(result: &JudgeResult) -> String {
    match result {
        JudgeResult::Accepted => "✅ ¡Correcto! La salida coincide.".into(),
        JudgeResult::SyntaxError { message } => {
            format!(
                "❌ Error de sintaxis. Revisa la indentación y la puntuación.\n\n{}",
                message.trim()
            )
        }
        JudgeResult::WrongAnswer {
            expected,
            received,
            diff,
        } => format!(
            "❌ Resultado incorrecto.\n\nTu salida:\n{received}\n\nSalida esperada:\n{expected}\n\nDiff:\n{diff}"
        ),
        JudgeResult::Timeout { timeout_ms } => {
            format!("❌ Tiempo agotado ({timeout_ms} ms). ¿Un bucle infinito?")
        }
        JudgeResult::RuntimeError { message, exit_code } => format!(
            "⚠ Error de ejecución (exit code: {}).\n\n{}",
            exit_code
                .map(|v| v.to_string())
                .unwrap_or_else(|| "desconocido".into()),
            message.trim()
        ),
        JudgeResult::InfrastructureError { message } => format!("⚠ {message}"),
    }
}
