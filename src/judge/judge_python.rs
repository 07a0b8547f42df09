use crate::judge::judge_utils::{line_diff, matches_expected_output, normalize_newlines};
use crate::judge::{Judge, JudgeResult};
use std::collections::hash_map::DefaultHasher;
use std::env;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const TIMEOUT_MS: u64 = 2_000;
const POLL_MS: u64 = 10;

/// Juez real: ejecuta el envío en un proceso Python hijo con la salida
/// capturada y un límite de tiempo. El código del usuario se concatena
/// tras el código predefinido del enunciado.
pub struct PythonJudge;

impl Judge for PythonJudge {
    fn evaluate(&self, preset_code: &str, user_code: &str, expected_output: &str) -> JudgeResult {
        let full_code = combine_sources(preset_code, user_code);

        let python = match detect_python() {
            Ok(path) => path,
            Err(msg) => return JudgeResult::InfrastructureError { message: msg },
        };

        let cache_dir = match cache_dir() {
            Ok(dir) => dir,
            Err(err) => {
                return JudgeResult::InfrastructureError {
                    message: format!("No se pudo preparar el cache del juez Python: {err}"),
                };
            }
        };

        let script_path = build_cached_script_path(&cache_dir, &python, &full_code);
        if !script_path.exists() {
            if let Err(err) = fs::write(&script_path, &full_code) {
                return JudgeResult::InfrastructureError {
                    message: format!("No se pudo guardar el script Python temporal: {err}"),
                };
            }
        }

        // Chequeo de sintaxis siempre, antes de ejecutar nada.
        if let Err(stderr) = check_syntax(&python, &script_path) {
            return JudgeResult::SyntaxError { message: stderr };
        }

        run_script(&python, &script_path, expected_output, TIMEOUT_MS)
    }
}

pub fn combine_sources(preset_code: &str, user_code: &str) -> String {
    if preset_code.is_empty() {
        user_code.to_string()
    } else {
        format!("{preset_code}\n{user_code}")
    }
}

pub fn detect_python() -> Result<PathBuf, String> {
    for candidate in ["python3", "python"] {
        if let Ok(status) = Command::new(candidate)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            if status.success() {
                return Ok(PathBuf::from(candidate));
            }
        }
    }

    Err("No se encontró 'python3' ni 'python' en PATH.".into())
}

fn cache_dir() -> Result<PathBuf, std::io::Error> {
    let base = if cfg!(target_os = "windows") {
        env::var_os("LOCALAPPDATA")
            .map(PathBuf::from)
            .or_else(|| env::var_os("TEMP").map(PathBuf::from))
            .unwrap_or_else(env::temp_dir)
    } else {
        env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|h| PathBuf::from(h).join(".cache")))
            .unwrap_or_else(env::temp_dir)
    };

    let dir = base.join("python_trainer").join("judge_cache");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn build_cached_script_path(cache_dir: &Path, python: &Path, source: &str) -> PathBuf {
    let mut hasher = DefaultHasher::new();
    python.to_string_lossy().hash(&mut hasher);
    source.hash(&mut hasher);
    let key = format!("{:016x}", hasher.finish());
    cache_dir.join(format!("{key}.py"))
}

fn check_syntax(python: &Path, script_path: &Path) -> Result<(), String> {
    let output = Command::new(python)
        .arg("-m")
        .arg("py_compile")
        .arg(script_path)
        .output()
        .map_err(|err| format!("No se pudo invocar Python para compilar: {err}"))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).to_string())
    }
}

fn run_script(
    python: &Path,
    script_path: &Path,
    expected_output: &str,
    timeout_ms: u64,
) -> JudgeResult {
    let mut child = match Command::new(python)
        .arg(script_path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            return JudgeResult::InfrastructureError {
                message: format!("No se pudo ejecutar el script Python: {err}"),
            };
        }
    };

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(_)) => {
                let output = match child.wait_with_output() {
                    Ok(output) => output,
                    Err(err) => {
                        return JudgeResult::InfrastructureError {
                            message: format!("No se pudo leer la salida del script Python: {err}"),
                        };
                    }
                };

                if output.status.code().unwrap_or(-1) != 0 {
                    return JudgeResult::RuntimeError {
                        message: String::from_utf8_lossy(&output.stderr).to_string(),
                        exit_code: output.status.code(),
                    };
                }

                let received = normalize_newlines(&String::from_utf8_lossy(&output.stdout));
                let expected = normalize_newlines(expected_output);

                if !matches_expected_output(&received, &expected) {
                    return JudgeResult::WrongAnswer {
                        expected: expected.trim_end().to_string(),
                        received: received.trim_end().to_string(),
                        diff: line_diff(&expected, &received),
                    };
                }

                return JudgeResult::Accepted;
            }
            Ok(None) => {
                if start.elapsed() > Duration::from_millis(timeout_ms) {
                    let _ = child.kill();
                    let _ = child.wait();
                    return JudgeResult::Timeout { timeout_ms };
                }
                thread::sleep(Duration::from_millis(POLL_MS));
            }
            Err(err) => {
                return JudgeResult::InfrastructureError {
                    message: format!("Error esperando al script Python: {err}"),
                };
            }
        }
    }
}
