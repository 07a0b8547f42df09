//! Persistencia del progreso: autoguardado en un fichero JSON y blobs de
//! exportación/importación con el mismo esquema. El autoguardado nunca
//! interrumpe la sesión; importar un blob corrupto sí devuelve el error,
//! porque es una acción directa del usuario.

use crate::model::SessionState;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_SAVE_FILE: &str = "progress.json";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("el blob no es JSON válido: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("el blob no tiene la forma esperada: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no se pudo serializar la sesión: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct ProgressStore {
    path: Option<PathBuf>,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn default_path() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }

    /// Sesión sin autoguardado (tests, o variante solo-exportación).
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Carga el progreso guardado. Cualquier problema (fichero ausente,
    /// JSON corrupto, invariantes rotos) se degrada a `None`: quien llama
    /// arranca una sesión nueva.
    pub fn load(&self) -> Option<SessionState> {
        let path = self.path.as_ref()?;
        if !path.exists() {
            return None;
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("No se pudo leer {}: {err}", path.display());
                return None;
            }
        };

        match import_session(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                log::warn!("Progreso guardado descartado ({}): {err}", path.display());
                None
            }
        }
    }

    /// Sobrescribe el fichero completo. Un fallo se registra y se ignora:
    /// un autoguardado fallido no debe cortar la interacción.
    pub fn save(&self, state: &SessionState) {
        let Some(path) = self.path.as_ref() else {
            return;
        };

        match export_session(state) {
            Ok(blob) => {
                if let Err(err) = fs::write(path, blob) {
                    log::warn!("No se pudo guardar el progreso en {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("No se pudo serializar el progreso: {err}"),
        }
    }
}

pub fn export_session(state: &SessionState) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn import_session(blob: &str) -> Result<SessionState, ImportError> {
    let state: SessionState = serde_json::from_str(blob)?;
    state.validate().map_err(ImportError::Invalid)?;
    Ok(state)
}
