//! Biography rewrite collaborator.
//!
//! The contract is load-bearing: `refine` never fails. A missing credential
//! degrades to a pass-through with a logged warning, and any transport
//! failure falls back to the original text. The provider's output is trusted
//! verbatim; no length or language re-validation happens on return.

mod transport;

pub use transport::{GeminiTransport, RefineTransport};

use whatlang::detect;

use crate::config::RefineSettings;

/// How a refine attempt concluded. The returned text is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefineStatus {
    /// Provider returned rewritten text.
    Refined,
    /// No credential configured; input returned unchanged.
    MissingCredential,
    /// Provider call failed or returned nothing; input returned unchanged.
    TransportFailed,
}

impl RefineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefineStatus::Refined => "refined",
            RefineStatus::MissingCredential => "missing_credential",
            RefineStatus::TransportFailed => "transport_failed",
        }
    }
}

/// Result of a refine attempt.
#[derive(Debug, Clone)]
pub struct RefineOutcome {
    pub text: String,
    pub status: RefineStatus,
    /// ISO 639-3 code of the language detected in the input biography.
    pub detected_language: Option<&'static str>,
}

/// Rewrites a biography on demand.
pub trait BiographyRefiner {
    fn refine(&self, biography: &str) -> RefineOutcome;
}

/// Builds the academic-editor rewrite prompt sent to the provider.
pub fn build_rewrite_prompt(settings: &RefineSettings, biography: &str) -> String {
    format!(
        "Actúa como un editor académico profesional. Reescribe y mejora la siguiente \
         biografía para un perfil de investigador.\n\n\
         Reglas:\n\
         1. Mantén el tono profesional y académico.\n\
         2. Resume el contenido para que tenga un máximo de {max_words} palabras.\n\
         3. Corrige cualquier error gramatical.\n\
         4. El idioma debe ser {language}.\n\n\
         Biografía original:\n\
         \"{biography}\"",
        max_words = settings.max_words,
        language = settings.target_language,
    )
}

/// Provider-backed refiner honoring the fallback-on-failure contract.
///
/// The credential is expected to be resolved (env var / config file) before
/// construction; see `RefineSettings::resolved_api_key`.
pub struct RemoteRefiner {
    settings: RefineSettings,
    transport: Box<dyn RefineTransport>,
}

impl RemoteRefiner {
    pub fn new(settings: RefineSettings) -> Self {
        Self::with_transport(settings, Box::new(GeminiTransport::new()))
    }

    pub fn with_transport(settings: RefineSettings, transport: Box<dyn RefineTransport>) -> Self {
        Self {
            settings,
            transport,
        }
    }
}

impl BiographyRefiner for RemoteRefiner {
    fn refine(&self, biography: &str) -> RefineOutcome {
        let detected_language = detect(biography).map(|info| info.lang().code());
        let api_key = match &self.settings.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                log::warn!("No refinement credential configured; returning the biography unchanged.");
                return RefineOutcome {
                    text: biography.to_string(),
                    status: RefineStatus::MissingCredential,
                    detected_language,
                };
            }
        };

        let prompt = build_rewrite_prompt(&self.settings, biography);
        match self.transport.generate(api_key, &self.settings.model, &prompt) {
            Ok(text) if !text.trim().is_empty() => RefineOutcome {
                text,
                status: RefineStatus::Refined,
                detected_language,
            },
            Ok(_) => {
                log::warn!("Provider returned an empty rewrite; keeping the original biography.");
                RefineOutcome {
                    text: biography.to_string(),
                    status: RefineStatus::TransportFailed,
                    detected_language,
                }
            }
            Err(err) => {
                log::warn!("Biography refinement failed: {err:#}; keeping the original biography.");
                RefineOutcome {
                    text: biography.to_string(),
                    status: RefineStatus::TransportFailed,
                    detected_language,
                }
            }
        }
    }
}
