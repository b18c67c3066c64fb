//! Model selection against the provider's live model list.

use crate::client::GeminiClient;
use crate::types::ModelInfo;
use rhetorica_config::GeminiConfig;
use tracing::{info, warn};

/// How the model name in use was arrived at.
///
/// Selection always yields a usable name, but callers can see (and log)
/// whether the provider was actually consulted or the hardcoded fallback
/// stood in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelChoice {
    /// A model from the configured preference list was available.
    Preferred(String),
    /// None of the preferred models was listed; the first listed
    /// generation-capable model was taken instead.
    FirstListed(String),
    /// The model listing itself failed; the configured fallback is used
    /// unverified.
    Fallback(String),
    /// The user named a model explicitly; no listing was consulted.
    Pinned(String),
}

impl ModelChoice {
    /// The model name to use for the generation call.
    pub fn name(&self) -> &str {
        match self {
            ModelChoice::Preferred(name)
            | ModelChoice::FirstListed(name)
            | ModelChoice::Fallback(name)
            | ModelChoice::Pinned(name) => name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ModelChoice::Fallback(_))
    }

    /// Short description of how the choice was made.
    pub fn describe(&self) -> &'static str {
        match self {
            ModelChoice::Preferred(_) => "preferred",
            ModelChoice::FirstListed(_) => "first listed",
            ModelChoice::Fallback(_) => "fallback, provider not consulted",
            ModelChoice::Pinned(_) => "pinned by user",
        }
    }
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.describe())
    }
}

/// Pick a model from a listing: the first preference that is present and
/// generation-capable, else the first generation-capable model listed.
/// Returns `None` when nothing listed can generate content.
pub fn choose_model(models: &[ModelInfo], preferred: &[String]) -> Option<ModelChoice> {
    let usable: Vec<&ModelInfo> = models.iter().filter(|m| m.supports_generation()).collect();

    for target in preferred {
        if let Some(found) = usable.iter().find(|m| model_name_matches(&m.name, target)) {
            return Some(ModelChoice::Preferred(found.name.clone()));
        }
    }

    usable
        .first()
        .map(|m| ModelChoice::FirstListed(m.name.clone()))
}

/// Query the provider and pick a model, falling back to the configured
/// default when the listing fails or comes back empty. Never errors.
pub async fn select_model(client: &GeminiClient, config: &GeminiConfig) -> ModelChoice {
    match client.list_models().await {
        Ok(models) => match choose_model(&models, &config.preferred_models) {
            Some(choice) => {
                info!("Selected model {}", choice);
                choice
            }
            None => {
                warn!(
                    "Provider listed no generation-capable models; using fallback {}",
                    config.fallback_model
                );
                ModelChoice::Fallback(config.fallback_model.clone())
            }
        },
        Err(e) => {
            warn!(
                "Model listing failed ({}); using fallback {}",
                e, config.fallback_model
            );
            ModelChoice::Fallback(config.fallback_model.clone())
        }
    }
}

/// Names compare equal with or without the `models/` prefix.
fn model_name_matches(listed: &str, wanted: &str) -> bool {
    listed.trim_start_matches("models/") == wanted.trim_start_matches("models/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, generates: bool) -> ModelInfo {
        ModelInfo {
            name: name.to_string(),
            display_name: String::new(),
            supported_generation_methods: if generates {
                vec!["generateContent".to_string()]
            } else {
                vec!["embedContent".to_string()]
            },
        }
    }

    fn prefs() -> Vec<String> {
        vec![
            "models/gemini-1.5-flash".to_string(),
            "models/gemini-1.5-pro".to_string(),
        ]
    }

    #[test]
    fn test_preferred_model_wins() {
        let models = vec![
            model("models/gemini-1.0-pro", true),
            model("models/gemini-1.5-flash", true),
        ];
        let choice = choose_model(&models, &prefs()).unwrap();
        assert_eq!(
            choice,
            ModelChoice::Preferred("models/gemini-1.5-flash".to_string())
        );
    }

    #[test]
    fn test_preference_order_honored() {
        let models = vec![
            model("models/gemini-1.5-pro", true),
            model("models/gemini-1.5-flash", true),
        ];
        // Flash comes first in the preference list even though pro is
        // listed first by the provider.
        let choice = choose_model(&models, &prefs()).unwrap();
        assert_eq!(choice.name(), "models/gemini-1.5-flash");
    }

    #[test]
    fn test_first_listed_when_no_preference_matches() {
        let models = vec![
            model("models/embedding-001", false),
            model("models/gemini-experimental", true),
        ];
        let choice = choose_model(&models, &prefs()).unwrap();
        assert_eq!(
            choice,
            ModelChoice::FirstListed("models/gemini-experimental".to_string())
        );
    }

    #[test]
    fn test_none_when_nothing_generates() {
        let models = vec![model("models/embedding-001", false)];
        assert!(choose_model(&models, &prefs()).is_none());
        assert!(choose_model(&[], &prefs()).is_none());
    }

    #[test]
    fn test_prefix_insensitive_match() {
        let models = vec![model("models/gemini-1.5-flash", true)];
        let wanted = vec!["gemini-1.5-flash".to_string()];
        let choice = choose_model(&models, &wanted).unwrap();
        assert_eq!(choice.name(), "models/gemini-1.5-flash");
    }

    #[test]
    fn test_choice_accessors() {
        let choice = ModelChoice::Fallback("gemini-1.5-flash".to_string());
        assert!(choice.is_fallback());
        assert_eq!(choice.name(), "gemini-1.5-flash");
        assert!(choice.to_string().contains("fallback"));
    }
}
