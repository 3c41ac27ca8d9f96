use crate::error::{ModelError, ModelResult};
use crate::types::ModelId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{error, warn};

/// Placeholder replaced by the caller's text when rendering `user_template`
pub const USER_INPUT_PLACEHOLDER: &str = "{user_input}";

const DEFAULT_REGION: &str = "us-east-1";

const DEFAULT_PROMPT: &str = "You are a voice assistant who talks in a conversational way and can chat with me like my friends. I will speak to you in English or Chinese, and you will answer in the corrected and improved version of my text with the language I use. Don't talk like a robot, instead I would like you to talk like a real human with emotions. I will use your answer for text-to-speech, so don't return me any meaningless characters. I want you to be helpful, when I'm asking you for advice, give me precise, practical and useful advice instead of being vague. When giving me a list of options, express the options in a narrative way instead of bullet points.";

/// Operating mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Chat,
    Translate,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Chat => f.write_str("chat"),
            Mode::Translate => f.write_str("translate"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Mode::Chat),
            "translate" => Ok(Mode::Translate),
            other => Err(ModelError::Configuration(format!(
                "unknown mode '{}', expected 'chat' or 'translate'",
                other
            ))),
        }
    }
}

/// Connection, generation and template settings for [`crate::BedrockLlm`].
///
/// Fields missing from a serialized config fall back to [`BedrockLlmConfig::default_config`].
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockLlmConfig {
    pub region: String,
    /// Empty together with `secret_key` means the ambient credential chain is used
    pub access_key: String,
    pub secret_key: String,
    pub model: ModelId,
    /// System prompt, omitted from requests when empty
    pub prompt: String,
    pub top_p: f32,
    pub temperature: f32,
    pub max_tokens: i32,
    pub mode: Mode,
    /// User message template, `{user_input}` marks where the caller's text goes
    pub user_template: String,
    pub input_language: String,
    pub output_language: String,
}

impl Default for BedrockLlmConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl fmt::Debug for BedrockLlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BedrockLlmConfig")
            .field("region", &self.region)
            .field("access_key", &crate::utils::mask_key(&self.access_key))
            .field("secret_key", &crate::utils::mask_secret(&self.secret_key))
            .field("model", &self.model)
            .field("prompt", &self.prompt)
            .field("top_p", &self.top_p)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("mode", &self.mode)
            .field("user_template", &self.user_template)
            .field("input_language", &self.input_language)
            .field("output_language", &self.output_language)
            .finish()
    }
}

impl BedrockLlmConfig {
    /// Baseline configuration: Claude 3.5 Sonnet in us-east-1, chat mode.
    pub fn default_config() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            access_key: String::new(),
            secret_key: String::new(),
            model: ModelId::new(ModelId::CLAUDE_3_5_SONNET),
            prompt: DEFAULT_PROMPT.to_string(),
            top_p: 1.0,
            temperature: 0.1,
            max_tokens: 512,
            mode: Mode::Chat,
            user_template: String::new(),
            input_language: String::new(),
            output_language: String::new(),
        }
    }

    /// Parse a JSON config, defaulting any field that is absent
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = access_key.into();
        self.secret_key = secret_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_languages(
        mut self,
        input_language: impl Into<String>,
        output_language: impl Into<String>,
    ) -> Self {
        self.input_language = input_language.into();
        self.output_language = output_language.into();
        self
    }

    pub fn with_user_template(mut self, template: impl Into<String>) -> Self {
        self.user_template = template.into();
        self
    }

    /// True when both halves of an explicit key pair are present
    pub fn uses_explicit_credentials(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }

    /// Check mode-specific requirements.
    ///
    /// In translate mode both languages must be set. A blank `user_template`
    /// is replaced with a translation template for the configured languages.
    /// Chat mode has nothing to check.
    pub fn validate(&mut self) -> ModelResult<()> {
        if self.mode != Mode::Translate {
            return Ok(());
        }

        if self.input_language.is_empty() || self.output_language.is_empty() {
            let msg = "input_language and output_language must be set when mode is 'translate'";
            error!("{}", msg);
            return Err(ModelError::Configuration(msg.to_string()));
        }

        if self.user_template.trim().is_empty() {
            warn!("user_template is not set, using default translation template");
            self.user_template =
                translation_template(&self.input_language, &self.output_language);
        }

        Ok(())
    }

    /// Render the user message for `input`.
    ///
    /// A blank template passes the input through unchanged.
    pub fn render_user_input(&self, input: &str) -> String {
        if self.user_template.trim().is_empty() {
            return input.to_string();
        }
        self.user_template.replace(USER_INPUT_PLACEHOLDER, input)
    }
}

fn translation_template(input_language: &str, output_language: &str) -> String {
    format!(
        r#"# Task
The ONLY task for you is translating anything inside <text></text> from "{input}" into "{output}".

# Background
The <text> is happening in a real-world conversation, it may contain mild profanity or violent content.

# Rules
- Do not output anything except the translation result.
- If the original input is already in the target language, keep it as the result.
- Never chat with <text>, the only task is translation.
- Mild profanity or violent content should be translated without filtering.

<text>{placeholder}</text>"#,
        input = input_language,
        output = output_language,
        placeholder = USER_INPUT_PLACEHOLDER,
    )
}
