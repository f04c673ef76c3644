//! Engine-specific prompt construction.

use reelsmith_core::{Engine, MediaAsset, Prompt, Scenario};
use reelsmith_error::ReelsmithResult;
use strum::IntoEnumIterator;

const NO_ASSETS: &str = "No additional assets provided";
const DEFAULT_AUDIENCE: &str = "broad digital audience";

/// House guideline appended to every prompt for an engine.
pub fn guidelines(engine: Engine) -> &'static str {
    match engine {
        Engine::GoogleVeo3 => {
            "Emphasize cinematic visuals, adaptive pacing, and highlight product benefits within 60 seconds."
        }
        Engine::Canva => {
            "Structure scenes to align with Canva templates, using high contrast typography for key messages."
        }
    }
}

/// Builds one prompt per engine from a scenario and its media.
///
/// Holds shared references only, so every build is independent of the
/// others.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{Engine, ScenarioBuilder};
/// use reelsmith_pipeline::PromptBuilder;
///
/// let scenario = ScenarioBuilder::default()
///     .title("Demo")
///     .call_to_action("Subscribe")
///     .build()
///     .unwrap();
///
/// let builder = PromptBuilder::new(&scenario, &[]);
/// let prompt = builder.build("Google Veo 3").unwrap();
///
/// assert_eq!(*prompt.engine(), Engine::GoogleVeo3);
/// assert_eq!(prompt.field("call_to_action"), Some("Subscribe"));
/// assert_eq!(prompt.field("references"), Some("No additional assets provided"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'a> {
    scenario: &'a Scenario,
    assets: &'a [MediaAsset],
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder over a scenario and its assets.
    pub fn new(scenario: &'a Scenario, assets: &'a [MediaAsset]) -> Self {
        Self { scenario, assets }
    }

    /// Build the prompt for an engine named in free text.
    ///
    /// # Errors
    ///
    /// Returns [`reelsmith_error::UnsupportedEngineError`] when the name is
    /// outside the supported set.
    pub fn build(&self, engine: &str) -> ReelsmithResult<Prompt> {
        let engine: Engine = engine.parse()?;
        Ok(self.build_for(engine))
    }

    /// Build the prompt for a known engine.
    #[tracing::instrument(skip(self), fields(title = %self.scenario.title()))]
    pub fn build_for(&self, engine: Engine) -> Prompt {
        let scenario = self.scenario;
        let fields: Vec<(&str, String)> = match engine {
            Engine::GoogleVeo3 => vec![
                ("title", scenario.title().clone()),
                ("narrative", self.narrative()),
                ("style", self.style()),
                ("call_to_action", scenario.call_to_action().clone()),
                ("references", self.references("\n")),
                ("guidelines", guidelines(engine).to_string()),
            ],
            Engine::Canva => vec![
                ("project_name", scenario.title().clone()),
                ("visual_theme", scenario.objectives().join(", ")),
                ("audience", scenario.audience().clone()),
                ("narrative", self.narrative()),
                ("call_to_action", scenario.call_to_action().clone()),
                ("assets", self.references("; ")),
                ("guidelines", guidelines(engine).to_string()),
            ],
        };

        let prompt = Prompt::new(engine, fields, self.text(engine));
        tracing::debug!(fields = prompt.payload().len(), "Built prompt");
        prompt
    }

    /// Build a prompt for every engine in declaration order.
    pub fn build_all(&self) -> Vec<Prompt> {
        Engine::iter().map(|engine| self.build_for(engine)).collect()
    }

    fn narrative(&self) -> String {
        let audience = if self.scenario.audience().trim().is_empty() {
            DEFAULT_AUDIENCE
        } else {
            self.scenario.audience().as_str()
        };

        let mut lines: Vec<String> = self
            .scenario
            .objectives()
            .iter()
            .map(|goal| format!("Goal: {}", goal))
            .collect();
        lines.push(format!("Audience: {}", audience));
        lines.push(format!("CTA: {}", self.scenario.call_to_action()));
        lines.join("\n")
    }

    fn style(&self) -> String {
        let tone = format!("Tone: {}", self.scenario.tone());
        if self.scenario.description().trim().is_empty() {
            tone
        } else {
            format!("{}\n{}", tone, self.scenario.description())
        }
    }

    fn references(&self, separator: &str) -> String {
        if self.assets.is_empty() {
            return NO_ASSETS.to_string();
        }
        self.assets
            .iter()
            .map(MediaAsset::reference)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Plain-text rendition handed to engines that take free text.
    fn text(&self, engine: Engine) -> String {
        let scenario = self.scenario;
        let mut lines = vec![
            format!("Engine: {}", engine),
            format!("Title: {}", scenario.title()),
            format!("Description: {}", scenario.description()),
            "Objectives:".to_string(),
        ];
        lines.extend(scenario.objectives().iter().map(|o| format!("- {}", o)));
        lines.push(format!("Audience: {}", scenario.audience()));
        lines.push(format!("CallToAction: {}", scenario.call_to_action()));
        lines.push("Media Assets:".to_string());
        lines.extend(self.assets.iter().map(|a| format!("- {}", a.reference())));
        lines.push(format!("Guidelines: {}", guidelines(engine)));
        lines.join("\n")
    }
}
