use std::collections::HashSet;
use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tokio::time::timeout;

use crate::{
    model::brief::GenerateBriefDto,
    server::{
        data::{
            brief::{BriefRepository, NewBrief},
            content::ContentRepository,
        },
        error::{brief::BriefError, generation::GenerationError, Error},
    },
};

const COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_CONTENT_TYPE: &str = "blog_post";
/// How many recent analyzed contents ground a brief when the caller does not
/// pick any.
const GROUNDING_CONTENT_LIMIT: u64 = 5;
/// Body excerpt length fed to the model per content item.
const EXCERPT_CHARS: usize = 280;

static SYSTEM_PROMPT: &str = "You are a content strategist drafting a content brief for a marketing team. \
    Respond with a single JSON object and nothing else, using exactly these fields: \
    \"title\" (string), \"angle\" (string), \"key_points\" (array of strings), \
    \"suggested_copy\" (string with a short opening paragraph).";

/// Outline shape the model is asked to produce.
#[derive(Deserialize)]
struct GeneratedOutline {
    title: String,
    #[serde(default)]
    angle: Option<String>,
    key_points: Vec<String>,
    #[serde(default)]
    suggested_copy: Option<String>,
}

pub struct GenerationService<'a> {
    db: &'a DatabaseConnection,
    llm: &'a async_openai::Client<OpenAIConfig>,
    model: &'a str,
}

impl<'a> GenerationService<'a> {
    /// Creates a new instance of [`GenerationService`]
    pub fn new(
        db: &'a DatabaseConnection,
        llm: &'a async_openai::Client<OpenAIConfig>,
        model: &'a str,
    ) -> Self {
        Self { db, llm, model }
    }

    /// Generates a brief for the client from a free-text topic
    ///
    /// The brief is grounded on the given content IDs, or on the client's most
    /// recently analyzed contents when none are given. The model's completion
    /// is parsed as a JSON outline; the resulting brief is always inserted in
    /// draft status.
    pub async fn generate(
        &self,
        client: &entity::client::Model,
        request: GenerateBriefDto,
    ) -> Result<entity::brief::Model, Error> {
        let content_repository = ContentRepository::new(self.db);
        let brief_repository = BriefRepository::new(self.db);

        let contents = match &request.content_ids {
            Some(content_ids) => {
                let found = content_repository.get_many(client.id, content_ids).await?;
                let found_ids: HashSet<i32> =
                    found.iter().map(|content| content.id).collect();

                let missing: Vec<i32> = content_ids
                    .iter()
                    .copied()
                    .filter(|id| !found_ids.contains(id))
                    .collect();

                if !missing.is_empty() {
                    return Err(BriefError::UnknownContentIds(missing).into());
                }

                found
            }
            None => {
                content_repository
                    .list_recent_analyzed(client.id, GROUNDING_CONTENT_LIMIT)
                    .await?
            }
        };

        if contents.is_empty() {
            return Err(GenerationError::NoContent(client.id).into());
        }

        let content_type = request
            .content_type
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
        let prompt = build_prompt(client, &request.topic, &content_type, &contents);

        let completion = self.complete(&prompt).await?;
        let outline = parse_outline(&completion)?;

        let content_ids: Vec<i32> = contents.iter().map(|content| content.id).collect();
        let brief = brief_repository
            .create(
                client.id,
                NewBrief {
                    title: outline.title,
                    angle: outline.angle,
                    key_points: outline.key_points,
                    content_type,
                    suggested_copy: outline.suggested_copy,
                    content_ids,
                    status: entity::brief::BriefStatus::Draft,
                    generated_by: entity::brief::GeneratedBy::Openai,
                },
            )
            .await?;

        tracing::info!(
            client_id = %client.id,
            brief_id = %brief.id,
            "Generated brief from {} grounding contents",
            contents.len()
        );

        Ok(brief)
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = match timeout(COMPLETION_TIMEOUT, self.llm.chat().create(request)).await {
            Ok(response) => response?,
            Err(_) => return Err(GenerationError::Timeout),
        };

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyCompletion)
    }
}

fn build_prompt(
    client: &entity::client::Model,
    topic: &str,
    content_type: &str,
    contents: &[entity::content::Model],
) -> String {
    let mut prompt = format!("Draft a {} brief on the topic: {}\n\n", content_type, topic);

    prompt.push_str(&format!("Brand: {}\n", client.name));
    if let Some(niche) = &client.niche {
        prompt.push_str(&format!("Niche: {}\n", niche));
    }
    if let Some(target_audience) = &client.target_audience {
        prompt.push_str(&format!("Target audience: {}\n", target_audience));
    }

    prompt.push_str("\nRecent content from the brand's sources:\n");
    for (index, content) in contents.iter().enumerate() {
        let excerpt = content
            .summary
            .clone()
            .or_else(|| {
                content
                    .body
                    .as_ref()
                    .map(|body| body.chars().take(EXCERPT_CHARS).collect())
            })
            .unwrap_or_default();

        prompt.push_str(&format!("{}. {} — {}\n", index + 1, content.title, excerpt));
    }

    prompt
}

fn parse_outline(completion: &str) -> Result<GeneratedOutline, GenerationError> {
    serde_json::from_str(strip_code_fence(completion))
        .map_err(|err| GenerationError::MalformedCompletion(err.to_string()))
}

/// Models habitually wrap JSON answers in markdown fences.
fn strip_code_fence(completion: &str) -> &str {
    let trimmed = completion.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);

    trimmed.trim()
}
