//! Gemini-style structured-extraction client.
//!
//! # Responsibility
//! - Post free text to a `generateContent` endpoint with a declared JSON
//!   response schema and decode the answer into an `ExtractedPlan`.
//! - Reject malformed objectives and stamp fresh ids on accepted ones
//!   before anything reaches the reconciler.
//!
//! # Invariants
//! - `day` in the response is advisory; the prompt instructs the provider
//!   not to author it when a usable `date` is present.
//! - Transport, credential, and decoding failures map onto distinct
//!   `ExtractionError` variants and carry a human-readable cause.

use crate::extract::{ExtractionError, Extractor};
use crate::model::extracted::ExtractedPlan;
use crate::model::plan::Objective;
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const EXTRACTION_PROMPT: &str = "\
أنت مساعد لإعداد خطط الدروس. استخرج من النص التالي حقول خطة الدرس \
المتوفرة فقط، واترك أي حقل غير مذكور فارغاً. اكتب التاريخ بصيغة \
YYYY-MM-DD. لا تذكر حقل اليوم (day) إذا كان النص يحتوي على تاريخ صالح.\n\
النص:\n";

/// Structured-extraction client over a Gemini-style HTTP API.
pub struct GeminiExtractor {
    base_url: String,
    model: String,
    api_key: String,
    agent: ureq::Agent,
}

impl GeminiExtractor {
    /// Creates a client against the public endpoint with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_BASE_URL, DEFAULT_MODEL, api_key)
    }

    /// Creates a client against a custom endpoint, mainly for tests and
    /// self-hosted proxies.
    pub fn with_endpoint(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            agent,
        }
    }

    fn request_body(free_text: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": format!("{EXTRACTION_PROMPT}{free_text}") }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        })
    }
}

impl Extractor for GeminiExtractor {
    fn extract(&self, free_text: &str) -> Result<ExtractedPlan, ExtractionError> {
        let started_at = Instant::now();
        info!("event=extract module=extract status=start chars={}", free_text.chars().count());

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .agent
            .post(&url)
            .set("x-goog-api-key", &self.api_key)
            .send_json(Self::request_body(free_text));

        let result = match response {
            Ok(response) => decode_response(response),
            Err(ureq::Error::Status(status, response)) => Err(ExtractionError::Rejected {
                status,
                message: response
                    .into_string()
                    .unwrap_or_else(|_| "unreadable error body".to_string()),
            }),
            Err(err @ ureq::Error::Transport(_)) => {
                Err(ExtractionError::Unreachable(err.to_string()))
            }
        };

        match &result {
            Ok(_) => info!(
                "event=extract module=extract status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=extract module=extract status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }

        result
    }
}

fn decode_response(response: ureq::Response) -> Result<ExtractedPlan, ExtractionError> {
    let envelope: GenerateContentResponse = response
        .into_json()
        .map_err(|err| ExtractionError::Malformed(format!("invalid response envelope: {err}")))?;

    let text = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| ExtractionError::Malformed("response carries no candidate text".to_string()))?;

    decode_plan_json(&text)
}

/// Decodes the schema-conforming JSON document into an `ExtractedPlan`.
///
/// Objectives missing any of level/formulation/evaluation make the whole
/// document malformed; accepted objectives get a fresh local id.
pub fn decode_plan_json(text: &str) -> Result<ExtractedPlan, ExtractionError> {
    let wire: WirePlan = serde_json::from_str(text)
        .map_err(|err| ExtractionError::Malformed(format!("invalid plan document: {err}")))?;

    Ok(ExtractedPlan {
        title: wire.title,
        subject: wire.subject,
        grade: wire.grade,
        education_area: wire.education_area,
        school_name: wire.school_name,
        teacher_name: wire.teacher_name,
        date: wire.date,
        day: wire.day,
        methods: wire.methods,
        aids: wire.aids,
        introduction: wire.introduction,
        closure: wire.closure,
        cognitive: wire.cognitive.map(stamp_objectives),
        psychomotor: wire.psychomotor.map(stamp_objectives),
        affective: wire.affective.map(stamp_objectives),
    })
}

fn stamp_objectives(wire: Vec<WireObjective>) -> Vec<Objective> {
    wire.into_iter()
        .map(|objective| Objective::new(objective.level, objective.formulation, objective.evaluation))
        .collect()
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

/// Wire shape of the extracted plan document, before id stamping.
#[derive(Debug, Deserialize)]
struct WirePlan {
    title: Option<String>,
    subject: Option<String>,
    grade: Option<String>,
    education_area: Option<String>,
    school_name: Option<String>,
    teacher_name: Option<String>,
    date: Option<String>,
    day: Option<String>,
    methods: Option<Vec<String>>,
    aids: Option<Vec<String>>,
    introduction: Option<String>,
    closure: Option<String>,
    cognitive: Option<Vec<WireObjective>>,
    psychomotor: Option<Vec<WireObjective>>,
    affective: Option<Vec<WireObjective>>,
}

/// Wire objective: all three sub-fields are required; ids never travel.
#[derive(Debug, Deserialize)]
struct WireObjective {
    level: String,
    formulation: String,
    evaluation: String,
}

fn response_schema() -> Value {
    let objective_list = json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "level": { "type": "STRING" },
                "formulation": { "type": "STRING" },
                "evaluation": { "type": "STRING" }
            },
            "required": ["level", "formulation", "evaluation"]
        }
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "subject": { "type": "STRING" },
            "grade": { "type": "STRING" },
            "education_area": { "type": "STRING" },
            "school_name": { "type": "STRING" },
            "teacher_name": { "type": "STRING" },
            "date": { "type": "STRING", "description": "YYYY-MM-DD" },
            "day": { "type": "STRING" },
            "methods": { "type": "ARRAY", "items": { "type": "STRING" } },
            "aids": { "type": "ARRAY", "items": { "type": "STRING" } },
            "introduction": { "type": "STRING" },
            "closure": { "type": "STRING" },
            "cognitive": objective_list,
            "psychomotor": objective_list,
            "affective": objective_list
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_plan_json, GeminiExtractor};

    #[test]
    fn request_body_declares_json_schema() {
        let body = GeminiExtractor::request_body("درس الكسور");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(body["generationConfig"]["responseSchema"]["properties"]["cognitive"].is_object());
    }

    #[test]
    fn objective_missing_subfield_is_malformed() {
        let text = r#"{"cognitive":[{"level":"الفهم","formulation":"يشرح الفكرة"}]}"#;
        let err = decode_plan_json(text).unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }
}
