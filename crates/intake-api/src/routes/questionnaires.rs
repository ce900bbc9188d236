use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

use intake_core::models::answer::AnswerSet;
use intake_questionnaires::error::QuestionnaireError;
use intake_questionnaires::rules::{Disqualifier, SkipRule};
use intake_questionnaires::segment::Segment;
use intake_questionnaires::wizard::{Step, Wizard};
use intake_questionnaires::{all_questionnaires, get_questionnaire, Questionnaire};

use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSummary {
    id: String,
    name: String,
    segment_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireDetail {
    id: String,
    name: String,
    segments: Vec<Segment>,
    disqualifiers: Vec<Disqualifier>,
    skip_rules: Vec<SkipRule>,
}

pub async fn list_questionnaires() -> Json<Vec<QuestionnaireSummary>> {
    let questionnaires = all_questionnaires()
        .iter()
        .map(|q| QuestionnaireSummary {
            id: q.id().to_string(),
            name: q.name().to_string(),
            segment_count: q.segments().len(),
        })
        .collect();
    Json(questionnaires)
}

fn lookup(id: &str) -> Result<Box<dyn Questionnaire>, ApiError> {
    get_questionnaire(id)
        .ok_or_else(|| QuestionnaireError::UnknownQuestionnaire(id.to_string()).into())
}

pub async fn get_questionnaire_detail(
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireDetail>, ApiError> {
    let questionnaire = lookup(&id)?;

    Ok(Json(QuestionnaireDetail {
        id: questionnaire.id().to_string(),
        name: questionnaire.name().to_string(),
        segments: questionnaire.segments().to_vec(),
        disqualifiers: questionnaire.disqualifiers().to_vec(),
        skip_rules: questionnaire.skip_rules().to_vec(),
    }))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Back,
}

#[derive(Deserialize)]
pub struct StepRequest {
    pub position: usize,
    #[serde(default)]
    pub answers: AnswerSet,
    pub direction: Direction,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub position: usize,
    pub segment_id: String,
    pub progress: u8,
    #[serde(flatten)]
    pub step: Step,
}

/// Evaluate one wizard transition for a client that keeps its own state.
pub async fn step(
    Path(id): Path<String>,
    Json(req): Json<StepRequest>,
) -> Result<Json<StepResponse>, ApiError> {
    let questionnaire = lookup(&id)?;
    let mut wizard = Wizard::resume(questionnaire, req.position, req.answers)?;

    let step = match req.direction {
        Direction::Next => wizard.next()?,
        Direction::Back => wizard.back(),
    };

    tracing::debug!(
        questionnaire = %id,
        from = req.position,
        to = wizard.position(),
        direction = ?req.direction,
        "step evaluated"
    );

    Ok(Json(StepResponse {
        position: wizard.position(),
        segment_id: wizard.current_segment().id.clone(),
        progress: wizard.progress(),
        step,
    }))
}
