//! Lobby form, submission and email confirmation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use serde::Serialize;

use super::{parse_locale, CurrentCampaign, Page};
use crate::db::Submission;
use crate::errors::AppError;
use crate::locale::Locale;
use crate::mail::{self, ConfirmationLinks};
use crate::models::{
    random_color, Argument, Campaign, FormErrors, LobbyForm, Person, Politician,
};
use crate::token::generate_token;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyData {
    pub campaign: Campaign,
    pub politician: Politician,
    pub arguments: Vec<Argument>,
    pub form: LobbyForm,
    pub errors: FormErrors,
}

/// GET /{locale}/lobby/{slug} - Contact form for one politician.
pub async fn lobby(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path((locale, slug)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let locale = parse_locale(&locale)?;
    let politician = load_politician(&state, &slug).await?;

    render_form(
        &state,
        locale,
        campaign,
        politician,
        LobbyForm::default(),
        FormErrors::new(),
    )
    .await
}

/// POST /{locale}/lobby/{slug} - Submit an argument to a politician.
pub async fn lobby_submit(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path((locale, slug)): Path<(String, String)>,
    Form(form): Form<LobbyForm>,
) -> Result<Response, AppError> {
    let locale = parse_locale(&locale)?;
    let politician = load_politician(&state, &slug).await?;
    let form = form.normalized();

    if let Err(errors) = form.check() {
        return render_form(&state, locale, campaign, politician, form, errors).await;
    }

    let argument = match form.argument_id() {
        Some(id) => state.repo.get_argument(campaign.id, id).await?,
        None => None,
    };
    let Some(argument) = argument else {
        let mut errors = FormErrors::new();
        errors.insert(
            "argument".to_string(),
            vec!["Please choose one of the arguments".to_string()],
        );
        return render_form(&state, locale, campaign, politician, form, errors).await;
    };

    let submission = Submission {
        campaign_id: campaign.id,
        politician_id: politician.id,
        argument_id: argument.id,
        form: &form,
        locale,
        token: generate_token(),
        color: random_color(),
        now: Utc::now(),
    };
    let outcome = state.repo.submit_entry(&submission).await?;

    tracing::info!(
        campaign = %campaign.slug,
        politician = %politician.slug,
        entry_id = outcome.entry.id,
        entry_created = outcome.entry_created,
        confirmed = outcome.person.confirmed,
        "Lobby submission stored"
    );

    if outcome.person.confirmed {
        let message =
            mail::thanks_message(&state.config.mail_from, &outcome.person, &politician, &campaign);
        state.mailer.send(&message).await?;
        return Ok(Redirect::to(&format!("/{}/thanks/{}", locale, outcome.entry.id)).into_response());
    }

    let token = outcome
        .person
        .confirmation_token
        .as_deref()
        .ok_or_else(|| AppError::Internal("Unconfirmed person without token".to_string()))?;
    let links = confirmation_links(&state, &campaign, &politician, locale, token);
    let message = mail::confirmation_message(
        &state.config.mail_from,
        &outcome.person,
        &politician,
        &campaign,
        &argument,
        &links,
    );
    state.mailer.send(&message).await?;

    Ok(Redirect::to(&format!("/{}/confirm/{}", locale, outcome.entry.id)).into_response())
}

/// GET /{locale}/lobby/{slug}/confirm/{token} - Confirm a submission by email token.
pub async fn lobby_confirm(
    State(state): State<AppState>,
    CurrentCampaign(campaign): CurrentCampaign,
    Path((locale, slug, token)): Path<(String, String, String)>,
) -> Result<Response, AppError> {
    let locale = parse_locale(&locale)?;
    let politician = load_politician(&state, &slug).await?;

    let person = state
        .repo
        .find_person_by_token(&token)
        .await?
        .ok_or(AppError::TokenNotFound)?;

    if person.is_token_expired(Utc::now()) {
        tracing::warn!(person_id = person.id, "Expired confirmation token presented");
        return Err(AppError::TokenExpired);
    }

    let entry = state
        .repo
        .confirm_person(&person, campaign.id, politician.id)
        .await?;

    let person = Person {
        confirmed: true,
        confirmation_token: None,
        confirmation_expires: None,
        ..person
    };

    tracing::info!(
        campaign = %campaign.slug,
        politician = %politician.slug,
        person_id = person.id,
        entry_id = entry.id,
        "Person confirmed"
    );

    let message = mail::thanks_message(&state.config.mail_from, &person, &politician, &campaign);
    state.mailer.send(&message).await?;

    Ok(Redirect::to(&format!("/{}/thanks/{}", locale, entry.id)).into_response())
}

async fn load_politician(state: &AppState, slug: &str) -> Result<Politician, AppError> {
    state
        .repo
        .get_politician_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Politician {} not found", slug)))
}

async fn render_form(
    state: &AppState,
    locale: Locale,
    campaign: Campaign,
    politician: Politician,
    form: LobbyForm,
    errors: FormErrors,
) -> Result<Response, AppError> {
    let arguments = state.repo.list_arguments(campaign.id).await?;
    let status = if errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let page = Page::new(
        "campaign/lobby",
        locale,
        LobbyData {
            campaign,
            politician,
            arguments,
            form,
            errors,
        },
    );
    Ok((status, page).into_response())
}

fn confirmation_links(
    state: &AppState,
    campaign: &Campaign,
    politician: &Politician,
    locale: Locale,
    token: &str,
) -> ConfirmationLinks {
    let base = state.config.campaign_base_url(&campaign.slug);
    ConfirmationLinks {
        confirm_url: format!(
            "{}/{}/lobby/{}/confirm/{}",
            base, locale, politician.slug, token
        ),
        campaign_url: format!("{}/{}/", base, locale),
    }
}
