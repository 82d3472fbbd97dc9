//! Handlers for the account endpoints: registration, login, logout, the
//! authentication probe, and refresh-token exchange.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use chrono::Utc;
use harborline_core::error::CoreError;
use harborline_core::roles::{ROLE_ADMIN, ROLE_NORMAL};
use harborline_core::types::DbId;
use harborline_core::validation::FieldErrors;
use harborline_db::models::session::CreateSession;
use harborline_db::models::user::{CreateUser, User};
use harborline_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register/`.
///
/// There is deliberately no superuser field: registration always creates a
/// normal account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(rename = "firstName")]
    #[validate(length(min = 1, message = "First name must not be empty."))]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[validate(length(min = 1, message = "Last name must not be empty."))]
    pub last_name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long."))]
    pub password: String,
}

/// Response body for `POST /register/`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub refresh: String,
    pub access: String,
    pub message: String,
    pub role: String,
}

/// Request body for `POST /login/`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub id: DbId,
    pub role: String,
}

/// Response body for `POST /login/`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub refresh: String,
    pub access: String,
    pub user: UserInfo,
}

/// Request body for `POST /token/refresh/`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Response body for `POST /token/refresh/`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access: String,
    pub refresh: String,
}

/// Response body for `GET /check_authentication`.
#[derive(Debug, Serialize)]
pub struct CheckAuthResponse {
    pub authenticated: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register/
///
/// Creates a non-superuser, non-staff account with its profile. The response
/// always reports role "normal" regardless of any later account updates.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    if UserRepo::find_by_email(&state.pool, &input.email).await?.is_some() {
        errors.push("email", "A user with that email already exists.");
    }
    errors.into_result().map_err(AppError::Validation)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        password_hash,
    };
    let (user, _profile) = UserRepo::create_with_profile(&state.pool, &create).await?;

    let (access, refresh) = issue_tokens(&state, &user, ROLE_NORMAL).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            refresh,
            access,
            message: "User registered successfully".to_string(),
            role: ROLE_NORMAL.to_string(),
        }),
    ))
}

/// POST /login/
///
/// The email doubles as the username. All failure paths use the same
/// generic message so the response does not reveal whether the account
/// exists.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let invalid =
        || AppError::Core(CoreError::InvalidCredentials("Invalid email or password.".into()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(invalid());
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    // The role is derived from the superuser flag at token-issuance time.
    let role = derive_role(&user);
    let (access, refresh) = issue_tokens(&state, &user, role).await?;

    Ok(Json(LoginResponse {
        refresh,
        access,
        user: UserInfo {
            username: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            id: user.id,
            role: role.to_string(),
        },
    }))
}

/// GET /user_logout/
///
/// Revokes the caller's sessions when a valid token is presented, then
/// redirects to the landing route either way.
pub async fn logout(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
) -> AppResult<Redirect> {
    if let Some(user) = user {
        SessionRepo::revoke_all_for_user(&state.pool, user.user_id).await?;
    }
    Ok(Redirect::to("/"))
}

/// GET /check_authentication
///
/// Pure read of session state; never fails.
pub async fn check_authentication(MaybeAuthUser(user): MaybeAuthUser) -> Json<CheckAuthResponse> {
    Json(CheckAuthResponse {
        authenticated: user.is_some(),
    })
}

/// POST /token/refresh/
///
/// Exchanges a valid refresh token for a new access + refresh pair. The
/// session behind the used token is revoked (rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let invalid = || {
        AppError::Core(CoreError::InvalidCredentials(
            "Invalid or expired refresh token.".into(),
        ))
    };

    let token_hash = hash_refresh_token(&input.refresh);
    let session = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(invalid)?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(invalid)?;
    if !user.is_active {
        return Err(invalid());
    }

    let role = derive_role(&user);
    let (access, refresh) = issue_tokens(&state, &user, role).await?;

    Ok(Json(RefreshResponse { access, refresh }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `admin` if the account is a superuser, else `normal`.
fn derive_role(user: &User) -> &'static str {
    if user.is_superuser {
        ROLE_ADMIN
    } else {
        ROLE_NORMAL
    }
}

/// Generate access + refresh tokens and persist the session row.
async fn issue_tokens(state: &AppState, user: &User, role: &str) -> AppResult<(String, String)> {
    let access = generate_access_token(user.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok((access, refresh_plaintext))
}
