use thiserror::Error;
use tracing::info;

use crate::domain::session::{
    entities::{Session, SignUpInput, User},
    ports::{AuthError, IdentityProvider},
};

pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength,
    ContainsDigit,
    ContainsUppercase,
}

impl PasswordRequirement {
    pub const ALL: [PasswordRequirement; 3] = [
        PasswordRequirement::MinLength,
        PasswordRequirement::ContainsDigit,
        PasswordRequirement::ContainsUppercase,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PasswordRequirement::MinLength => "At least 8 characters",
            PasswordRequirement::ContainsDigit => "Contains a number",
            PasswordRequirement::ContainsUppercase => "Contains uppercase letter",
        }
    }

    pub fn is_met(&self, password: &str) -> bool {
        match self {
            PasswordRequirement::MinLength => password.chars().count() >= MIN_PASSWORD_CHARS,
            PasswordRequirement::ContainsDigit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRequirement::ContainsUppercase => {
                password.chars().any(|c| c.is_ascii_uppercase())
            }
        }
    }
}

/// Message shown on the credential forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialNotice {
    #[error("Please meet all password requirements")]
    UnmetRequirements,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email or password. Please check your credentials and try again.")]
    InvalidCredentials,

    #[error("Please verify your email address before logging in.")]
    EmailNotConfirmed,

    #[error("This email is already registered. Please login instead.")]
    AlreadyRegistered,

    #[error("{0}")]
    Provider(String),
}

impl From<AuthError> for CredentialNotice {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => CredentialNotice::InvalidCredentials,
            AuthError::EmailNotConfirmed => CredentialNotice::EmailNotConfirmed,
            AuthError::AlreadyRegistered => CredentialNotice::AlreadyRegistered,
            other => CredentialNotice::Provider(other.to_string()),
        }
    }
}

pub fn unmet_requirements(password: &str) -> Vec<PasswordRequirement> {
    PasswordRequirement::ALL
        .into_iter()
        .filter(|requirement| !requirement.is_met(password))
        .collect()
}

pub fn check_new_password(password: &str, confirmation: &str) -> Result<(), CredentialNotice> {
    if !unmet_requirements(password).is_empty() {
        return Err(CredentialNotice::UnmetRequirements);
    }
    if password != confirmation {
        return Err(CredentialNotice::PasswordMismatch);
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub async fn submit<P: IdentityProvider>(&self, provider: &P) -> Result<Session, CredentialNotice> {
        let session = provider
            .sign_in_with_password(self.email.trim().to_string(), self.password.clone())
            .await?;

        info!(user_id = %session.user.id, "Signed in");
        Ok(session)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub async fn submit<P: IdentityProvider>(&self, provider: &P) -> Result<User, CredentialNotice> {
        check_new_password(&self.password, &self.confirm_password)?;

        let full_name = self.full_name.trim();
        let user = provider
            .sign_up(SignUpInput {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                full_name: (!full_name.is_empty()).then(|| full_name.to_string()),
            })
            .await?;

        info!(user_id = %user.id, "Account registered");
        Ok(user)
    }
}

#[derive(Debug, Clone)]
pub struct ForgotPasswordForm {
    pub email: String,
    /// Where the recovery link lands, normally `{origin}/reset-password`.
    pub redirect_to: String,
}

impl ForgotPasswordForm {
    pub async fn submit<P: IdentityProvider>(&self, provider: &P) -> Result<(), CredentialNotice> {
        provider
            .reset_password_for_email(self.email.trim().to_string(), self.redirect_to.clone())
            .await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    /// Sets the new password on the recovery session, then signs out so the
    /// user logs in again with it.
    pub async fn submit<P: IdentityProvider>(&self, provider: &P) -> Result<User, CredentialNotice> {
        check_new_password(&self.password, &self.confirm_password)?;

        let user = provider.update_password(self.password.clone()).await?;
        provider.sign_out().await?;

        info!(user_id = %user.id, "Password reset");
        Ok(user)
    }
}
