//! `lifemate notify`

use std::fs;
use std::path::Path;

use chrono::Utc;
use clap::ValueEnum;
use serde::de::DeserializeOwned;

use common::AppError;
use notification_service_lib::templates::{
    render_application_notification, render_interview_invitation, render_password_reset,
    render_verification, render_welcome,
};
use notification_service_lib::{
    composer_from_env, ApplicationNotificationEmail, InterviewInvitationEmail,
    NotificationServiceConfig, PasswordResetEmail, RenderedEmail, SendReceipt, VerificationEmail,
    WelcomeEmail,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Verification,
    PasswordReset,
    Application,
    Interview,
    Welcome,
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub async fn run(
    kind: KindArg,
    input: &Path,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if dry_run {
        let email = preview(kind, input)?;
        println!("Subject: {}\n\n{}", email.subject, email.html);
        return Ok(());
    }

    let receipt = send(kind, input).await?;
    println!("{}", receipt.message_id);
    Ok(())
}

/// Render without validating or sending
fn preview(kind: KindArg, input: &Path) -> Result<RenderedEmail, Box<dyn std::error::Error>> {
    let ctx = NotificationServiceConfig::from_env().render_context(Utc::now().date_naive());
    let email = match kind {
        KindArg::Verification => render_verification(&ctx, &load::<VerificationEmail>(input)?),
        KindArg::PasswordReset => render_password_reset(&ctx, &load::<PasswordResetEmail>(input)?),
        KindArg::Application => {
            render_application_notification(&ctx, &load::<ApplicationNotificationEmail>(input)?)
        }
        KindArg::Interview => {
            render_interview_invitation(&ctx, &load::<InterviewInvitationEmail>(input)?)
        }
        KindArg::Welcome => render_welcome(&ctx, &load::<WelcomeEmail>(input)?),
    };
    Ok(email)
}

async fn send(kind: KindArg, input: &Path) -> Result<SendReceipt, Box<dyn std::error::Error>> {
    let composer = composer_from_env()?;
    let result = match kind {
        KindArg::Verification => {
            composer
                .send_verification(&load::<VerificationEmail>(input)?)
                .await
        }
        KindArg::PasswordReset => {
            composer
                .send_password_reset(&load::<PasswordResetEmail>(input)?)
                .await
        }
        KindArg::Application => {
            composer
                .send_application_notification(&load::<ApplicationNotificationEmail>(input)?)
                .await
        }
        KindArg::Interview => {
            composer
                .send_interview_invitation(&load::<InterviewInvitationEmail>(input)?)
                .await
        }
        KindArg::Welcome => composer.send_welcome(&load::<WelcomeEmail>(input)?).await,
    };

    result.map_err(|err| {
        let err = AppError::from(err);
        Box::<dyn std::error::Error>::from(format!("{}: {}", err.code(), err.user_message()))
    })
}
