//! Control State demo - drives one form, input and switch controller
//! through a scripted session and prints each view-model as JSON.

use anyhow::Result;
use control_state::state::{FieldValidator, InputProps, InputType, SwitchProps};
use control_state::use_cases::{change_handler_fn, submit_handler_fn, RegisterFieldRequest};
use control_state::{ControlConfig, FormController, InputController, SwitchController};
use serde::Serialize;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "control_state=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ControlConfig::load()?;
    tracing::info!("Using config {config:?}");

    run_form(&config).await?;
    run_input(&config)?;
    run_switch().await?;
    Ok(())
}

fn print<T: Serialize>(label: &str, view_model: &T) -> Result<()> {
    println!("== {label}");
    println!("{}", serde_json::to_string_pretty(view_model)?);
    Ok(())
}

async fn run_form(config: &ControlConfig) -> Result<()> {
    let mut form = FormController::new(config.clone());
    form.register_field(RegisterFieldRequest::new("email").required(true))?;
    form.register_field(
        RegisterFieldRequest::new("password")
            .required(true)
            .validator(FieldValidator::new(|value| match value.as_text() {
                Some(s) if s.len() < 8 => Some("Password must be at least 8 characters".into()),
                _ => None,
            })),
    )?;

    let handler = submit_handler_fn(|data| async move {
        tracing::info!("Submitting {} fields", data.len());
        Ok::<(), anyhow::Error>(())
    });

    let outcome = form.submit(&handler).await?;
    tracing::info!("First submit: {outcome:?}");
    print("form after empty submit", &form.view_model())?;

    form.set_field_value("email", "ada@example.com")?;
    form.set_field_value("password", "correct horse")?;
    let outcome = form.submit(&handler).await?;
    tracing::info!("Second submit: {outcome:?}");
    print("form after valid submit", &form.view_model())
}

fn run_input(config: &ControlConfig) -> Result<()> {
    let mut input = InputController::new(
        InputProps {
            input_type: Some(InputType::Email),
            required: Some(true),
            ..Default::default()
        },
        config.clone(),
    )?;
    input.change("not-an-email")?;
    input.validate()?;
    print("input after validation", &input.view_model())
}

async fn run_switch() -> Result<()> {
    let mut switch = SwitchController::new(SwitchProps::default())?;
    let flaky = change_handler_fn(|value| async move {
        if value {
            anyhow::bail!("Network error")
        }
        Ok(())
    });

    let response = switch.toggle(Some(&flaky)).await;
    tracing::info!("Toggle on: success={} error={:?}", response.success, response.error);
    print("switch after failed toggle", &switch.view_model())
}
