//! Demonstration sequence: create, look up, update and delete one user.

use tracing::{info, warn};

use common::AppError;
use domain::{Locale, User, UserId};

use crate::service::UserService;

/// One step of the demonstration sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    Create,
    Lookup,
    Update,
    Delete,
}

impl DemoStep {
    /// Short notice printed when this step fails
    pub fn failure_notice(&self, locale: Locale) -> &'static str {
        match self {
            DemoStep::Create => locale.create_step_failed(),
            DemoStep::Lookup => locale.lookup_step_failed(),
            DemoStep::Update => locale.update_step_failed(),
            DemoStep::Delete => locale.delete_step_failed(),
        }
    }
}

/// How the demonstration ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoOutcome {
    /// All four steps succeeded
    Completed,
    /// The sequence stopped at `step`; later steps were not attempted
    Halted { step: DemoStep, error: AppError },
}

impl DemoOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, DemoOutcome::Completed)
    }
}

/// Run the sequence against `service`, stopping at the first failure.
pub async fn run(service: &dyn UserService, locale: Locale, user_id: UserId) -> DemoOutcome {
    let user = User::new(user_id, locale.demo_initial_name());
    let renamed = user.renamed(locale.demo_updated_name());

    info!(user_id, %locale, "Starting demo sequence");

    if let Err(error) = service.create(user).await {
        return halt(DemoStep::Create, error, locale);
    }
    if let Err(error) = service.get_by_id(user_id).await {
        return halt(DemoStep::Lookup, error, locale);
    }
    if let Err(error) = service.update_user(renamed.clone()).await {
        return halt(DemoStep::Update, error, locale);
    }
    if let Err(error) = service.delete_user(renamed).await {
        return halt(DemoStep::Delete, error, locale);
    }

    info!(user_id, "Demo sequence completed");
    DemoOutcome::Completed
}

fn halt(step: DemoStep, error: AppError, locale: Locale) -> DemoOutcome {
    warn!(
        code = error.code(),
        "{}: {}",
        step.failure_notice(locale),
        error.user_message(locale)
    );
    DemoOutcome::Halted { step, error }
}
