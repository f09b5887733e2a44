use anyhow::bail;
use clap::Subcommand;
use hnf_config::Config;
use hnf_di::Provide;
use hnf_form::{ContactFormController, SubmitOutcome, FAILED_NOTICE, SENT_NOTICE};
use hnf_models::contact::ContactField;

use crate::environment::{types::ContactApi, ConfigProvider};

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit the contact form to the configured backend
    #[command(aliases(["s"]))]
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                subject,
                message,
            } => send(config, [name, email, subject, message]).await,
        }
    }
}

async fn send(config: Config, values: [String; 4]) -> anyhow::Result<()> {
    let mut provider = ConfigProvider::new(&config)?;
    let form = ContactFormController::new(provider.provide::<ContactApi>());
    for (field, value) in ContactField::ALL.into_iter().zip(values) {
        form.set_field(field, value);
    }

    match form.submit().await {
        SubmitOutcome::Sent => {
            println!("{SENT_NOTICE}");
            Ok(())
        }
        SubmitOutcome::Invalid | SubmitOutcome::Rejected => {
            for (field, error) in form.field_errors() {
                eprintln!("{field}: {error}");
            }
            bail!("{FAILED_NOTICE}")
        }
        SubmitOutcome::Failed | SubmitOutcome::AlreadySubmitting => bail!("{FAILED_NOTICE}"),
    }
}
