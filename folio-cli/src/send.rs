use crate::config::Configuration;
use clap::Args;
use folio_client::{ContactForm, Field, HttpContactApi, Level};
use miette::Result;

#[derive(Args)]
pub struct SendArgs {
    /// Your name
    #[clap(long)]
    name: String,

    /// Address the site owner can reply to
    #[clap(long)]
    email: String,

    /// The message itself
    #[clap(long)]
    message: String,

    /// Contact endpoint to post to. Defaults to `CONTACT_ENDPOINT` or the local server
    #[clap(long)]
    endpoint: Option<String>,
}

pub async fn handle(args: SendArgs, config: &Configuration) -> Result<()> {
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config.contact_endpoint.clone());

    let form = ContactForm::new(HttpContactApi::builder().endpoint(endpoint).build());
    form.set(Field::Name, args.name);
    form.set(Field::Email, args.email);
    form.set(Field::Message, args.message);

    let notification = form.submit().await;
    match notification.level {
        Level::Success | Level::Info => {
            println!("{notification}");
            Ok(())
        }
        Level::Warning | Level::Error => Err(miette::miette!("{notification}")),
    }
}
