/// `devstream org`: inspect a GitHub organization
///
/// Without flags, prints the organization metadata. With `--repos`, lists
/// public repository names, optionally filtered by license key.

use crate::cli::OrgArgs;
use crate::config::Config;
use devstream_github::client::OrgClient;
use devstream_github::transport::HttpTransport;
use std::sync::Arc;

pub async fn run(config: &Config, args: &OrgArgs) -> anyhow::Result<()> {
    let transport = Arc::new(HttpTransport::new(config.github.token.clone())?);
    let client = OrgClient::with_base_url(&args.org, transport, &config.github.api_url);

    if args.repos {
        let names = client.public_repos(args.license.as_deref()).await?;

        for name in &names {
            println!("{}", name);
        }

        match &args.license {
            Some(license) => println!("{} repositories under {}", names.len(), license),
            None => println!("{} public repositories", names.len()),
        }
    } else {
        let org = client.org().await?;
        println!("{}", serde_json::to_string_pretty(org)?);
    }

    Ok(())
}
