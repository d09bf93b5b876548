use crate::*;

pub fn handle_spo_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<bool> {
    let Commands::Spo { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        SpoCommands::Connect { url, access_token } => {
            let site = connect(url, access_token.clone())?;
            print_one(cli.output, status_of(&site), |_| {
                format!("connected to {}", site.url)
            })?;
        }
        SpoCommands::Disconnect => {
            disconnect()?;
            print_one(cli.output, status_of(&Site::default()), |_| {
                "disconnected".to_string()
            })?;
        }
        SpoCommands::Status => {
            let site = load_session()?;
            print_one(cli.output, status_of(&site), |s| match &s.url {
                Some(url) => format!("Connected to {}", url),
                None => "Not connected".to_string(),
            })?;
        }
        SpoCommands::App { command } => match command {
            AppCommands::Add { file_path } => {
                let site = load_session()?;
                let transport = HttpTransport::new(config.general.request_timeout_ms)?;
                let tokens = StoredTokenProvider::from_site(&site);
                let entry = add_app(&site, file_path, &transport, &tokens)?;
                print_one(cli.output, entry, unique_id)?;
            }
        },
    }

    Ok(true)
}
