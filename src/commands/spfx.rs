use crate::*;
use std::path::Path;

pub fn handle_spfx_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Spfx { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        SpfxCommands::Project { command } => match command {
            ProjectCommands::Upgrade { project_dir } => {
                let project = load_project(Path::new(project_dir))?;
                let findings = upgrade(&project, &default_rules());
                tracing::info!("{} finding(s) for {}", findings.len(), project.path.display());
                if findings.is_empty() && !cli.output.is_json() {
                    println!("Project is up to date");
                } else {
                    print_out(cli.output, &findings, |f| {
                        format!("{}\t{:?}\t{}\t{}", f.id, f.severity, f.file, f.title)
                    })?;
                }
            }
        },
    }

    Ok(true)
}
