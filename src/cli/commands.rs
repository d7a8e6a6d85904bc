use crate::cinder::auth::BearerToken;
use crate::cinder::client::{ClientConfig, VolumeClient};
use crate::cinder::protocol::{Volume, VolumeCreate};
use crate::cinder::trust::TrustStore;
use crate::cli::args::{Cli, Commands};
use crate::cli::completions::handle_completion_command;
use crate::utils::errors::Result;
use crate::utils::output::OutputFormat;
use std::io;
use std::time::Duration;

pub async fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "cinder_rs=warn",  // Default: warnings only
            1 => "cinder_rs=info",  // -v: info level
            2 => "cinder_rs=debug", // -vv: debug level
            _ => "cinder_rs=trace", // -vvv+: trace level
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    let output = OutputFormat::new(cli.raw);

    // Completions need no credentials or endpoint
    if let Commands::Completion { ref command } = cli.command {
        return handle_completion_command(command);
    }

    let token = BearerToken::from_env_or_file(&cli.token_file)?;
    let trust = TrustStore::from_pem_file(&cli.ca_file)?;
    let config = ClientConfig {
        endpoint: cli.endpoint.clone(),
        timeout: Duration::from_secs(cli.timeout),
    };
    let client = VolumeClient::new(config, Some(trust), token)?;

    match cli.command {
        Commands::Create {
            size,
            volume_type,
            name,
            description,
            availability_zone,
        } => {
            let request = VolumeCreate {
                size,
                volume_type,
                name,
                description,
                availability_zone,
            };
            let volume = client.create(&request).await?;
            tracing::info!("Volume {} accepted for provisioning", volume.id);
            println!("{} - Created at {}", volume.id, created_at_display(&volume));
            Ok(())
        }
        Commands::Get { id } => {
            let volume = client.get(&id).await?;
            print_volume(&volume, &output);
            Ok(())
        }
        Commands::Delete { id } => {
            client.delete(&id).await?;
            println!("Requested deletion of {id}");
            Ok(())
        }
        Commands::Completion { .. } => Ok(()), // handled above
    }
}

/// Creation time for display, falling back to the raw server string when the
/// format is unrecognized.
fn created_at_display(volume: &Volume) -> String {
    if let Some(ts) = volume.created_at_utc() {
        return ts.to_rfc3339();
    }

    volume
        .created_at
        .clone()
        .unwrap_or_else(|| "unknown".to_string())
}

fn print_volume(volume: &Volume, output: &OutputFormat) {
    let mut pairs: Vec<(&str, String)> = vec![("id", volume.id.clone())];

    if let Some(name) = &volume.name {
        pairs.push(("name", name.clone()));
    }
    if let Some(status) = volume.status {
        pairs.push(("status", status.to_string()));
    }
    if let Some(size) = volume.size {
        pairs.push(("size", format!("{size} GiB")));
    }
    if let Some(volume_type) = &volume.volume_type {
        pairs.push(("type", volume_type.clone()));
    }
    if let Some(zone) = &volume.availability_zone {
        pairs.push(("availability_zone", zone.clone()));
    }
    if let Some(bootable) = &volume.bootable {
        pairs.push(("bootable", bootable.clone()));
    }
    if volume.created_at.is_some() {
        pairs.push(("created_at", created_at_display(volume)));
    }
    if let Some(updated_at) = &volume.updated_at {
        pairs.push(("updated_at", updated_at.clone()));
    }
    if let Some(description) = &volume.description {
        pairs.push(("description", description.clone()));
    }
    if !volume.metadata.is_empty() {
        let mut entries: Vec<String> = volume
            .metadata
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        entries.sort();
        pairs.push(("metadata", entries.join(", ")));
    }

    output.print_key_value(&pairs);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume_from(body: &str) -> Volume {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn created_at_display_normalizes_known_formats() {
        let volume =
            volume_from(r#"{"id":"v","created_at":"2024-01-01T00:00:00Z"}"#);

        assert_eq!(created_at_display(&volume), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn created_at_display_falls_back_to_raw_value() {
        let volume = volume_from(r#"{"id":"v","created_at":"soonish"}"#);

        assert_eq!(created_at_display(&volume), "soonish");
    }

    #[test]
    fn created_at_display_handles_missing_timestamp() {
        let volume = volume_from(r#"{"id":"v"}"#);

        assert_eq!(created_at_display(&volume), "unknown");
    }
}
