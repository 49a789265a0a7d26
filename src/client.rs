use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;

use crate::config::Config;

pub async fn connect(config: &Config) -> Result<Client> {
    tracing::debug!(kubeconfig = %config.kubeconfig.display(), "reading kubeconfig");
    let kubeconfig = Kubeconfig::read_from(&config.kubeconfig).with_context(|| {
        format!(
            "failed to read kubeconfig from {}",
            config.kubeconfig.display()
        )
    })?;

    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };
    let client_config = kube::Config::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .context("failed to load cluster configuration")?;
    tracing::debug!(cluster_url = %client_config.cluster_url, "initializing client");

    Client::try_from(client_config).context("unable to create the kube client")
}
