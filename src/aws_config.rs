use aws_config::profile::profile_file::{ProfileFileKind, ProfileFiles};
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::BehaviorVersion;
use aws_types::region::Region;
use tracing::debug;

use crate::config::Credential;

/// Build an SDK config pinned to `region`, reading keys only from the shared credentials profile.
pub async fn configure_aws(region: &str, credential: &Credential) -> aws_types::SdkConfig {
    let mut provider = ProfileFileCredentialsProvider::builder().profile_name(&credential.profile);

    if let Some(path) = &credential.filename {
        debug!("Using credential file: {}", path.display());
        provider = provider.profile_files(credential_files(path));
    }

    debug!(
        "Configuring AWS session (region: {}, profile: {})",
        region, credential.profile
    );

    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .credentials_provider(provider.build())
        .load()
        .await
}

fn credential_files(path: &std::path::Path) -> ProfileFiles {
    ProfileFiles::builder()
        .with_file(ProfileFileKind::Credentials, path)
        .include_default_config_file(true)
        .build()
}
