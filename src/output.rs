//! Stores public dns names to `<tagValue>_<instanceId>` files.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use aws_sdk_ec2::types::{Instance, Reservation};
use tracing::debug;

use crate::error::{Error, Result};

/// A file created or truncated by [`OutputWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub content: String,
}

/// Value of the first tag named `tag_key`, or `""`.
pub fn tag_value<'a>(instance: &'a Instance, tag_key: &str) -> &'a str {
    instance
        .tags()
        .iter()
        .find(|tag| tag.key() == Some(tag_key))
        .and_then(|tag| tag.value())
        .unwrap_or_default()
}

pub fn file_name(instance: &Instance, tag_key: &str) -> String {
    format!(
        "{}_{}",
        tag_value(instance, tag_key),
        instance.instance_id().unwrap_or_default()
    )
}

/// True when `name` is a single normal path component, so the file stays in the output directory.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

pub struct OutputWriter {
    dir: PathBuf,
    tag_key: String,
}

impl OutputWriter {
    pub fn new(dir: impl AsRef<Path>, tag_key: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            tag_key: tag_key.into(),
        }
    }

    /// Create or truncate the instance's file with its raw public dns name.
    pub fn write_instance(&self, instance: &Instance) -> Result<WrittenFile> {
        let name = file_name(instance, &self.tag_key);
        let path = self.dir.join(&name);

        if !is_plain_file_name(&name) {
            return Err(Error::Io {
                path: path.display().to_string(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "tag value must not contain path separators",
                ),
            });
        }

        let content = instance.public_dns_name().unwrap_or_default().to_string();

        fs::write(&path, content.as_bytes()).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;

        Ok(WrittenFile { path, content })
    }

    /// Write every instance of every reservation, reporting each file as it lands.
    ///
    /// A failed write does not stop the loop; the count of failures is returned.
    pub fn write_reservations(&self, reservations: &[Reservation]) -> usize {
        let mut failures = 0;

        for instance in reservations.iter().flat_map(|r| r.instances()) {
            match self.write_instance(instance) {
                Ok(written) => println!(
                    "Completed saving file {}, that content is '{}'",
                    written.path.display(),
                    written.content
                ),
                Err(e) => {
                    debug!("Skipping instance {:?}", instance.instance_id());
                    eprintln!("error:{}", e);
                    failures += 1;
                }
            }
        }

        failures
    }
}
