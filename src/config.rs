//! Command-line arguments and the query they resolve to.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{Error, Result};

pub const DEFAULT_REGION: &str = "ap-northeast-1";
pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_TAG_KEY: &str = "Name";

#[derive(Parser, Debug)]
#[command(name = "describe-ec2", version)]
#[command(about = "Look up EC2 instances and store their public dns names to text files")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "DESCRIBE_EC2_LOG_LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the ec2 instance public dns name by tag search, then store it to a text file in the current directory.
    Tag(TagArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TagArgs {
    /// AWS credential file name; '$HOME/.aws/credentials' when omitted
    #[arg(long, value_name = "PATH")]
    pub credential_filename: Option<String>,

    /// AWS credential profile
    #[arg(long, default_value = DEFAULT_PROFILE, value_name = "NAME")]
    pub credential_profile: String,

    /// AWS region
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Target tag key
    #[arg(long, default_value = DEFAULT_TAG_KEY, value_name = "KEY")]
    pub tag_key: String,

    /// Tag value to search for, EC2 wildcards allowed (e.g. '*dev*')
    #[arg(value_name = "SEARCH_VALUE", num_args = 0..)]
    pub search: Vec<String>,
}

/// Credential profile and optional shared credentials file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub profile: String,
    pub filename: Option<PathBuf>,
}

/// Fully resolved tag lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub tag_key: String,
    pub search_value: String,
    pub region: String,
    pub credential: Credential,
}

impl TagArgs {
    /// The single positional search value.
    pub fn search_value(&self) -> Result<&str> {
        match self.search.as_slice() {
            [] => Err(Error::Args("search text is required".to_string())),
            [value] if value.is_empty() => {
                Err(Error::Args("search text is required".to_string()))
            }
            [value] => Ok(value),
            _ => Err(Error::Args("search text should be single".to_string())),
        }
    }

    pub fn to_query(&self) -> Result<Query> {
        let search_value = self.search_value()?.to_string();
        let filename = self
            .credential_filename
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(expand_home)
            .transpose()?;

        Ok(Query {
            tag_key: self.tag_key.clone(),
            search_value,
            region: self.region.clone(),
            credential: Credential {
                profile: self.credential_profile.clone(),
                filename,
            },
        })
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => dirs_next::home_dir()
            .map(|home| home.join(rest))
            .ok_or_else(|| Error::Config("Could not locate home directory".to_string())),
        None => Ok(PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> TagArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Tag(tag) => tag,
        }
    }

    #[test]
    fn defaults_are_applied() {
        let args = parse(&["describe-ec2", "tag", "web-dev-1"]);
        let query = args.to_query().unwrap();

        assert_eq!(query.region, "ap-northeast-1");
        assert_eq!(query.tag_key, "Name");
        assert_eq!(query.credential.profile, "default");
        assert_eq!(query.credential.filename, None);
        assert_eq!(query.search_value, "web-dev-1");
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "describe-ec2",
            "tag",
            "--credential-filename",
            "/tmp/creds",
            "--credential-profile",
            "stg",
            "--region",
            "us-east-1",
            "--tag-key",
            "Role",
            "*dev*",
        ]);
        let query = args.to_query().unwrap();

        assert_eq!(query.region, "us-east-1");
        assert_eq!(query.tag_key, "Role");
        assert_eq!(query.search_value, "*dev*");
        assert_eq!(
            query.credential,
            Credential {
                profile: "stg".to_string(),
                filename: Some(PathBuf::from("/tmp/creds")),
            }
        );
    }

    #[test]
    fn missing_search_value() {
        let args = parse(&["describe-ec2", "tag"]);
        let err = args.search_value().unwrap_err();
        assert!(matches!(err, Error::Args(ref m) if m == "search text is required"));
    }

    #[test]
    fn empty_search_value() {
        let args = parse(&["describe-ec2", "tag", ""]);
        assert!(matches!(args.search_value(), Err(Error::Args(_))));
    }

    #[test]
    fn too_many_search_values() {
        let args = parse(&["describe-ec2", "tag", "a", "b"]);
        let err = args.to_query().unwrap_err();
        assert!(matches!(err, Error::Args(ref m) if m == "search text should be single"));
    }

    #[test]
    fn empty_credential_filename_uses_default_location() {
        let args = parse(&["describe-ec2", "tag", "--credential-filename", "", "x"]);
        assert_eq!(args.to_query().unwrap().credential.filename, None);
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("creds").unwrap(), PathBuf::from("creds"));
    }

    #[test]
    fn expand_home_resolves_tilde() {
        if let Some(home) = dirs_next::home_dir() {
            assert_eq!(
                expand_home("~/.aws/credentials").unwrap(),
                home.join(".aws/credentials")
            );
        }
    }
}
