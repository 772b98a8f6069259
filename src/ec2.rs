use std::future::Future;

use aws_sdk_ec2::types::{Filter, Reservation};
use aws_sdk_ec2::Client as Ec2Client;
use tracing::debug;

use crate::aws_config::configure_aws;
use crate::config::Query;
use crate::error::{Error, Result};

/// Source of reservations matching a tag query.
pub trait InstanceLookup {
    fn describe_by_tag(&self, query: &Query) -> impl Future<Output = Result<Vec<Reservation>>> + Send;
}

/// Looks instances up through the EC2 API, opening a session per query.
#[derive(Debug, Default)]
pub struct Ec2Lookup;

impl Ec2Lookup {
    async fn client(&self, query: &Query) -> Ec2Client {
        let config = configure_aws(&query.region, &query.credential).await;
        Ec2Client::new(&config)
    }
}

impl InstanceLookup for Ec2Lookup {
    fn describe_by_tag(&self, query: &Query) -> impl Future<Output = Result<Vec<Reservation>>> + Send {
        async move {
            let client = self.client(query).await;
            describe_by_tag_with(&client, query).await
        }
    }
}

/// Single DescribeInstances call on `client`; truncated result sets are not followed.
pub async fn describe_by_tag_with(client: &Ec2Client, query: &Query) -> Result<Vec<Reservation>> {
    let filter = tag_filter(&query.tag_key, &query.search_value);
    debug!("DescribeInstances with filter {:?}", filter);

    let resp = client
        .describe_instances()
        .filters(filter)
        .send()
        .await
        .map_err(Error::lookup)?;

    if resp.next_token().is_some() {
        debug!("DescribeInstances response was truncated");
    }

    let reservations = resp.reservations().to_vec();
    if reservations.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(reservations)
}

/// `tag:<key>` filter with a single value. EC2 wildcards are passed through.
pub fn tag_filter(tag_key: &str, value: &str) -> Filter {
    Filter::builder()
        .name(format!("tag:{}", tag_key))
        .values(value)
        .build()
}
