use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::{fmt::Display, str::FromStr};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Page size requested from the provider's listing API
    #[clap(short, long, env, default_value_t = 100, parse(try_from_str=page_size_in_range))]
    pub page_size: u32,

    #[clap(subcommand)]
    pub provider: Provider,
}

#[derive(Subcommand, Debug)]
pub enum Provider {
    /// Aggregate repository sizes of a GitHub organization
    Github {
        /// Organization name
        #[clap(short, long, env)]
        org: String,

        /// API OAuth access token
        #[clap(short = 't', long, env)]
        api_token: SecretString,

        /// Repository API URL, override for GitHub Enterprise instances
        #[clap(long, env, default_value = "https://api.github.com")]
        api_url: String,
    },
    /// Aggregate repository sizes of a Bitbucket workspace
    Bitbucket {
        /// Workspace name
        #[clap(short, long, env)]
        workspace: String,

        /// Bitbucket user name
        #[clap(short, long, env)]
        username: String,

        /// App password of the user
        #[clap(short, long, env)]
        app_password: SecretString,

        /// Repository API URL
        #[clap(long, env, default_value = "https://api.bitbucket.org/2.0")]
        api_url: String,
    },
}

fn page_size_in_range(value: &str) -> clap::Result<u32, String> {
    number_in_range(value, 1, 100, "page-size".to_string())
}

fn number_in_range<T>(value: &str, min: T, max: T, name: String) -> clap::Result<T, String>
where
    T: FromStr + PartialOrd + Display,
    <T as FromStr>::Err: Display,
{
    value.parse::<T>().map_err(|err| format!("{}", err)).and_then(|value| {
        if value < min || value > max {
            return Err(format!("{} is not in range {} .. {}.", name, min, max));
        }
        Ok(value)
    })
}
