//! Configuration initialization command.
//!
//! Writes a default `config.json` to the platform data directory so users
//! have a file to edit, or removes it with `--delete`. Tempo runs fine
//! without one; every setting has a default.

use crate::libs::{config::Config, messages::Message};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_info!(Message::ConfigDeleted);
        return Ok(());
    }

    let config = Config {
        tracker: Some(Default::default()),
        ..Default::default()
    };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
