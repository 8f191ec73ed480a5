use super::{verify_known_ids, ClapSubCommand};
use crate::{
  constants::{DEFAULT_ADDRESS, DEFAULT_KNOWN_IDS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT},
  error::*,
  log::*,
  state::AppState,
  table::InMemoryPersonTable,
};
use async_trait::async_trait;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::net::SocketAddr;

pub(super) struct Run {}

#[async_trait]
impl ClapSubCommand for Run {
  fn subcmd() -> Command {
    Command::new("run")
      .about("Run the person API server")
      .arg(
        Arg::new("listen_address")
          .short('l')
          .long("listen-address")
          .value_name("ADDRESS")
          .default_value(DEFAULT_ADDRESS)
          .help("Listen address"),
      )
      .arg(
        Arg::new("port")
          .short('p')
          .long("port")
          .value_name("PORT")
          .default_value(DEFAULT_PORT)
          .help("Listen port"),
      )
      .arg(
        Arg::new("known_ids")
          .short('k')
          .long("known-ids")
          .value_name("IDs")
          .default_value(DEFAULT_KNOWN_IDS)
          .value_parser(verify_known_ids)
          .help("Person ids reported as existing, split with comma like '1,2,3'"),
      )
      .arg(
        Arg::new("max_upload_bytes")
          .short('m')
          .long("max-upload-bytes")
          .value_name("BYTES")
          .default_value(DEFAULT_MAX_UPLOAD_BYTES)
          .value_parser(value_parser!(usize))
          .help("Maximum size of a request body in bytes"),
      )
  }

  async fn exec_matches(sub_m: &ArgMatches) -> Result<Option<AppState>> {
    let Some(address) = sub_m.get_one::<String>("listen_address") else {
      bail!("Listen address must be specified");
    };
    let Some(port) = sub_m.get_one::<String>("port") else {
      bail!("Port must be specified");
    };
    let listen_socket = format!("{}:{}", address, port).parse::<SocketAddr>()?;

    let Some(known_ids) = sub_m.get_one::<Vec<i64>>("known_ids") else {
      bail!("Known ids must be specified");
    };
    let person_table = InMemoryPersonTable::new(known_ids.iter().copied());
    info!("Person directory holds {} known id(s)", person_table.len());

    let Some(max_upload_bytes) = sub_m.get_one::<usize>("max_upload_bytes") else {
      bail!("Maximum upload size must be specified");
    };

    Ok(Some(AppState {
      listen_socket,
      max_upload_bytes: *max_upload_bytes,
      person_table: Box::new(person_table),
    }))
  }
}
