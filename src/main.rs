// SPDX-License-Identifier: MPL-2.0
use iced_cv::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedCV - a CV editor

USAGE:
  iced_cv [OPTIONS] [FILE]

ARGS:
  [FILE]                CV document (.toml) to open

OPTIONS:
  --lang <LOCALE>       Interface language (en-US, pt-BR)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding the session state
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_cv=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
        data_dir: read_option(&mut args, "--data-dir"),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(option = key, %err, "ignoring invalid option");
        None
    })
}
