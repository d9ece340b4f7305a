// SPDX-License-Identifier: MPL-2.0
use flexi_logger::Logger;
use iced_lightbox::app::{self, Flags};

const HELP: &str = "\
iced_lightbox - browse a directory of images in a lightbox

USAGE:
  iced_lightbox [OPTIONS] [DIRECTORY]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <PATH>     Directory holding settings.toml
  --zoom <RATIO>          Pixel ratio used to size the overlay controls
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let _logger = match Logger::try_with_env_or_str("info, iced=warn, wgpu_hal=error, wgpu_core=error")
        .and_then(|logger| logger.start())
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    };

    let flags = Flags {
        lang: option_or_warn(args.opt_value_from_str("--lang"), "--lang"),
        config_dir: option_or_warn(args.opt_value_from_str("--config-dir"), "--config-dir"),
        zoom: option_or_warn(args.opt_value_from_str("--zoom"), "--zoom"),
        path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    log::info!("Starting iced_lightbox {}", env!("CARGO_PKG_VERSION"));
    app::run(flags)
}

fn option_or_warn<T>(value: Result<Option<T>, pico_args::Error>, flag: &str) -> Option<T> {
    value.unwrap_or_else(|err| {
        log::warn!("Ignoring {flag}: {err}");
        None
    })
}
