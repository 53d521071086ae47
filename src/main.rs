// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use ionosctl::cli::{CliArgs, Commands};
use ionosctl::{OutputConfig, PrinterRegistry};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let conf = OutputConfig::load(args.config.as_deref())?;
    let options = conf.resolve_options(args.quiet, args.verbose, args.no_headers);

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if options.verbose { Level::DEBUG } else { Level::WARN })
        .init();
    let mut printer = PrinterRegistry::stdio(options).get(&conf.resolve_output(args.output.as_deref()))?;

    match args.command {
        Commands::Version(cmd) => cmd.execute(printer.as_mut()),
        Commands::Render(cmd) => cmd.execute(printer.as_mut()),
    }
}
