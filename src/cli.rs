// Copyright 2025 Fernando Borretti
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

use std::path::PathBuf;

use clap::Parser;

use flashcards_core::error::Fallible;
use flashcards_core::rng::TinyRng;

use crate::cmd::session::SessionConfig;
use crate::cmd::session::start_session;
use crate::console::StdConsole;

/// Study term/definition flashcards interactively.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Import cards from this file before the session starts.
    #[arg(long = "import_from", alias = "import-from", value_name = "PATH")]
    import_from: Option<PathBuf>,
    /// Export all cards to this file when the session ends.
    #[arg(long = "export_to", alias = "export-to", value_name = "PATH")]
    export_to: Option<PathBuf>,
    /// Seed for picking quiz cards. By default, the current time is used.
    #[arg(long)]
    seed: Option<u64>,
}

pub fn entrypoint() -> Fallible<()> {
    let args: Args = Args::parse();
    let rng = match args.seed {
        Some(seed) => TinyRng::from_seed(seed),
        None => TinyRng::from_clock(),
    };
    let config = SessionConfig {
        import_from: args.import_from,
        export_to: args.export_to,
    };
    start_session(config, StdConsole::new(), rng)
}
