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

use clap::Parser;

use crate::cmd::algorithms::print_algorithms;
use crate::cmd::check::check_deck;
use crate::cmd::drill::drill;
use crate::cmd::queue::print_queue;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_deck_stats;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Show the next cards the scheduler would present.
    Queue {
        /// Optional path to the deck directory.
        directory: Option<String>,
        /// How many cards to schedule.
        #[arg(short, long)]
        count: Option<usize>,
        /// Scheduling algorithm key.
        #[arg(short, long)]
        algorithm: Option<String>,
    },
    /// Review cards interactively.
    Drill {
        /// Optional path to the deck directory.
        directory: Option<String>,
        /// How many cards to review.
        #[arg(short, long)]
        count: Option<usize>,
        /// Scheduling algorithm key.
        #[arg(short, long)]
        algorithm: Option<String>,
    },
    /// Print deck statistics.
    Stats {
        /// Optional path to the deck directory.
        directory: Option<String>,
        /// Output format.
        #[arg(short, long, default_value_t = StatsFormat::Plain)]
        format: StatsFormat,
    },
    /// List the available scheduling algorithms.
    Algorithms,
    /// Parse the deck and report problems.
    Check {
        /// Optional path to the deck directory.
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Queue {
            directory,
            count,
            algorithm,
        } => print_queue(directory, count, algorithm),
        Command::Drill {
            directory,
            count,
            algorithm,
        } => drill(directory, count, algorithm),
        Command::Stats { directory, format } => print_deck_stats(directory, format),
        Command::Algorithms => print_algorithms(),
        Command::Check { directory } => check_deck(directory),
    }
}
