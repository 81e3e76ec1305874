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

pub mod default;
pub mod replay;

use std::collections::HashMap;

use serde::Serialize;

use crate::schedule::default::DefaultPolicy;
use crate::types::aggregate::CardAggregate;
use crate::types::card::Card;
use crate::types::review::ReviewLog;
use crate::types::timestamp::Timestamp;

/// Everything a policy may look at when picking cards. The engine only
/// borrows the caller's snapshot and never mutates it, so concurrent
/// scheduling calls need no coordination.
pub struct SchedulerContext<'a> {
    /// The evaluation instant. Supplied by the caller: the engine never
    /// reads a clock of its own.
    pub now: Timestamp,
    pub cards: &'a [Card],
    pub history: &'a [ReviewLog],
    /// Precomputed aggregates, as built by `replay::build_aggregates`.
    /// Advisory: the default policy recomputes from full history, so a stale
    /// map cannot skew its ordering.
    pub aggregates: &'a HashMap<String, CardAggregate>,
}

/// A named scheduling policy.
///
/// Policies are stateless values registered in `ALGORITHMS`; adding one
/// means adding a module and one entry there. Callers resolve policies by
/// key and never construct them directly.
pub trait SchedulingPolicy: Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Return the ids of the next cards to present, in order, at most
    /// `count` of them.
    fn pick_next(&self, count: usize, ctx: &SchedulerContext) -> Vec<String>;
}

static DEFAULT_POLICY: DefaultPolicy = DefaultPolicy;

/// Every registered policy, default first.
static ALGORITHMS: [&dyn SchedulingPolicy; 1] = [&DEFAULT_POLICY];

#[derive(Serialize)]
pub struct AlgorithmInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// List the registered policies, for presentation.
pub fn list_algorithms() -> Vec<AlgorithmInfo> {
    ALGORITHMS
        .iter()
        .map(|algorithm| AlgorithmInfo {
            key: algorithm.name(),
            name: algorithm.name(),
            description: algorithm.description(),
        })
        .collect()
}

/// Resolve a policy by key. An absent or unknown key resolves to the
/// default policy: schedule selection is a preference, not something worth
/// failing over.
pub fn get_algorithm(key: Option<&str>) -> &'static dyn SchedulingPolicy {
    match key {
        Some(key) => ALGORITHMS
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == key)
            .unwrap_or(&DEFAULT_POLICY),
        None => &DEFAULT_POLICY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_algorithms() {
        let algorithms = list_algorithms();
        assert_eq!(algorithms.len(), 1);
        assert_eq!(algorithms[0].key, "default");
        assert_eq!(algorithms[0].name, "default");
        assert!(!algorithms[0].description.is_empty());
    }

    #[test]
    fn test_get_algorithm_by_key() {
        assert_eq!(get_algorithm(Some("default")).name(), "default");
    }

    #[test]
    fn test_absent_key_resolves_to_default() {
        assert_eq!(get_algorithm(None).name(), "default");
    }

    #[test]
    fn test_unknown_key_resolves_to_default() {
        assert_eq!(get_algorithm(Some("sm-18")).name(), "default");
    }
}
