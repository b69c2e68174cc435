// Copyright 2026 Worklog Contributors
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

//! Benchmarks for trie build, expansion, and segmentation.
//!
//! Run with: cargo bench -p worklog-index --bench grouper_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use worklog_core::{GrouperConfig, VecSource};
use worklog_index::{PrefixGrouper, Trie};

fn history(items: usize) -> Vec<String> {
    let projects = ["billing", "frontend", "infra", "support"];
    let tasks = ["review", "meeting", "bugfix", "deploy", "planning"];
    (0..items)
        .map(|i| {
            format!(
                "{} {} task {}",
                projects[i % projects.len()],
                tasks[i % tasks.len()],
                i
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let descriptions = history(1000);
    c.bench_function("trie_build_1000", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for description in &descriptions {
                trie.insert(black_box(description));
            }
            trie
        })
    });
}

fn bench_expansions(c: &mut Criterion) {
    let grouper = PrefixGrouper::new(
        VecSource::from_descriptions(history(1000)),
        GrouperConfig::default(),
    );
    grouper.expansions("").unwrap();

    c.bench_function("expansions_branchy_prefix", |b| {
        b.iter(|| grouper.expansions(black_box("billing ")).unwrap())
    });
}

fn bench_segmentation(c: &mut Criterion) {
    let grouper = PrefixGrouper::new(
        VecSource::from_descriptions(history(1000)),
        GrouperConfig::default(),
    );
    grouper.expansions("").unwrap();

    c.bench_function("groups_of_mixed_input", |b| {
        b.iter(|| {
            grouper
                .groups_of(black_box("billing review task 1 something new"))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_build, bench_expansions, bench_segmentation);
criterion_main!(benches);
