//  Copyright 2026 satchel Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Cross-thread behavior of the guarded containers.

use std::{collections::HashSet, sync::Arc, thread};

use rand::Rng;
use satchel::{Dequeue, LinkedStack, Stack};

const THREADS: usize = 8;
const VALUES_PER_THREAD: usize = 1000;

/// Tag values with their producer so every push is unique.
fn tag(thread: usize, i: usize) -> usize {
    thread * VALUES_PER_THREAD + i
}

#[test_log::test]
fn test_dequeue_concurrent_adds_pop_exactly_once() {
    let dequeue = Arc::new(Dequeue::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let dequeue = Arc::clone(&dequeue);
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                for i in 0..VALUES_PER_THREAD {
                    if rng.gen_bool(0.5) {
                        dequeue.push_front(tag(t, i)).unwrap();
                    } else {
                        dequeue.push_back(tag(t, i)).unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(dequeue.len(), THREADS * VALUES_PER_THREAD);

    // Every tag must come back out exactly once.
    let mut seen = HashSet::new();
    while !dequeue.is_empty() {
        assert!(seen.insert(dequeue.pop_front().unwrap()));
    }
    assert_eq!(seen.len(), THREADS * VALUES_PER_THREAD);
}

#[test_log::test]
fn test_dequeue_concurrent_mixed_ops_accounting() {
    let dequeue = Arc::new(Dequeue::new());

    // Final length equals successful adds minus successful pops.
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let dequeue = Arc::clone(&dequeue);
            thread::spawn(move || {
                let mut adds = 0usize;
                let mut pops = 0usize;
                let mut rng = rand::thread_rng();
                for i in 0..VALUES_PER_THREAD {
                    if rng.gen_bool(0.6) {
                        dequeue.push_back(tag(t, i)).unwrap();
                        adds += 1;
                    } else if dequeue.pop_front().is_ok() {
                        pops += 1;
                    }
                }
                (adds, pops)
            })
        })
        .collect();

    let mut adds = 0;
    let mut pops = 0;
    for handle in handles {
        let (a, p) = handle.join().unwrap();
        adds += a;
        pops += p;
    }

    assert_eq!(dequeue.len(), adds - pops);
}

#[test_log::test]
fn test_dequeue_no_torn_state_under_readers() {
    let dequeue = Arc::new(Dequeue::new());

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let dequeue = Arc::clone(&dequeue);
            thread::spawn(move || {
                for i in 0..VALUES_PER_THREAD {
                    dequeue.push_back(tag(t, i)).unwrap();
                    let _ = dequeue.pop_front();
                }
            })
        })
        .collect();
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let dequeue = Arc::clone(&dequeue);
            thread::spawn(move || {
                for _ in 0..VALUES_PER_THREAD {
                    // Reads hold the same lock, so they may never observe a
                    // half-linked chain.
                    let _ = dequeue.is_symmetrical();
                    let _ = dequeue.len();
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }
    assert!(dequeue.is_empty());
}

#[test_log::test]
fn test_stack_concurrent_push_pop_exactly_once() {
    let stack = Arc::new(LinkedStack::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let stack = Arc::clone(&stack);
            thread::spawn(move || {
                for i in 0..VALUES_PER_THREAD {
                    stack.push(tag(t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(stack.len(), THREADS * VALUES_PER_THREAD);

    let mut seen = HashSet::new();
    while !stack.is_empty() {
        assert!(seen.insert(stack.pop().unwrap()));
    }
    assert_eq!(seen.len(), THREADS * VALUES_PER_THREAD);
}
