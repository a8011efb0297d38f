// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use randomstr_rand::{EntropyError, RngEntropySource, SampleError, SystemEntropySource};
use randomstr_test_utils::assert_uniform;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::charset::{CharClass, PRINTABLE};
use crate::compose::{DiverseOptions, generate, generate_diverse, printable_from_raw};
use crate::error::GenerateError;
use crate::exclusion::ExclusionSet;
use crate::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

fn is_printable(c: char) -> bool {
    ('!'..='~').contains(&c)
}

fn all_but(keep: char) -> ExclusionSet {
    PRINTABLE.iter().copied().filter(|&c| c != keep).collect()
}

// =============================================================================
// printable_from_raw
// =============================================================================

#[test]
fn test_printable_from_raw_maps_pool_edges() {
    assert_eq!(printable_from_raw(0), Ok('!'));
    assert_eq!(printable_from_raw(32), Ok('A'));
    assert_eq!(printable_from_raw(93), Ok('~'));
}

#[test]
fn test_printable_from_raw_rejects_out_of_range() {
    assert_eq!(
        printable_from_raw(94),
        Err(GenerateError::InternalInvariantViolation { raw: 94 })
    );
    assert_eq!(
        printable_from_raw(usize::MAX),
        Err(GenerateError::InternalInvariantViolation { raw: usize::MAX })
    );
}

// =============================================================================
// DiverseOptions
// =============================================================================

#[test]
fn test_diverse_options_seed_order() {
    let all: Vec<CharClass> = DiverseOptions::new().enabled_classes().collect();

    assert_eq!(
        all,
        [
            CharClass::Special,
            CharClass::Upper,
            CharClass::Lower,
            CharClass::Numeric
        ]
    );
    assert_eq!(DiverseOptions::default(), DiverseOptions::new());
    assert_eq!(DiverseOptions::none().enabled_count(), 0);
}

#[test]
fn test_diverse_options_from_disabled_classes() {
    let options: DiverseOptions = [CharClass::Upper, CharClass::Numeric].into_iter().collect();

    assert!(options.no_upper);
    assert!(options.no_numeric);
    assert!(!options.no_special);
    assert!(!options.no_lower);
    assert_eq!(options.enabled_count(), 2);
    assert_eq!(
        options,
        DiverseOptions::new()
            .without(CharClass::Upper)
            .without(CharClass::Numeric)
    );
}

// =============================================================================
// generate
// =============================================================================

#[test]
fn test_generate_zero_length_is_empty() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    assert_eq!(generate(&entropy, 0, &ExclusionSet::new()), Ok(String::new()));
    assert_eq!(entropy.call_count(), 0);
}

#[test]
fn test_generate_zero_length_ignores_exclusions() {
    let everything: ExclusionSet = PRINTABLE.iter().copied().collect();

    assert_eq!(
        generate(&SystemEntropySource {}, 0, &everything),
        Ok(String::new())
    );
}

#[test]
fn test_generate_length_and_range() {
    let entropy = SystemEntropySource {};
    let output = generate(&entropy, 10, &ExclusionSet::new()).expect("Failed to generate(..)");

    assert_eq!(output.chars().count(), 10);
    assert!(output.chars().all(is_printable));
}

#[test]
fn test_generate_follows_scripted_draws() {
    // bound 94 -> 7 bits: 0 -> '!', 93 -> '~', 127 rejected, 32 -> 'A'.
    let entropy = MockEntropySource::scripted(&[0x00, 0x5D, 0x7F, 0x20]);

    assert_eq!(
        generate(&entropy, 3, &ExclusionSet::new()),
        Ok(String::from("!~A"))
    );
    assert_eq!(entropy.call_count(), 4);
}

#[test]
fn test_generate_redraws_excluded_chars() {
    // '!' is drawn first but excluded, '"' is drawn next.
    let entropy = MockEntropySource::scripted(&[0x00, 0x01]);

    assert_eq!(
        generate(&entropy, 1, &ExclusionSet::from("!")),
        Ok(String::from("\""))
    );
    assert_eq!(entropy.call_count(), 2);
}

#[test]
fn test_generate_never_emits_excluded() {
    let entropy = SystemEntropySource {};
    let exclusions = ExclusionSet::from("abcdefghijklmnopqrstuvwxyz0123456789");

    for _ in 0..50 {
        let output = generate(&entropy, 32, &exclusions).expect("Failed to generate(..)");
        assert!(output.chars().all(|c| !exclusions.contains(c)));
    }
}

#[test]
fn test_generate_single_allowed_char_terminates() {
    let entropy = SystemEntropySource {};
    let output = generate(&entropy, 10, &all_but('x')).expect("Failed to generate(..)");

    assert_eq!(output, "xxxxxxxxxx");
}

#[test]
fn test_generate_fully_excluded_pool_fails_fast() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let everything: ExclusionSet = PRINTABLE.iter().copied().collect();

    assert_eq!(
        generate(&entropy, 10, &everything),
        Err(GenerateError::ExhaustedAlphabet)
    );
    assert_eq!(entropy.call_count(), 0);
}

#[test]
fn test_generate_propagates_entropy_error() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(5));

    assert_eq!(
        generate(&entropy, 64, &ExclusionSet::new()),
        Err(GenerateError::Sample(SampleError::Entropy(
            EntropyError::EntropyNotAvailable
        )))
    );
}

#[test]
fn test_generate_does_not_repeat() {
    let entropy = SystemEntropySource {};
    let outputs: HashSet<String> = (0..8)
        .map(|_| generate(&entropy, 16, &ExclusionSet::new()).expect("Failed to generate(..)"))
        .collect();

    assert_eq!(outputs.len(), 8);
}

#[test]
fn test_generate_is_reproducible_with_seeded_source() {
    let a = RngEntropySource::new(StdRng::seed_from_u64(0x5EED));
    let b = RngEntropySource::new(StdRng::seed_from_u64(0x5EED));

    assert_eq!(
        generate(&a, 32, &ExclusionSet::new()),
        generate(&b, 32, &ExclusionSet::new())
    );
}

// =============================================================================
// generate_diverse
// =============================================================================

#[test]
fn test_generate_diverse_contains_every_class() {
    let entropy = SystemEntropySource {};

    for _ in 0..200 {
        let output = generate_diverse(&entropy, 4, &ExclusionSet::new(), DiverseOptions::new())
            .expect("Failed to generate_diverse(..)");

        assert_eq!(output.chars().count(), 4);
        for class in CharClass::ALL {
            assert!(
                output.chars().any(|c| class.contains(c)),
                "{:?} missing from {:?}",
                class,
                output
            );
        }
    }
}

#[test]
fn test_generate_diverse_seed_then_shuffle_scripted() {
    // All-zero bytes: seeds '!', 'A', 'a', '0' in order, then the shuffle
    // always picks index 0 (bounds 4, 3, 2), keeping that order.
    let entropy = MockEntropySource::scripted(&[0x00]);

    assert_eq!(
        generate_diverse(&entropy, 4, &ExclusionSet::new(), DiverseOptions::new()),
        Ok(String::from("!Aa0"))
    );
    assert_eq!(entropy.call_count(), 7);
}

#[test]
fn test_generate_diverse_reshuffles_after_each_append() {
    // No classes: draw '!' (no shuffle for one char), draw '"', shuffle
    // picks index 1 first.
    let entropy = MockEntropySource::scripted(&[0x00, 0x01, 0x01]);

    assert_eq!(
        generate_diverse(&entropy, 2, &ExclusionSet::new(), DiverseOptions::none()),
        Ok(String::from("\"!"))
    );
    assert_eq!(entropy.call_count(), 3);
}

#[test]
fn test_generate_diverse_length_too_short() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    assert_eq!(
        generate_diverse(&entropy, 3, &ExclusionSet::new(), DiverseOptions::new()),
        Err(GenerateError::LengthTooShort {
            length: 3,
            required: 4
        })
    );
    assert_eq!(entropy.call_count(), 0);
}

#[test]
fn test_generate_diverse_disabled_class_lowers_minimum() {
    let entropy = SystemEntropySource {};
    let options = DiverseOptions::new().without(CharClass::Special);
    let output = generate_diverse(&entropy, 3, &ExclusionSet::new(), options)
        .expect("Failed to generate_diverse(..)");

    assert_eq!(output.chars().count(), 3);
    assert!(output.chars().any(|c| c.is_ascii_uppercase()));
    assert!(output.chars().any(|c| c.is_ascii_lowercase()));
    assert!(output.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_generate_diverse_all_disabled_behaves_like_generate() {
    let entropy = SystemEntropySource {};

    let output = generate_diverse(&entropy, 4, &ExclusionSet::new(), DiverseOptions::none())
        .expect("Failed to generate_diverse(..)");
    assert_eq!(output.chars().count(), 4);
    assert!(output.chars().all(is_printable));

    let empty = generate_diverse(&entropy, 0, &ExclusionSet::new(), DiverseOptions::none())
        .expect("Failed to generate_diverse(..) (empty)");
    assert!(empty.is_empty());
}

#[test]
fn test_generate_diverse_fully_excluded_enabled_class() {
    let entropy = SystemEntropySource {};
    let digits = ExclusionSet::from("0123456789");

    assert_eq!(
        generate_diverse(&entropy, 8, &digits, DiverseOptions::new()),
        Err(GenerateError::ExhaustedAlphabet)
    );

    let options = DiverseOptions::new().without(CharClass::Numeric);
    for _ in 0..50 {
        let output =
            generate_diverse(&entropy, 8, &digits, options).expect("Failed to generate_diverse(..)");
        assert!(!output.chars().any(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_generate_diverse_fully_excluded_pool() {
    let entropy = SystemEntropySource {};
    let everything: ExclusionSet = PRINTABLE.iter().copied().collect();

    assert_eq!(
        generate_diverse(&entropy, 4, &everything, DiverseOptions::none()),
        Err(GenerateError::ExhaustedAlphabet)
    );
    assert_eq!(
        generate_diverse(&entropy, 0, &everything, DiverseOptions::none()),
        Ok(String::new())
    );
}

#[test]
fn test_generate_diverse_seeds_respect_exclusions() {
    let entropy = SystemEntropySource {};
    // Only 'z' remains among lower case letters, only '9' among digits.
    let exclusions: ExclusionSet = "abcdefghijklmnopqrstuvwxy012345678".into();

    for _ in 0..50 {
        let output = generate_diverse(&entropy, 6, &exclusions, DiverseOptions::new())
            .expect("Failed to generate_diverse(..)");

        assert!(output.contains('z'));
        assert!(output.contains('9'));
        assert!(output.chars().all(|c| !exclusions.contains(c)));
    }
}

#[test]
fn test_generate_diverse_single_allowed_fill_char() {
    let entropy = SystemEntropySource {};
    let output = generate_diverse(&entropy, 10, &all_but('q'), DiverseOptions::none())
        .expect("Failed to generate_diverse(..)");

    assert_eq!(output, "qqqqqqqqqq");
}

#[test]
fn test_generate_diverse_propagates_entropy_error() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    assert_eq!(
        generate_diverse(&entropy, 8, &ExclusionSet::new(), DiverseOptions::new()),
        Err(GenerateError::Sample(SampleError::Entropy(
            EntropyError::EntropyNotAvailable
        )))
    );
}

#[test]
fn test_generate_diverse_class_position_is_uniform() {
    // With length 4 and every class enabled, each class appears exactly once;
    // the digit must land on each position equally often.
    const TRIALS: usize = 8_000;

    let entropy = SystemEntropySource {};
    let mut counts = [0usize; 4];

    for _ in 0..TRIALS {
        let output = generate_diverse(&entropy, 4, &ExclusionSet::new(), DiverseOptions::new())
            .expect("Failed to generate_diverse(..)");
        let position = output
            .chars()
            .position(|c| c.is_ascii_digit())
            .expect("digit missing");
        counts[position] += 1;
    }

    assert_uniform(&counts);
}

#[test]
fn test_generate_diverse_does_not_repeat() {
    let entropy = SystemEntropySource {};
    let outputs: HashSet<String> = (0..8)
        .map(|_| {
            generate_diverse(&entropy, 16, &ExclusionSet::new(), DiverseOptions::new())
                .expect("Failed to generate_diverse(..)")
        })
        .collect();

    assert_eq!(outputs.len(), 8);
}

// =============================================================================
// logging
// =============================================================================

type RecordedFields = Arc<Mutex<Vec<(String, String)>>>;

/// Layer recording every event field as `(name, debug value)`.
struct FieldRecorder {
    fields: RecordedFields,
}

struct FieldVisitor<'a> {
    fields: &'a mut Vec<(String, String)>,
}

impl Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .push((field.name().to_string(), format!("{:?}", value)));
    }
}

impl<S: Subscriber> Layer<S> for FieldRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = self.fields.lock().expect("Failed to lock fields");
        event.record(&mut FieldVisitor {
            fields: &mut fields,
        });
    }
}

fn record_fields<T>(f: impl FnOnce() -> T) -> (T, Vec<(String, String)>) {
    let fields = RecordedFields::default();
    let subscriber = tracing_subscriber::registry().with(FieldRecorder {
        fields: Arc::clone(&fields),
    });

    let result = tracing::subscriber::with_default(subscriber, f);
    let recorded = fields.lock().expect("Failed to lock fields").clone();

    (result, recorded)
}

fn assert_only_metadata(fields: &[(String, String)], output: &str) {
    assert!(!fields.is_empty(), "no events recorded");

    for (name, value) in fields {
        assert!(
            ["message", "length", "excluded", "required"].contains(&name.as_str()),
            "unexpected field {:?}",
            name
        );
        assert!(!value.contains(output), "field {:?} leaks the output", name);
    }
}

#[test]
fn test_generate_logs_only_metadata() {
    let entropy = SystemEntropySource {};
    let exclusions = ExclusionSet::from("xyz");

    let (result, fields) = record_fields(|| generate(&entropy, 24, &exclusions));
    let output = result.expect("Failed to generate(..)");

    assert_only_metadata(&fields, &output);
    assert!(fields.contains(&("length".to_string(), "24".to_string())));
    assert!(fields.contains(&("excluded".to_string(), "3".to_string())));
}

#[test]
fn test_generate_diverse_logs_only_metadata() {
    let entropy = SystemEntropySource {};
    let options = DiverseOptions::new().without(CharClass::Special);

    let (result, fields) =
        record_fields(|| generate_diverse(&entropy, 24, &ExclusionSet::new(), options));
    let output = result.expect("Failed to generate_diverse(..)");

    assert_only_metadata(&fields, &output);
    assert!(fields.contains(&("length".to_string(), "24".to_string())));
    assert!(fields.contains(&("excluded".to_string(), "0".to_string())));
    assert!(fields.contains(&("required".to_string(), "3".to_string())));
}
