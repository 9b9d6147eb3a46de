//! Recursive structural comparison of two canonicalized values.

use log::debug;
use serde_json::{Map, Number, Value};
use std::collections::{BTreeSet, HashSet};

use super::canonicalizer::{Canonicalizer, DeepSort};
use super::kind::NodeKind;
use super::path::FieldPath;
use super::schema::ComparisonResult;

/// Container kind that holds the node being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Root,
    Sequence,
    Mapping,
}

/// Per-node walk result, merged upward by the caller
#[derive(Debug, Default)]
struct WalkOutcome {
    identical: bool,
    divergence: Option<FieldPath>,
    changed: Vec<String>,
}

impl WalkOutcome {
    fn same() -> Self {
        Self {
            identical: true,
            ..Default::default()
        }
    }

    fn diverged(path: FieldPath) -> Self {
        Self {
            identical: false,
            divergence: Some(path),
            changed: Vec::new(),
        }
    }

    /// Fold a child's outcome in; the earliest divergence is kept
    fn absorb(&mut self, child: WalkOutcome) {
        self.identical &= child.identical;
        if self.divergence.is_none() {
            self.divergence = child.divergence;
        }
        self.changed.extend(child.changed);
    }
}

/// Compare the structure of two values, ignoring array order
///
/// Both inputs are canonicalized with [`DeepSort`] first.
///
/// # Example
/// ```
/// use serde_json::json;
/// use structure_match::structure::compare_structures;
///
/// let result = compare_structures(&json!({"a": 1, "b": "x"}), &json!({"a": 2, "b": "x"}));
/// assert!(result.structure_is_identical);
/// assert_eq!(result.changed_properties(), ["a"]);
/// ```
pub fn compare_structures(a: &Value, b: &Value) -> ComparisonResult {
    compare_structures_with(&DeepSort, a, b)
}

/// Compare the structure of two values using a caller-supplied canonicalizer
pub fn compare_structures_with<C: Canonicalizer + ?Sized>(
    canonicalizer: &C,
    a: &Value,
    b: &Value,
) -> ComparisonResult {
    let a = canonicalizer.canonicalize(a);
    let b = canonicalizer.canonicalize(b);

    let outcome = walk(&a, &b, &FieldPath::root(), Parent::Root);

    if outcome.identical {
        let changed = dedup_in_order(outcome.changed);
        debug!("Structures match, {} changed properties", changed.len());
        ComparisonResult::identical(changed)
    } else {
        let path = outcome
            .divergence
            .map(|p| p.to_string())
            .unwrap_or_default();
        debug!("Structures diverge at '{}'", path);
        ComparisonResult::diverged(path)
    }
}

fn walk(a: &Value, b: &Value, path: &FieldPath, parent: Parent) -> WalkOutcome {
    let kind = NodeKind::of(a);
    if kind != NodeKind::of(b) {
        return WalkOutcome::diverged(path.clone());
    }

    match (a, b) {
        (Value::Array(xs), Value::Array(ys)) => walk_sequence(xs, ys, path),
        (Value::Object(xs), Value::Object(ys)) => walk_mapping(xs, ys, path),
        _ => {
            let mut outcome = WalkOutcome::same();
            // Values under a sequence are not tracked as property changes
            if !primitives_equal(a, b) && parent != Parent::Sequence {
                outcome.changed.push(path.leaf_name());
            }
            outcome
        }
    }
}

/// Primitive equality, with numbers compared by value rather than spelling
fn primitives_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x == y;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => x == y,
    }
}

fn walk_sequence(xs: &[Value], ys: &[Value], path: &FieldPath) -> WalkOutcome {
    if xs.len() != ys.len() {
        return WalkOutcome::diverged(path.clone());
    }

    let mut outcome = WalkOutcome::same();
    for (index, (x, y)) in xs.iter().zip(ys).enumerate() {
        outcome.absorb(walk(x, y, &path.index(index), Parent::Sequence));
    }
    outcome
}

fn walk_mapping(xs: &Map<String, Value>, ys: &Map<String, Value>, path: &FieldPath) -> WalkOutcome {
    let x_keys: BTreeSet<&str> = xs.keys().map(String::as_str).collect();
    let y_keys: BTreeSet<&str> = ys.keys().map(String::as_str).collect();

    // BTreeSet yields the symmetric difference in ascending order
    if let Some(key) = x_keys.symmetric_difference(&y_keys).next() {
        return WalkOutcome::diverged(path.key(key));
    }

    let mut outcome = WalkOutcome::same();
    for key in x_keys {
        outcome.absorb(walk(&xs[key], &ys[key], &path.key(key), Parent::Mapping));
    }
    outcome
}

fn dedup_in_order(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
