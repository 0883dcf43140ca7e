use crate::MatchResult;
use crate::Node;
use crate::NodeKind;
use crate::Record;
use crate::ReduceError;
use crate::Rule;

/// Merges sibling named records into one record.
///
/// Every sibling must be a [`MatchResult::Record`] and their keys must be
/// disjoint: a collision is a [`ReduceError::DuplicateKey`], never
/// last-write-wins.
pub fn merge_records(
    rule: Rule,
    siblings: Vec<MatchResult>,
) -> Result<Record, ReduceError> {
    let mut merged = Record::with_capacity(siblings.len());
    for sibling in siblings {
        absorb_record(rule, &mut merged, sibling)?;
    }
    Ok(merged)
}

/// Merges sibling named records into one record, folding the single sibling
/// sequence into a mapping stored under `key`.
///
/// Exactly one sibling must be a [`MatchResult::Sequence`] of named records;
/// its entries are combined with [`collect_entries()`]. All other siblings
/// are merged as in [`merge_records()`].
pub fn merge_records_with_collection(
    rule: Rule,
    siblings: Vec<MatchResult>,
    key: &'static str,
) -> Result<Record, ReduceError> {
    match siblings.iter().filter(|s| s.is_sequence()).count() {
        0 => return Err(ReduceError::MissingCollection { rule, key }),
        1 => (),
        _ => return Err(ReduceError::MultipleCollections { rule, key }),
    }

    let mut merged = Record::with_capacity(siblings.len());
    for sibling in siblings {
        match sibling {
            MatchResult::Sequence(items) => {
                let entries = collect_entries(rule, items)?;
                if merged.contains_key(key) {
                    return Err(ReduceError::DuplicateKey {
                        rule,
                        key: key.to_string(),
                    });
                }
                merged.insert(key.to_string(), MatchResult::Record(entries));
            },
            sibling => absorb_record(rule, &mut merged, sibling)?,
        }
    }
    Ok(merged)
}

/// Folds a sequence of named records into one mapping.
///
/// Unlike [`merge_records()`], a repeated key silently replaces the earlier
/// value (keeping the position of its first insertion). This is the
/// behavior for fields, enum values, arguments and object fields.
pub fn collect_entries(
    rule: Rule,
    items: Vec<MatchResult>,
) -> Result<Record, ReduceError> {
    let mut collected = Record::with_capacity(items.len());
    for item in items {
        let MatchResult::Record(record) = item else {
            return Err(ReduceError::shape(rule, "a sequence of named records"));
        };
        collected.extend(record);
    }
    Ok(collected)
}

/// Uses [`merge_records_with_collection()`] when the grammar matched the
/// optional body holding the collection, and [`merge_records()`] otherwise.
pub(crate) fn merge_with_optional_collection(
    rule: Rule,
    siblings: Vec<MatchResult>,
    key: &'static str,
) -> Result<Record, ReduceError> {
    if siblings.iter().any(MatchResult::is_sequence) {
        merge_records_with_collection(rule, siblings, key)
    } else {
        merge_records(rule, siblings)
    }
}

/// Default reducer for rules whose children form a collection.
pub(crate) fn sequence(
    _rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::Sequence(children))
}

/// Tags a merged record as a definition or selection node.
pub(crate) fn node(kind: NodeKind, record: Record) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::Node(Node::new(kind, record)))
}

/// Splits a single-entry record into its key and value.
pub(crate) fn take_single_entry(
    rule: Rule,
    result: MatchResult,
) -> Result<(String, MatchResult), ReduceError> {
    match result {
        MatchResult::Record(record) if record.len() == 1 => record
            .into_iter()
            .next()
            .ok_or(ReduceError::shape(rule, "a single-entry record")),
        _ => Err(ReduceError::shape(rule, "a single-entry record")),
    }
}

/// Strips one grammar-introduced single-entry shell, returning what it
/// wrapped.
pub(crate) fn unwrap_shell(
    rule: Rule,
    result: MatchResult,
) -> Result<MatchResult, ReduceError> {
    take_single_entry(rule, result).map(|(_, inner)| inner)
}

/// Extracts the string held by a `{name: "..."}` record.
pub(crate) fn take_name(
    rule: Rule,
    result: MatchResult,
) -> Result<String, ReduceError> {
    match take_single_entry(rule, result)? {
        (key, MatchResult::Scalar(crate::Scalar::String(name))) if key == "name" => Ok(name),
        _ => Err(ReduceError::shape(rule, "a `name` record")),
    }
}

/// Destructures a rule's children into exactly `N` results.
pub(crate) fn exactly<const N: usize>(
    rule: Rule,
    children: Vec<MatchResult>,
    expected: &'static str,
) -> Result<[MatchResult; N], ReduceError> {
    children
        .try_into()
        .map_err(|_| ReduceError::shape(rule, expected))
}

/// Splits `children` into the leading result and the rest.
pub(crate) fn split_first(
    rule: Rule,
    children: Vec<MatchResult>,
    expected: &'static str,
) -> Result<(MatchResult, Vec<MatchResult>), ReduceError> {
    let mut children = children.into_iter();
    let first = children
        .next()
        .ok_or(ReduceError::shape(rule, expected))?;
    Ok((first, children.collect()))
}

fn absorb_record(
    rule: Rule,
    merged: &mut Record,
    sibling: MatchResult,
) -> Result<(), ReduceError> {
    let MatchResult::Record(record) = sibling else {
        return Err(ReduceError::shape(rule, "sibling named records"));
    };
    for (key, value) in record {
        if merged.contains_key(&key) {
            return Err(ReduceError::DuplicateKey { rule, key });
        }
        merged.insert(key, value);
    }
    Ok(())
}
