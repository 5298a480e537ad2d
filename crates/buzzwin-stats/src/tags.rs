//! Tag frequency across completions.

use std::collections::{HashMap, HashSet};

use buzzwin_core::models::{RitualCompletion, RitualDefinition, TagCount};

/// Count tag occurrences over completions and return the `top` most frequent,
/// highest count first, ties by tag name.
///
/// Each completion counts a tag once even if its definition repeats it.
/// A completion whose ritual has no definition contributes no tags.
pub fn most_active_tags(
    completions: &[RitualCompletion],
    definitions: &HashMap<&str, &RitualDefinition>,
    top: usize,
) -> Vec<TagCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();

    for completion in completions {
        let Some(def) = definitions.get(completion.ritual_id.as_str()) else {
            tracing::debug!(
                ritual_id = %completion.ritual_id,
                "no definition for completed ritual; skipping tags"
            );
            continue;
        };
        let mut seen = HashSet::with_capacity(def.tags.len());
        for tag in &def.tags {
            if seen.insert(tag.as_str()) {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    ranked.truncate(top);
    ranked
}
