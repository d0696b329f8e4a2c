use std::collections::HashMap;
use std::collections::HashSet;

use serde::Serialize;

pub const TOP_REGION_LIMIT: usize = 5;

/// Caller-supplied region codes that earn the scale bonus. Stored upper-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRegions(HashSet<String>);

impl TargetRegions {
    /// Parses a comma-separated list such as `"AZ, ca,TX"`.
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    pub fn contains(&self, region: &str) -> bool {
        !self.0.is_empty() && self.0.contains(&region.to_uppercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TargetRegions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| s.as_ref().trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub region: String,
    pub count: usize,
}

/// Top regions by frequency. Equal counts keep first-encountered order.
pub fn summarize_regions<S: AsRef<str>>(regions: &[S]) -> Vec<RegionCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<RegionCount> = Vec::new();

    for region in regions {
        let region = region.as_ref();
        match positions.get(region) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(region, counts.len());
                counts.push(RegionCount {
                    region: region.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_REGION_LIMIT);
    counts
}
