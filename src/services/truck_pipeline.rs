use serde_json::Value;

use crate::helpers::matching;
use crate::models::query::TruckFilter;
use crate::models::truck::{self, TruckView};

/// One ordered pass over the raw feed: project each record, then apply the
/// active filters conjunctively. Feed order is preserved; records the
/// projector rejects are dropped silently.
pub fn filter_trucks(raw_records: &[Value], filter: &TruckFilter) -> Vec<TruckView> {
    let mut trucks = Vec::new();

    for raw in raw_records {
        let Some(view) = truck::project(raw) else {
            continue;
        };

        if let Some(bounds) = &filter.bounds {
            match view.position() {
                Some(point) if bounds.contains(point) => {}
                _ => continue,
            }
        }

        // food keywords are disjunctive within the category, but a truck
        // without a food item description can never match one
        if let Some(keywords) = &filter.food_keywords {
            match &view.fooditems {
                Some(items) if matching::matches_any(items, keywords) => {}
                _ => continue,
            }
        }

        if let Some(requested) = &filter.requested_name {
            if view.name.to_lowercase() != requested.to_lowercase() {
                continue;
            }
        }

        trucks.push(view);
    }

    trucks
}
