//! Layout resolver: places each aggregated entity near its country anchor
//! so that companies sharing a country do not sit on top of each other.
//!
//! A lone company gets a small random nudge. Several companies in one
//! country are laid out on an outward spiral (two full turns across the
//! group, radius growing with index) with a little jitter on top.

use std::collections::HashMap;
use std::f64::consts::TAU;

use super::aggregate::AggregatedEntity;
use super::jitter::Jitter;
use crate::config::LayoutConfig;
use crate::geo::{CountryTable, GeoPoint};

/// An entity with its resolved map position (degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEntity {
    pub entity: AggregatedEntity,
    pub position: GeoPoint,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub placed: Vec<PlacedEntity>,
    /// Entities whose country has no anchor.
    pub dropped: Vec<AggregatedEntity>,
}

/// Deterministic spiral offset of occupant `index` among `count`.
pub fn spiral_offset(index: usize, count: usize, config: &LayoutConfig) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let t = index as f64 / count as f64;
    let angle = t * config.spiral_turns * TAU;
    let base = (count as f64 * config.spiral_step)
        .clamp(config.spiral_min_radius, config.spiral_max_radius);
    let radius = base * (0.5 + t);
    (radius * angle.cos(), radius * angle.sin())
}

/// Position every entity; unknown countries are dropped with a warning.
pub fn layout(
    entities: Vec<AggregatedEntity>,
    countries: &CountryTable,
    config: &LayoutConfig,
    jitter: &mut dyn Jitter,
) -> LayoutResult {
    let mut anchored: Vec<(AggregatedEntity, GeoPoint)> = Vec::with_capacity(entities.len());
    let mut dropped = Vec::new();

    for entity in entities {
        match countries.get(&entity.country) {
            Some(anchor) => anchored.push((entity, anchor)),
            None => {
                log::warn!(
                    "No coordinates for country `{}`; dropping {} from the map",
                    entity.country,
                    entity.company
                );
                dropped.push(entity);
            }
        }
    }

    let offsets = {
        let mut per_country: HashMap<&str, usize> = HashMap::new();
        for (entity, _) in &anchored {
            *per_country.entry(entity.country.as_str()).or_insert(0) += 1;
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut offsets = Vec::with_capacity(anchored.len());
        for (entity, _) in &anchored {
            let count = per_country[entity.country.as_str()];
            let index = seen.entry(entity.country.as_str()).or_insert(0);

            let offset = if count == 1 {
                (
                    jitter.offset(config.single_jitter),
                    jitter.offset(config.single_jitter),
                )
            } else {
                let (dx, dy) = spiral_offset(*index, count, config);
                (
                    dx + jitter.offset(config.spiral_jitter),
                    dy + jitter.offset(config.spiral_jitter),
                )
            };
            *index += 1;
            offsets.push(offset);
        }
        offsets
    };

    let placed: Vec<PlacedEntity> = anchored
        .into_iter()
        .zip(offsets)
        .map(|((entity, anchor), (dx, dy))| PlacedEntity {
            entity,
            position: anchor.offset(dx, dy),
        })
        .collect();

    log::debug!(
        "Layout placed {} entities, dropped {}",
        placed.len(),
        dropped.len()
    );

    LayoutResult { placed, dropped }
}
