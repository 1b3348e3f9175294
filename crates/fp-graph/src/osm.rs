//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use fp_graph::osm::load_graph_from_pbf;
//!
//! let graph = load_graph_from_pbf(Path::new("edinburgh.osm.pbf"), None)?;
//! ```
//!
//! # What is loaded
//!
//! Ways whose `highway` value is in [`ROUTABLE_HIGHWAYS`], together with the
//! nodes they reference.  Buildings, POIs and relations are ignored.  Motorways
//! are kept: the cost model rules them out, and dropping them here would hide
//! the vertices they share with footways.
//!
//! # Memory note
//!
//! Every node position in the file is buffered during the pass because ways
//! reference nodes by id.  Tags are only retained for nodes that carry any.
//! The buffer is filtered down to referenced nodes before returning.

use std::path::Path;

use osmpbf::{Element, ElementReader};
use rustc_hash::{FxHashMap, FxHashSet};

use fp_core::{BoundingBox, GeoPoint, Tags};

use crate::{build_graph, GraphError, GraphResult, NodeRef, RawNode, RawWay, RoutingGraph};

/// `highway` values a pedestrian may plausibly use.
pub const ROUTABLE_HIGHWAYS: [&str; 24] = [
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "unclassified",
    "residential",
    "motorway_link",
    "trunk_link",
    "primary_link",
    "secondary_link",
    "tertiary_link",
    "living_street",
    "service",
    "pedestrian",
    "track",
    "road",
    "footway",
    "bridleway",
    "steps",
    "corridor",
    "path",
    "emergency_bay",
    "cycleway",
];

/// Raw records read from a PBF file, ready for [`build_graph`].
pub struct OsmExtract {
    pub ways:  Vec<RawWay>,
    pub nodes: FxHashMap<i64, RawNode>,
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Read routable ways and their nodes from an OSM PBF file.
///
/// With `bbox`, only ways with at least one node inside it are kept.  Node
/// references missing from the file are dropped from their way.
///
/// # Errors
///
/// Returns [`GraphError::Osm`] on parse errors.
pub fn load_from_pbf(path: &Path, bbox: Option<&BoundingBox>) -> GraphResult<OsmExtract> {
    // ── Phase 1: one sequential pass over nodes and routable ways ─────────
    let reader = ElementReader::from_path(path).map_err(|e| GraphError::Osm(e.to_string()))?;

    let mut all_nodes: FxHashMap<i64, RawNode> = FxHashMap::default();
    let mut pending: Vec<(i64, Tags, Vec<i64>)> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                let tags: Tags = n.tags().collect();
                all_nodes.insert(n.id(), RawNode { pos: GeoPoint::new(n.lat(), n.lon()), tags });
            }
            Element::DenseNode(n) => {
                let tags: Tags = n.tags().collect();
                all_nodes.insert(n.id(), RawNode { pos: GeoPoint::new(n.lat(), n.lon()), tags });
            }
            Element::Way(w) => {
                let routable = w
                    .tags()
                    .any(|(k, v)| k == "highway" && ROUTABLE_HIGHWAYS.contains(&v));
                if routable {
                    pending.push((w.id(), w.tags().collect(), w.refs().collect()));
                }
            }
            Element::Relation(_) => {}
        })
        .map_err(|e| GraphError::Osm(e.to_string()))?;

    // ── Phase 2: resolve references and apply the bounding box ────────────
    let mut ways = Vec::with_capacity(pending.len());
    let mut referenced: FxHashSet<i64> = FxHashSet::default();
    for (osm_id, tags, refs) in pending {
        let nodes: Vec<NodeRef> = refs
            .iter()
            .filter_map(|id| all_nodes.get(id).map(|raw| NodeRef::new(*id, raw.pos)))
            .collect();
        if let Some(bbox) = bbox {
            if !nodes.iter().any(|n| bbox.contains(n.pos)) {
                continue;
            }
        }
        referenced.extend(nodes.iter().map(|n| n.id));
        ways.push(RawWay { osm_id, tags, nodes });
    }

    all_nodes.retain(|id, _| referenced.contains(id));
    log::info!(
        "read {} routable ways and {} nodes from {}",
        ways.len(),
        all_nodes.len(),
        path.display(),
    );
    Ok(OsmExtract { ways, nodes: all_nodes })
}

/// [`load_from_pbf`] followed by [`build_graph`].
pub fn load_graph_from_pbf(path: &Path, bbox: Option<&BoundingBox>) -> GraphResult<RoutingGraph> {
    let extract = load_from_pbf(path, bbox)?;
    Ok(build_graph(extract.ways, &extract.nodes))
}
