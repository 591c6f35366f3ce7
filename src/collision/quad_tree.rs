// Region quad-tree used as the broad phase for ball-ball collision detection.

use crate::collision::AABB;
use crate::common::{Height, Level, Width};

/// Default number of references a leaf holds before it splits.
pub const DEFAULT_CAPACITY: usize = 8;
/// Default deepest level a node may be created at.
pub const DEFAULT_MAX_DEPTH: Level = Level::new(8);

/// An axis-aligned integer rectangle `[left, left + width) × [top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    left: i32,
    top: i32,
    width: Width,
    height: Height,
}

impl Region {
    pub fn new(left: i32, top: i32, width: Width, height: Height) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn right(&self) -> i32 {
        self.left.saturating_add(saturating_i32(self.width.get()))
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(saturating_i32(self.height.get()))
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width.get()) * u64::from(self.height.get())
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Whether any part of `aabb` falls inside this region. An empty region
    /// intersects nothing.
    pub fn intersects(&self, aabb: &AABB) -> bool {
        if self.is_empty() {
            return false;
        }
        aabb.max.x >= f64::from(self.left)
            && aabb.min.x < f64::from(self.right())
            && aabb.max.y >= f64::from(self.top)
            && aabb.min.y < f64::from(self.bottom())
    }

    fn can_split(&self) -> bool {
        self.width.get() >= 2 && self.height.get() >= 2
    }

    /// The four quadrants, in NW, NE, SW, SE order. Odd extents give the
    /// extra unit to the east and south halves so the quadrants tile exactly.
    fn quadrants(&self) -> [Region; 4] {
        let west = self.width.get() / 2;
        let east = self.width.get() - west;
        let north = self.height.get() / 2;
        let south = self.height.get() - north;
        let mid_x = self.left.saturating_add(saturating_i32(west));
        let mid_y = self.top.saturating_add(saturating_i32(north));
        [
            Region::new(self.left, self.top, Width::new(west), Height::new(north)),
            Region::new(mid_x, self.top, Width::new(east), Height::new(north)),
            Region::new(self.left, mid_y, Width::new(west), Height::new(south)),
            Region::new(mid_x, mid_y, Width::new(east), Height::new(south)),
        ]
    }
}

fn saturating_i32(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

/// A stored reference: the ball's index in the engine's collection and the
/// box it was inserted with.
#[derive(Debug, Clone, Copy)]
struct Entry {
    index: usize,
    bbox: AABB,
}

#[derive(Debug)]
struct Node {
    region: Region,
    level: Level,
    entries: Vec<Entry>,
    children: Option<[usize; 4]>, // indices into QuadTree::nodes
}

impl Node {
    fn new(region: Region, level: Level) -> Self {
        Self {
            region,
            level,
            entries: Vec::new(),
            children: None,
        }
    }
}

/// A quad-tree over ball bounding boxes.
///
/// The tree stores plain indices into a ball collection it does not own.
/// Those indices are only meaningful until the collection is next resized,
/// so a tree must be rebuilt (see [`QuadTree::clear`]) before every use.
#[derive(Debug)]
pub struct QuadTree {
    nodes: Vec<Node>, // nodes[0] is the root
    capacity: usize,
    max_depth: Level,
}

impl QuadTree {
    /// Creates an empty tree over `region` with the default split limits.
    pub fn new(region: Region) -> Self {
        Self::with_limits(region, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH)
    }

    /// Creates an empty tree over `region`. A leaf holding more than
    /// `capacity` references splits, unless it is already at `max_depth`.
    pub fn with_limits(region: Region, capacity: usize, max_depth: Level) -> Self {
        assert!(capacity > 0, "Quad-tree capacity must be positive");
        Self {
            nodes: vec![Node::new(region, Level::default())],
            capacity,
            max_depth,
        }
    }

    /// Drops every node and stored reference and starts over with a single
    /// root covering `region`. Keeps the node storage allocation.
    pub fn clear(&mut self, region: Region) {
        self.nodes.clear();
        self.nodes.push(Node::new(region, Level::default()));
    }

    /// The region covered by the root node.
    pub fn region(&self) -> Region {
        self.nodes[0].region
    }

    /// Inserts ball `index` into every leaf its bounding box intersects.
    /// A box entirely outside the root is ignored.
    pub fn insert(&mut self, index: usize, bbox: AABB) {
        self.insert_into(0, Entry { index, bbox });
    }

    fn insert_into(&mut self, node_idx: usize, entry: Entry) {
        if !self.nodes[node_idx].region.intersects(&entry.bbox) {
            return;
        }

        if let Some(children) = self.nodes[node_idx].children {
            for child in children {
                self.insert_into(child, entry);
            }
            return;
        }

        self.nodes[node_idx].entries.push(entry);

        let node = &self.nodes[node_idx];
        if node.entries.len() > self.capacity
            && node.level < self.max_depth
            && node.region.can_split()
        {
            self.subdivide(node_idx);
        }
    }

    /// Splits a leaf into four children and pushes its entries down.
    /// Entries straddling a split line land in every child they touch.
    fn subdivide(&mut self, node_idx: usize) {
        let level = self.nodes[node_idx].level.deeper();
        let first = self.nodes.len();
        for quadrant in self.nodes[node_idx].region.quadrants() {
            self.nodes.push(Node::new(quadrant, level));
        }
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes[node_idx].children = Some(children);

        let entries = std::mem::take(&mut self.nodes[node_idx].entries);
        for entry in entries {
            for child in children {
                self.insert_into(child, entry);
            }
        }
    }

    /// Calls `visit` with every stored index held by a node whose region
    /// intersects `bbox`. No exact geometry test is done here, and an index
    /// stored in several leaves is visited once per leaf.
    pub fn for_each_in<F>(&self, bbox: &AABB, mut visit: F)
    where
        F: FnMut(usize),
    {
        self.visit_node(0, bbox, &mut visit);
    }

    fn visit_node<F>(&self, node_idx: usize, bbox: &AABB, visit: &mut F)
    where
        F: FnMut(usize),
    {
        let node = &self.nodes[node_idx];
        if !node.region.intersects(bbox) {
            return;
        }
        for entry in &node.entries {
            visit(entry.index);
        }
        if let Some(children) = node.children {
            for child in children {
                self.visit_node(child, bbox, visit);
            }
        }
    }

    /// Every node's region, internal nodes included. For drawing only.
    pub fn all_regions(&self) -> Vec<Region> {
        self.nodes.iter().map(|node| node.region).collect()
    }

    /// Regions of the leaf nodes; together they tile the root region.
    pub fn leaf_regions(&self) -> Vec<Region> {
        self.nodes
            .iter()
            .filter(|node| node.children.is_none())
            .map(|node| node.region)
            .collect()
    }

    /// Number of stored references, counting a straddling ball once per leaf.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(|node| node.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deepest level present in the tree.
    pub fn depth(&self) -> Level {
        self.nodes
            .iter()
            .map(|node| node.level)
            .max()
            .unwrap_or_default()
    }
}
