//! Headless launcher: follows a collection and lays its items out on the grid.

use hexlaunch_topology::{from_pixel, hex_dimensions, to_pixel, Hex, HexSpace};
use tracing::{debug, trace, warn};

use crate::config::LauncherConfig;
use crate::error::Result;
use crate::events::{LayoutEvent, LayoutSnapshot, PlacedItem, Placement, SnapTarget};
use crate::item::{CollectionChange, LauncherItem};

/// Lays launcher items out on the hex grid and records what changed.
///
/// The launcher owns the grid. Items are located by equality when they are
/// removed, so `T` should compare equal only to itself (an `Rc`/`Arc` with a
/// pointer-based `PartialEq`, or an item carrying a unique id).
pub struct Launcher<T> {
    config: LauncherConfig,
    space: HexSpace<T>,
    translation: (f64, f64),
    events: Vec<LayoutEvent>,
    current_frame: u64,
}

impl<T> Launcher<T>
where
    T: LauncherItem + PartialEq,
{
    /// Create an empty launcher.
    pub fn new(config: LauncherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            space: HexSpace::new(),
            translation: (0.0, 0.0),
            events: Vec::new(),
            current_frame: 0,
        })
    }

    /// Create a launcher populated with `items`, placed in order.
    pub fn with_items<I>(config: LauncherConfig, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut launcher = Self::new(config)?;
        launcher.apply(CollectionChange::Added(items.into_iter().collect()))?;
        Ok(launcher)
    }

    /// Follow one change of the backing collection.
    ///
    /// Returns the events produced by this change; they are also appended to
    /// [`Launcher::events`]. If placing an item fails, the events of the
    /// items placed before it stay recorded and the frame still advances, so
    /// the log always matches the grid.
    pub fn apply(&mut self, change: CollectionChange<T>) -> Result<Vec<LayoutEvent>> {
        self.apply_with(change, Self::place)
    }

    fn apply_with<F>(
        &mut self,
        change: CollectionChange<T>,
        mut place: F,
    ) -> Result<Vec<LayoutEvent>>
    where
        F: FnMut(&mut Self, T) -> Result<LayoutEvent>,
    {
        debug!(kind = change.kind(), frame = self.current_frame, "collection changed");

        let first = self.events.len();
        let outcome = self.record_change(change, &mut place);
        self.current_frame += 1;

        if let Err(err) = &outcome {
            warn!(error = %err, recorded = self.events.len() - first, "change applied partially");
        }
        outcome.map(|()| self.events[first..].to_vec())
    }

    fn record_change<F>(&mut self, change: CollectionChange<T>, place: &mut F) -> Result<()>
    where
        F: FnMut(&mut Self, T) -> Result<LayoutEvent>,
    {
        match change {
            CollectionChange::Added(items) => {
                for item in items {
                    let event = place(self, item)?;
                    self.events.push(event);
                }
            }
            CollectionChange::Removed(items) => {
                for item in items {
                    match self.space.remove_payload(&item) {
                        Some(hex) => self.events.push(LayoutEvent::ItemRemoved {
                            hex,
                            frame: self.current_frame,
                        }),
                        None => warn!(icon = item.icon(), "removed item was never placed"),
                    }
                }
            }
            CollectionChange::Moved | CollectionChange::Replaced => {
                trace!("layout unaffected");
            }
            CollectionChange::Reset(items) => {
                self.space.clear();
                self.events.push(LayoutEvent::LayoutCleared {
                    frame: self.current_frame,
                });
                for item in items {
                    let event = place(self, item)?;
                    self.events.push(event);
                }
            }
        }
        Ok(())
    }

    fn place(&mut self, item: T) -> Result<LayoutEvent> {
        let hex = self.space.add(item)?;
        let (x, y) = to_pixel(hex, self.config.hex_size);
        Ok(LayoutEvent::ItemPlaced {
            hex,
            x,
            y,
            frame: self.current_frame,
        })
    }

    /// Pixel rectangle of `hex`, if it holds an item.
    pub fn placement(&self, hex: Hex) -> Option<Placement> {
        if !self.space.contains(hex) {
            return None;
        }
        let (x, y) = to_pixel(hex, self.config.hex_size);
        let (width, height) = hex_dimensions(self.config.hex_size);
        Some(Placement {
            hex,
            x,
            y,
            width,
            height,
        })
    }

    /// Placements of every item, ordered by `(q, r)`.
    pub fn placements(&self) -> Vec<Placement> {
        sorted_hexes(self.space.elements().map(|(hex, _)| hex))
            .into_iter()
            .filter_map(|hex| self.placement(hex))
            .collect()
    }

    /// Set the scroll offset of the grid origin from the viewport centre.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        self.translation = (x, y);
    }

    /// Current scroll offset.
    pub fn translation(&self) -> (f64, f64) {
        self.translation
    }

    /// The hex to bring to the viewport centre after scrolling stops.
    ///
    /// The hex under the centre wins if it is occupied. Otherwise the nearest
    /// occupied hexes compete and the one whose view is closest to the
    /// centre in pixels is chosen.
    pub fn snap_target(&self) -> Option<SnapTarget> {
        if self.space.is_empty() {
            return None;
        }

        let (tx, ty) = self.translation;
        let size = self.config.hex_size;
        let center = from_pixel(-tx, -ty, size);

        let hex = if self.space.contains(center) {
            center
        } else {
            let offset = |hex: &Hex| {
                let (px, py) = to_pixel(*hex, size);
                (px + tx).hypot(py + ty)
            };
            self.space
                .nearest_hexes(center)
                .into_iter()
                .min_by(|a, b| offset(a).total_cmp(&offset(b)).then((a.q, a.r).cmp(&(b.q, b.r))))?
        };

        let (px, py) = to_pixel(hex, size);
        Some(SnapTarget {
            hex,
            dx: -(px + tx),
            dy: -(py + ty),
        })
    }

    /// Compute the snap target, move the translation onto it and record it.
    pub fn snap(&mut self) -> Option<SnapTarget> {
        let target = self.snap_target()?;
        self.translation = (self.translation.0 + target.dx, self.translation.1 + target.dy);
        self.events.push(LayoutEvent::SnapRequested {
            hex: target.hex,
            dx: target.dx,
            dy: target.dy,
            frame: self.current_frame,
        });
        self.current_frame += 1;
        Some(target)
    }

    /// How far kinetic scrolling may carry the origin from the viewport
    /// centre before no item would remain visible.
    pub fn kinetic_scroll_limit(&self) -> f64 {
        let half_viewport = (self.config.viewport_width / 2.0).max(self.config.viewport_height / 2.0);
        let farthest = self
            .space
            .farthest_hexes(Hex::ORIGIN)
            .into_iter()
            .map(|hex| {
                let (x, y) = to_pixel(hex, self.config.hex_size);
                x.hypot(y)
            })
            .fold(0.0, f64::max);
        half_viewport + farthest
    }

    /// The item's hex and its occupied neighbours, sorted.
    ///
    /// Empty when the item is not placed or stands alone, since a press
    /// only animates a group.
    pub fn press_group(&self, item: &T) -> Vec<Hex> {
        let Some(hex) = self.space.find(item) else {
            return Vec::new();
        };
        let neighbors = self.space.neighbor_hexes(hex);
        if neighbors.is_empty() {
            return Vec::new();
        }
        sorted_hexes(neighbors.into_iter().chain(std::iter::once(hex)))
    }

    /// Run the command of the item at `hex`.
    pub fn invoke(&self, hex: Hex) -> Result<()> {
        let item = self.space.payload(hex)?;
        debug!(%hex, icon = item.icon(), "invoking item");
        item.invoke();
        Ok(())
    }

    /// Get all recorded events.
    pub fn events(&self) -> &[LayoutEvent] {
        &self.events
    }

    /// Get the number of placed items.
    pub fn len(&self) -> usize {
        self.space.len()
    }

    pub fn is_empty(&self) -> bool {
        self.space.is_empty()
    }

    /// The underlying grid.
    pub fn space(&self) -> &HexSpace<T> {
        &self.space
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Get a snapshot of the layout at the current frame.
    pub fn snapshot(&self) -> LayoutSnapshot {
        let size = self.config.hex_size;
        let mut items: Vec<PlacedItem> = self
            .space
            .elements()
            .map(|(hex, item)| {
                let (x, y) = to_pixel(hex, size);
                PlacedItem {
                    hex,
                    icon: item.icon().to_string(),
                    x,
                    y,
                }
            })
            .collect();
        items.sort_by_key(|item| (item.hex.q, item.hex.r));

        LayoutSnapshot {
            frame: self.current_frame,
            hex_size: size,
            item_count: items.len(),
            items,
        }
    }
}

fn sorted_hexes<I: IntoIterator<Item = Hex>>(hexes: I) -> Vec<Hex> {
    let mut hexes: Vec<Hex> = hexes.into_iter().collect();
    hexes.sort_by_key(|h| (h.q, h.r));
    hexes
}
